use super::{Compiler, FieldDescriptor};

use sturgeon_core::{
    query::{Clause, RangeOp},
    schema::{InputObjectType, TypeRef},
};

/// Input types backing the `boolean_query` argument of one collection.
#[derive(Debug, Clone)]
pub struct BooleanQueryTypes {
    /// `<collection>_boolean_args`, with one field per clause kind
    pub root: InputObjectType,

    /// Per clause kind: field name to term-level query
    pub clauses: Vec<InputObjectType>,

    /// Per field: term-level query objects and their range bounds
    pub terms: Vec<InputObjectType>,
}

impl BooleanQueryTypes {
    /// All generated input types, root first.
    pub fn into_types(self) -> impl Iterator<Item = InputObjectType> {
        std::iter::once(self.root)
            .chain(self.clauses)
            .chain(self.terms)
    }
}

impl Compiler<'_> {
    /// Builds `<collection>_boolean_args`.
    ///
    /// Shape: clause kind, then field name, then term-level query kind
    /// (currently `range`), then comparison operator typed to the field's
    /// scalar.
    pub fn boolean_query_types(
        &self,
        collection: &str,
        fields: &[FieldDescriptor],
    ) -> BooleanQueryTypes {
        let mut terms = Vec::with_capacity(fields.len() * 2);

        for field in fields {
            let range_name = format!("{collection}_{}_range_args", field.normalized);
            let term_name = format!("{collection}_{}_term_level_args", field.normalized);

            let range = RangeOp::ALL
                .into_iter()
                .fold(InputObjectType::new(&range_name), |ty, op| {
                    ty.field(op.as_str(), field.scalar)
                });

            terms.push(InputObjectType::new(term_name).field("range", TypeRef::named(range_name)));
            terms.push(range);
        }

        // A fresh type per (collection, clause) keeps type names unique
        let clauses: Vec<_> = Clause::ALL
            .into_iter()
            .map(|clause| {
                fields.iter().fold(
                    InputObjectType::new(clause_type_name(collection, clause)),
                    |ty, field| {
                        ty.field(
                            &field.normalized,
                            TypeRef::named(format!(
                                "{collection}_{}_term_level_args",
                                field.normalized
                            )),
                        )
                    },
                )
            })
            .collect();

        let root = Clause::ALL.into_iter().fold(
            InputObjectType::new(boolean_args_type_name(collection)),
            |ty, clause| {
                ty.field(
                    clause.as_str(),
                    TypeRef::named(clause_type_name(collection, clause)),
                )
            },
        );

        BooleanQueryTypes {
            root,
            clauses,
            terms,
        }
    }
}

pub(crate) fn boolean_args_type_name(collection: &str) -> String {
    format!("{collection}_boolean_args")
}

fn clause_type_name(collection: &str, clause: Clause) -> String {
    format!("{collection}_boolean_args_{}", clause.as_str())
}
