use super::{Compiler, FieldDescriptor, KEY_VALUE};

use sturgeon_core::{
    query::AggregationKind,
    schema::{Field, ObjectType, Scalar, TypeRef},
};

/// Output types backing `<collection>_aggregations`.
#[derive(Debug, Clone)]
pub struct AggregationTypes {
    /// `<collection>_aggregation_document`, one field per aggregation kind
    pub root: ObjectType,

    /// One object per aggregation kind, mirroring the collection's fields
    pub kinds: Vec<ObjectType>,
}

impl AggregationTypes {
    pub fn into_types(self) -> impl Iterator<Item = ObjectType> {
        std::iter::once(self.root).chain(self.kinds)
    }
}

impl Compiler<'_> {
    pub fn aggregation_types(&self, collection: &str, fields: &[FieldDescriptor]) -> AggregationTypes {
        let mut root = ObjectType::new(aggregation_type_name(collection));
        let mut kinds = Vec::with_capacity(AggregationKind::ALL.len());

        for kind in AggregationKind::ALL {
            let name = format!("{collection}_{}_aggregation_document", kind.as_str());

            let object = fields.iter().fold(ObjectType::new(&name), |object, field| {
                object.field(Field::new(&field.normalized, aggregation_value_type(kind, field.scalar)))
            });

            root.push(Field::new(kind.as_str(), TypeRef::named(name)));
            kinds.push(object);
        }

        AggregationTypes { root, kinds }
    }
}

/// Value type of `field` under an aggregation kind.
pub fn aggregation_value_type(kind: AggregationKind, scalar: Scalar) -> TypeRef {
    match kind {
        AggregationKind::Cardinality => TypeRef::Scalar(Scalar::Int),
        AggregationKind::Percentiles => TypeRef::list(TypeRef::named(KEY_VALUE)),
        AggregationKind::Min | AggregationKind::Max | AggregationKind::Avg | AggregationKind::Sum => {
            TypeRef::Scalar(scalar)
        }
    }
}

/// The shared `{ key, value }` pair type of percentile results.
pub fn key_value_type() -> ObjectType {
    ObjectType::new(KEY_VALUE)
        .field(Field::new("key", Scalar::Float))
        .field(Field::new("value", Scalar::Float))
}

pub(crate) fn aggregation_type_name(collection: &str) -> String {
    format!("{collection}_aggregation_document")
}
