use super::args::BooleanQueryArg;

use sturgeon_core::{
    query::{BoolQuery, Query, RangeQuery},
    Names,
};

/// Translates a decoded `boolean_query` argument into the store's bool query.
///
/// Field names are mapped back to their original store names. A name the
/// registry has never seen is passed through as is. No argument yields an
/// empty bool query, which matches every document.
pub(crate) fn filter(names: &Names, arg: Option<&BooleanQueryArg>) -> Query {
    let mut query = BoolQuery::new();

    for (clause, fields) in arg.iter().flat_map(|arg| &arg.clauses) {
        for (field, term) in fields {
            let Some(range) = &term.range else { continue };

            if range.bounds.is_empty() {
                continue;
            }

            let original = names.to_original(field).unwrap_or_else(|| field.clone());

            let range = range
                .bounds
                .iter()
                .fold(RangeQuery::new(original), |range, (op, bound)| {
                    range.bound(*op, bound.clone())
                });

            query.push(*clause, range);
        }
    }

    Query::Bool(query)
}
