use sturgeon_core::{query::SourceFilter, schema::SelectionSet, Names};

/// Synthetic document field holding the store-assigned id.
pub(crate) const ID: &str = "id";

/// Store fields a document selection needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Projection {
    /// Original store field names, in selection order, without duplicates
    pub(crate) fields: Vec<String>,

    /// Whether the caller selected `id`
    pub(crate) include_id: bool,
}

impl Projection {
    pub(crate) fn from_selection(names: &Names, selection: &SelectionSet) -> Projection {
        let mut projection = Projection::default();

        for field in selection {
            match field.name.as_str() {
                ID => projection.include_id = true,
                name if name.starts_with("__") => {}
                name => {
                    let original = names.to_original(name).unwrap_or_else(|| name.to_string());
                    if !projection.fields.contains(&original) {
                        projection.fields.push(original);
                    }
                }
            }
        }

        projection
    }

    /// Source filter for the store request. Selecting only `id` fetches no
    /// source at all.
    pub(crate) fn source(&self) -> SourceFilter {
        SourceFilter::from_fields(self.fields.clone())
    }
}
