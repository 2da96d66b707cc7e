use serde_json::Value;

/// Which parts of each document's source the store should return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceFilter {
    /// The whole source document.
    #[default]
    All,

    /// No source; only metadata such as the document id.
    Disabled,

    /// Only the listed (original) field names.
    Includes(Vec<String>),
}

impl SourceFilter {
    /// Builds a filter from a projection. An empty projection disables the
    /// source instead of fetching all of it.
    pub fn from_fields(fields: Vec<String>) -> SourceFilter {
        if fields.is_empty() {
            SourceFilter::Disabled
        } else {
            SourceFilter::Includes(fields)
        }
    }

    /// Returns `true` if `field` is part of the returned source.
    pub fn includes(&self, field: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Disabled => false,
            SourceFilter::Includes(fields) => fields.iter().any(|f| f == field),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SourceFilter::All => Value::Bool(true),
            SourceFilter::Disabled => Value::Bool(false),
            SourceFilter::Includes(fields) => {
                Value::Array(fields.iter().cloned().map(Value::String).collect())
            }
        }
    }
}
