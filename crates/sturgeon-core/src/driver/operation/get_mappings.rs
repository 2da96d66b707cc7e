use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct GetMappings {
    /// Collection name pattern; `*` matches any run of characters.
    pub pattern: String,
}

impl From<GetMappings> for Operation {
    fn from(value: GetMappings) -> Self {
        Self::GetMappings(value)
    }
}
