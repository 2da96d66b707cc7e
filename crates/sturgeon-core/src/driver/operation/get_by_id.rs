use super::*;

use crate::query::SourceFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct GetById {
    /// Which collection to read from
    pub collection: String,

    /// Store-assigned document id
    pub id: String,

    /// Which source fields to return
    pub source: SourceFilter,
}

impl From<GetById> for Operation {
    fn from(value: GetById) -> Self {
        Self::GetById(value)
    }
}
