use sturgeon_core::schema::Scalar;

/// One scalar field of a collection, under both of its names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name in the store
    pub original: String,

    /// Name in the typed query protocol
    pub normalized: String,

    /// Store type name, e.g. `long`
    pub store_type: String,

    pub scalar: Scalar,
}
