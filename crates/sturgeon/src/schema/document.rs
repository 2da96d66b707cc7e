use super::{Compiler, FieldDescriptor};

use sturgeon_core::schema::{Field, ObjectType, Scalar};

impl Compiler<'_> {
    /// The `<collection>_document` type: every scalar field plus a
    /// synthetic `id`.
    pub fn document_type(&self, collection: &str, fields: &[FieldDescriptor]) -> ObjectType {
        let mut document = ObjectType::new(document_type_name(collection));

        for field in fields {
            document.push(Field::new(&field.normalized, field.scalar));
        }

        // Pushed last so a store field normalizing to `id` cannot shadow it
        document.push(Field::new("id", Scalar::Id));
        document
    }
}

pub(crate) fn document_type_name(collection: &str) -> String {
    format!("{collection}_document")
}
