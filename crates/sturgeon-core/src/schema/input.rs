use super::TypeRef;

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub fields: IndexMap<String, InputField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub name: String,
    pub ty: TypeRef,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> InputObjectType {
        InputObjectType {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> InputObjectType {
        let name = name.into();
        self.fields.insert(
            name.clone(),
            InputField {
                name,
                ty: ty.into(),
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
