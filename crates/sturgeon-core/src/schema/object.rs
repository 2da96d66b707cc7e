use super::{Resolve, TypeRef};

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: String,
    pub fields: IndexMap<String, Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub args: IndexMap<String, Argument>,

    /// Set on root fields only. Nested fields read their value from the
    /// parent's resolved object by name.
    pub resolver: Option<Arc<dyn Resolve>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub ty: TypeRef,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> ObjectType {
        ObjectType {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, field: Field) -> ObjectType {
        self.push(field);
        self
    }

    /// Adds a field, replacing any existing field of the same name.
    pub fn push(&mut self, field: Field) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
            args: IndexMap::new(),
            resolver: None,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Field {
        let name = name.into();
        self.args.insert(
            name.clone(),
            Argument {
                name,
                ty: ty.into(),
            },
        );
        self
    }

    pub fn resolver(mut self, resolver: impl Resolve) -> Field {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}
