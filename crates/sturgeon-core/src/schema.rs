//! The typed query surface handed to the protocol execution engine.
//!
//! Types here are plain data: the engine walks [`Schema::query`] to find
//! root fields, validates arguments against the declared types and calls
//! each field's [`Resolve`] implementation.

mod input;
pub use input::{InputField, InputObjectType};

mod object;
pub use object::{Argument, Field, ObjectType};

mod print;

mod resolve;
pub use resolve::{Resolve, ResolveContext};

mod scalar;
pub use scalar::Scalar;

mod selection;
pub use selection::{Selection, SelectionSet};

mod ty;
pub use ty::TypeRef;

use indexmap::IndexMap;

/// Name of the generated root query type.
pub const ROOT_QUERY: &str = "RootQuery";

#[derive(Debug, Clone)]
pub struct Schema {
    /// The root query type. Each field is a collection operation.
    pub query: ObjectType,

    /// Every named object and input type reachable from the root, keyed by
    /// type name.
    pub types: IndexMap<String, TypeDef>,
}

#[derive(Debug, Clone)]
pub enum TypeDef {
    Object(ObjectType),
    InputObject(InputObjectType),
}

impl Schema {
    pub fn new(query: ObjectType, types: IndexMap<String, TypeDef>) -> Schema {
        Schema { query, types }
    }

    /// Looks up a root query field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.query.fields.get(name)
    }

    pub fn ty(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        match self.types.get(name)? {
            TypeDef::Object(object) => Some(object),
            TypeDef::InputObject(_) => None,
        }
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectType> {
        match self.types.get(name)? {
            TypeDef::InputObject(input) => Some(input),
            TypeDef::Object(_) => None,
        }
    }
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Object(object) => &object.name,
            TypeDef::InputObject(input) => &input.name,
        }
    }
}

impl From<ObjectType> for TypeDef {
    fn from(value: ObjectType) -> Self {
        TypeDef::Object(value)
    }
}

impl From<InputObjectType> for TypeDef {
    fn from(value: InputObjectType) -> Self {
        TypeDef::InputObject(value)
    }
}
