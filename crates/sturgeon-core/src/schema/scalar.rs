use crate::{Error, Result};

/// Leaf types of the typed query protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Boolean,
    DateTime,
    Float,
    Id,
    Int,
    String,
}

impl Scalar {
    /// Maps a store field type to its protocol scalar.
    ///
    /// | store     | protocol   |
    /// |-----------|------------|
    /// | `float`   | `Float`    |
    /// | `long`    | `Int`      |
    /// | `string`  | `String`   |
    /// | `date`    | `DateTime` |
    /// | `boolean` | `Boolean`  |
    pub fn from_store_type(kind: &str) -> Result<Scalar> {
        match kind {
            "float" => Ok(Scalar::Float),
            "long" => Ok(Scalar::Int),
            "string" => Ok(Scalar::String),
            "date" => Ok(Scalar::DateTime),
            "boolean" => Ok(Scalar::Boolean),
            _ => Err(Error::unsupported_type(kind)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scalar::Boolean => "Boolean",
            Scalar::DateTime => "DateTime",
            Scalar::Float => "Float",
            Scalar::Id => "ID",
            Scalar::Int => "Int",
            Scalar::String => "String",
        }
    }

    /// Built-in scalars need no declaration in SDL.
    pub fn is_builtin(self) -> bool {
        !matches!(self, Scalar::DateTime)
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
