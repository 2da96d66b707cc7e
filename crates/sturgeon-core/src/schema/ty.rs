use super::Scalar;

/// A reference to a type in field and argument position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Scalar(Scalar),

    /// A generated object or input object, by name.
    Named(String),

    List(Box<TypeRef>),

    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named(name.into())
    }

    pub fn list(item: impl Into<TypeRef>) -> TypeRef {
        TypeRef::List(Box::new(item.into()))
    }

    pub fn non_null(inner: impl Into<TypeRef>) -> TypeRef {
        TypeRef::NonNull(Box::new(inner.into()))
    }

    /// The innermost named type, with list and non-null wrappers removed.
    pub fn base(&self) -> &TypeRef {
        match self {
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base(),
            _ => self,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self.base() {
            TypeRef::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }
}

impl From<Scalar> for TypeRef {
    fn from(value: Scalar) -> Self {
        TypeRef::Scalar(value)
    }
}

impl core::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TypeRef::Scalar(scalar) => core::fmt::Display::fmt(scalar, f),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(item) => write!(f, "[{item}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
