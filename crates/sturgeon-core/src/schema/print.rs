use super::{Field, InputObjectType, ObjectType, Scalar, Schema, TypeDef, TypeRef};

use core::fmt::{self, Display, Formatter};

/// Prints the schema in SDL, root query first.
impl Display for Schema {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.uses(Scalar::DateTime) {
            writeln!(f, "scalar DateTime")?;
            writeln!(f)?;
        }

        writeln!(f, "schema {{")?;
        writeln!(f, "  query: {}", self.query.name)?;
        writeln!(f, "}}")?;

        write_object(f, &self.query)?;

        for ty in self.types.values() {
            match ty {
                TypeDef::Object(object) => write_object(f, object)?,
                TypeDef::InputObject(input) => write_input(f, input)?,
            }
        }

        Ok(())
    }
}

impl Schema {
    fn uses(&self, scalar: Scalar) -> bool {
        let object_uses = |object: &ObjectType| {
            object.fields.values().any(|field| {
                field.ty.as_scalar() == Some(scalar)
                    || field
                        .args
                        .values()
                        .any(|arg| arg.ty.as_scalar() == Some(scalar))
            })
        };

        object_uses(&self.query)
            || self.types.values().any(|ty| match ty {
                TypeDef::Object(object) => object_uses(object),
                TypeDef::InputObject(input) => input
                    .fields
                    .values()
                    .any(|field| field.ty.as_scalar() == Some(scalar)),
            })
    }
}

fn write_object(f: &mut Formatter, object: &ObjectType) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "type {} {{", object.name)?;
    for field in object.fields.values() {
        write_field(f, field)?;
    }
    writeln!(f, "}}")
}

fn write_field(f: &mut Formatter, field: &Field) -> fmt::Result {
    write!(f, "  {}", field.name)?;

    if !field.args.is_empty() {
        f.write_str("(")?;
        for (i, arg) in field.args.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", arg.name, arg.ty)?;
        }
        f.write_str(")")?;
    }

    writeln!(f, ": {}", field.ty)
}

fn write_input(f: &mut Formatter, input: &InputObjectType) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "input {} {{", input.name)?;
    for field in input.fields.values() {
        writeln!(f, "  {}: {}", field.name, field.ty)?;
    }
    writeln!(f, "}}")
}
