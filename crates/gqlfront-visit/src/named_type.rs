use crate::BuiltInScalar;
use gqlfront_parser::ast::TypeDefinition;
use std::fmt;

/// A named type known to a [`Schema`](crate::Schema).
///
/// Two named types are equal when their names are, whichever definition
/// they point at.
#[derive(Clone, Copy, Debug)]
pub enum NamedType<'s> {
    BuiltIn(BuiltInScalar),
    Defined(&'s TypeDefinition),
}

impl<'s> NamedType<'s> {
    pub fn name(&self) -> &'s str {
        match *self {
            NamedType::BuiltIn(scalar) => scalar.name(),
            NamedType::Defined(definition) => definition.name().as_str(),
        }
    }

    pub fn definition(&self) -> Option<&'s TypeDefinition> {
        match *self {
            NamedType::BuiltIn(_) => None,
            NamedType::Defined(definition) => Some(definition),
        }
    }

    /// Scalars and enums: types whose values have no selectable fields.
    pub fn is_leaf(&self) -> bool {
        match self {
            NamedType::BuiltIn(_) => true,
            NamedType::Defined(definition) => definition.is_leaf(),
        }
    }
}

impl PartialEq for NamedType<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for NamedType<'_> {}

impl fmt::Display for NamedType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
