use crate::NamedType;
use std::fmt;

/// A type as a schema resolves it: a named type wrapped in any number of
/// list and non-null layers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaType<'s> {
    Named(NamedType<'s>),
    List(Box<SchemaType<'s>>),
    NonNull(Box<SchemaType<'s>>),
}

impl<'s> SchemaType<'s> {
    /// The named type at the core of this type.
    pub fn named_type(&self) -> &NamedType<'s> {
        match self {
            SchemaType::Named(named) => named,
            SchemaType::List(inner) | SchemaType::NonNull(inner) => inner.named_type(),
        }
    }

    /// This type without a non-null wrapper, if it has one.
    pub fn nullable(&self) -> &SchemaType<'s> {
        match self {
            SchemaType::NonNull(inner) => inner,
            other => other,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, SchemaType::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), SchemaType::List(_))
    }
}

impl fmt::Display for SchemaType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Named(named) => write!(f, "{named}"),
            SchemaType::List(inner) => write!(f, "[{inner}]"),
            SchemaType::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
