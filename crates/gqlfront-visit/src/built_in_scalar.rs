use std::fmt;

/// The scalar types every GraphQL schema provides without declaring them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltInScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}

impl BuiltInScalar {
    pub const ALL: [BuiltInScalar; 5] = [
        BuiltInScalar::Boolean,
        BuiltInScalar::Float,
        BuiltInScalar::ID,
        BuiltInScalar::Int,
        BuiltInScalar::String,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuiltInScalar::Boolean => "Boolean",
            BuiltInScalar::Float => "Float",
            BuiltInScalar::ID => "ID",
            BuiltInScalar::Int => "Int",
            BuiltInScalar::String => "String",
        }
    }
}

impl fmt::Display for BuiltInScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
