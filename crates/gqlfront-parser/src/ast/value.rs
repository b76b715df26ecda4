use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::EqualsAst;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::VariableValue;
use crate::Origin;
use inherent::inherent;

/// An input value literal.
///
/// Whether variables are allowed depends on where the value appears; the
/// parser rejects them in const positions such as default values.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(BooleanValue),
    Enum(EnumValue),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue),
    Null(NullValue),
    Object(ObjectValue),
    String(StringValue),
    Variable(VariableValue),
}

#[inherent]
impl AstNode for Value {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            Value::Boolean(node) => node.origin(),
            Value::Enum(node) => node.origin(),
            Value::Float(node) => node.origin(),
            Value::Int(node) => node.origin(),
            Value::List(node) => node.origin(),
            Value::Null(node) => node.origin(),
            Value::Object(node) => node.origin(),
            Value::String(node) => node.origin(),
            Value::Variable(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Value::Boolean(node) => node.as_node_ref(),
            Value::Enum(node) => node.as_node_ref(),
            Value::Float(node) => node.as_node_ref(),
            Value::Int(node) => node.as_node_ref(),
            Value::List(node) => node.as_node_ref(),
            Value::Null(node) => node.as_node_ref(),
            Value::Object(node) => node.as_node_ref(),
            Value::String(node) => node.as_node_ref(),
            Value::Variable(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            Value::Boolean(node) => node.children(),
            Value::Enum(node) => node.children(),
            Value::Float(node) => node.children(),
            Value::Int(node) => node.children(),
            Value::List(node) => node.children(),
            Value::Null(node) => node.children(),
            Value::Object(node) => node.children(),
            Value::String(node) => node.children(),
            Value::Variable(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for Value {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Enum(a), Value::Enum(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Float(a), Value::Float(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Int(a), Value::Int(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::List(a), Value::List(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Null(a), Value::Null(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Object(a), Value::Object(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::String(a), Value::String(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Value::Variable(a), Value::Variable(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(node) => node.value_type(),
            Value::Enum(node) => node.value_type(),
            Value::Float(node) => node.value_type(),
            Value::Int(node) => node.value_type(),
            Value::List(node) => node.value_type(),
            Value::Null(node) => node.value_type(),
            Value::Object(node) => node.value_type(),
            Value::String(node) => node.value_type(),
            Value::Variable(node) => node.value_type(),
        }
    }

    /// `true` if this value contains no variable references.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(object) => object.fields.iter().all(|field| field.value.is_const()),
            Value::Boolean(_)
            | Value::Enum(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null(_)
            | Value::String(_) => true,
        }
    }
}

/// The kind of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueType {
    Boolean,
    Enum,
    Float,
    Int,
    List,
    Null,
    Object,
    String,
    Variable,
}

impl From<BooleanValue> for Value {
    fn from(node: BooleanValue) -> Self {
        Value::Boolean(node)
    }
}

impl From<EnumValue> for Value {
    fn from(node: EnumValue) -> Self {
        Value::Enum(node)
    }
}

impl From<FloatValue> for Value {
    fn from(node: FloatValue) -> Self {
        Value::Float(node)
    }
}

impl From<IntValue> for Value {
    fn from(node: IntValue) -> Self {
        Value::Int(node)
    }
}

impl From<ListValue> for Value {
    fn from(node: ListValue) -> Self {
        Value::List(node)
    }
}

impl From<NullValue> for Value {
    fn from(node: NullValue) -> Self {
        Value::Null(node)
    }
}

impl From<ObjectValue> for Value {
    fn from(node: ObjectValue) -> Self {
        Value::Object(node)
    }
}

impl From<StringValue> for Value {
    fn from(node: StringValue) -> Self {
        Value::String(node)
    }
}

impl From<VariableValue> for Value {
    fn from(node: VariableValue) -> Self {
        Value::Variable(node)
    }
}
