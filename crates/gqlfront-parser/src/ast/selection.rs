use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::FieldSelection;
use crate::ast::FragmentSelection;
use crate::ast::InlineFragmentSelection;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

/// One entry of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSelection),
    InlineFragment(InlineFragmentSelection),
}

#[inherent]
impl AstNode for Selection {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            Selection::Field(node) => node.origin(),
            Selection::FragmentSpread(node) => node.origin(),
            Selection::InlineFragment(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Selection::Field(node) => node.as_node_ref(),
            Selection::FragmentSpread(node) => node.as_node_ref(),
            Selection::InlineFragment(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            Selection::Field(node) => node.children(),
            Selection::FragmentSpread(node) => node.children(),
            Selection::InlineFragment(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for Selection {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (Selection::Field(a), Selection::Field(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Selection::FragmentSpread(a), Selection::FragmentSpread(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Selection::InlineFragment(a), Selection::InlineFragment(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(node) => &node.directives,
            Selection::FragmentSpread(node) => &node.directives,
            Selection::InlineFragment(node) => &node.directives,
        }
    }
}

impl From<FieldSelection> for Selection {
    fn from(node: FieldSelection) -> Self {
        Selection::Field(node)
    }
}

impl From<FragmentSelection> for Selection {
    fn from(node: FragmentSelection) -> Self {
        Selection::FragmentSpread(node)
    }
}

impl From<InlineFragmentSelection> for Selection {
    fn from(node: InlineFragmentSelection) -> Self {
        Selection::InlineFragment(node)
    }
}
