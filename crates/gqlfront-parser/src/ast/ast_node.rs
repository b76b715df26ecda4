use crate::Origin;
use crate::SmallVec;
use crate::ast::NodeRef;

/// Inline capacity covers the children of nearly every node without
/// spilling to the heap.
pub type NodeChildren<'a> = SmallVec<[NodeRef<'a>; 8]>;

/// Structural equality between AST trees.
///
/// `equals_ast` recurses into every child in order. When
/// `including_origin` is `false`, origins are ignored so that trees parsed
/// from differently formatted sources (or synthesized trees) can be
/// compared.
pub trait EqualsAst {
    fn equals_ast(&self, other: &Self, including_origin: bool) -> bool;
}

impl<T: EqualsAst> EqualsAst for Option<T> {
    fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equals_ast(b, including_origin),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: EqualsAst> EqualsAst for Vec<T> {
    fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.equals_ast(b, including_origin))
    }
}

impl<T: EqualsAst> EqualsAst for Box<T> {
    fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (**self).equals_ast(other, including_origin)
    }
}

/// Trait implemented by every AST node type and node category enum.
///
/// All implementations use `#[inherent]`, so the methods are callable
/// without importing this trait.
pub trait AstNode: EqualsAst {
    /// Where this node came from. `None` for synthesized nodes.
    fn origin(&self) -> Option<&Origin>;

    /// A borrowed handle to this node. For category enums (e.g.
    /// [`Value`](crate::ast::Value)) this is the handle of the concrete
    /// node inside.
    fn as_node_ref(&self) -> NodeRef<'_>;

    /// The direct children of this node, in grammar order.
    fn children(&self) -> NodeChildren<'_>;
}
