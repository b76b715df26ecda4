use crate::Accept;
use crate::TraversalStack;
use crate::Visitor;
use gqlfront_parser::ast::NodeRef;

/// A [`Visitor`] that walks a tree by explicitly descending.
///
/// [`traverse`](Self::traverse) dispatches a node to its `visit_*` method
/// while recording it on the [`TraversalStack`]. Inside that method the
/// visitor decides whether and how to continue: [`descend`](Self::descend)
/// dispatches every child with the node's data and
/// [`descend_with`](Self::descend_with) with new data. Children of a node
/// whose method does neither are never visited.
///
/// ```rust
/// use gqlfront_parser::ast::FieldSelection;
/// use gqlfront_parser::ast::NodeRef;
/// use gqlfront_visit::TraversalStack;
/// use gqlfront_visit::TraversingVisitor;
/// use gqlfront_visit::Visitor;
///
/// /// Collects field names, tracking nesting depth in the data.
/// #[derive(Default)]
/// struct FieldNames<'a> {
///     stack: TraversalStack<'a, usize>,
///     names: Vec<(usize, String)>,
/// }
///
/// impl<'a> Visitor<'a> for FieldNames<'a> {
///     type Data = usize;
///     type Output = ();
///
///     fn visit_node(&mut self, _node: NodeRef<'a>, _depth: usize) {
///         self.descend();
///     }
///
///     fn visit_field_selection(&mut self, node: &'a FieldSelection, depth: usize) {
///         self.names.push((depth, node.name.as_str().to_string()));
///         self.descend_with(depth + 1);
///     }
/// }
///
/// impl<'a> TraversingVisitor<'a> for FieldNames<'a> {
///     fn traversal_stack(&self) -> &TraversalStack<'a, usize> {
///         &self.stack
///     }
/// }
///
/// let document = gqlfront_parser::parse_document("{ a { b } c }").unwrap();
/// let mut visitor = FieldNames::default();
/// visitor.traverse(document.as_node_ref(), 0);
/// assert_eq!(
///     visitor.names,
///     [(0, "a".to_string()), (1, "b".to_string()), (0, "c".to_string())],
/// );
/// ```
pub trait TraversingVisitor<'a>: Visitor<'a, Data: Clone> {
    fn traversal_stack(&self) -> &TraversalStack<'a, Self::Data>;

    /// Dispatches `node` with `data`, making it the current node for the
    /// duration of the call.
    fn traverse(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        let stack = self.traversal_stack().clone();
        let _frame = stack.enter(node, data.clone());
        node.accept(self, data)
    }

    /// Traverses the current node's children with the current data.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` outside of a `traverse()` dispatch.
    fn descend(&mut self) -> Vec<Self::Output> {
        let Some((node, data)) = self.traversal_stack().current() else {
            panic!("MisuseError: descend() called outside of an active traversal");
        };
        traverse_children(self, node, data)
    }

    /// Traverses the current node's children with `data`.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` outside of a `traverse()` dispatch.
    fn descend_with(&mut self, data: Self::Data) -> Vec<Self::Output> {
        let Some(node) = self.traversal_stack().current_node() else {
            panic!("MisuseError: descend_with() called outside of an active traversal");
        };
        traverse_children(self, node, data)
    }
}

fn traverse_children<'a, V>(visitor: &mut V, node: NodeRef<'a>, data: V::Data) -> Vec<V::Output>
where
    V: TraversingVisitor<'a> + ?Sized,
{
    node.children()
        .into_iter()
        .map(|child| visitor.traverse(child, data.clone()))
        .collect()
}
