use gqlfront_parser::ast::NodeChildren;
use gqlfront_parser::ast::NodeRef;

/// A non-recursive cursor over an AST.
///
/// The walker sits on a *parent* node and steps through its children with
/// [`next_child`](Self::next_child). [`descend`](Self::descend) makes the
/// current child the new parent and [`ascend`](Self::ascend) returns to
/// the previous one, resuming where iteration left off. Ancestors are kept
/// in parallel stacks instead of on the call stack, so arbitrarily deep
/// trees can be walked without recursion.
///
/// ```rust
/// use gqlfront_visit::NodeWalker;
///
/// let document = gqlfront_parser::parse_document("{ a b }").unwrap();
/// let mut walker = NodeWalker::new(document.as_node_ref());
/// let operation = walker.next_child().unwrap();
/// assert_eq!(operation.kind_name(), "OperationDefinition");
/// walker.descend();
/// assert_eq!(walker.depth(), 1);
/// assert!(walker.parent().same_node(operation));
/// ```
#[derive(Clone, Debug)]
pub struct NodeWalker<'a> {
    parent: NodeRef<'a>,
    children: NodeChildren<'a>,
    /// Index of `child` within `children`, or `None` before the first
    /// call to `next_child()`.
    child_index: Option<usize>,
    child: Option<NodeRef<'a>>,

    saved_parents: Vec<NodeRef<'a>>,
    saved_children: Vec<NodeChildren<'a>>,
    saved_child_indices: Vec<Option<usize>>,
    saved_child: Vec<Option<NodeRef<'a>>>,
}

impl<'a> NodeWalker<'a> {
    pub fn new(root: NodeRef<'a>) -> Self {
        Self {
            parent: root,
            children: root.children(),
            child_index: None,
            child: None,
            saved_parents: Vec::new(),
            saved_children: Vec::new(),
            saved_child_indices: Vec::new(),
            saved_child: Vec::new(),
        }
    }

    pub fn parent(&self) -> NodeRef<'a> {
        self.parent
    }

    /// The child most recently returned by `next_child()`, if any.
    pub fn child(&self) -> Option<NodeRef<'a>> {
        self.child
    }

    /// Advances to the parent's next child. Returns `None` (and stays
    /// `None`) once the children are exhausted.
    pub fn next_child(&mut self) -> Option<NodeRef<'a>> {
        let next_index = self.child_index.map_or(0, |index| index + 1);
        self.child = self.children.get(next_index).copied();
        self.child_index = Some(next_index.min(self.children.len()));
        self.child
    }

    /// Number of `descend()` calls not yet matched by `ascend()`.
    pub fn depth(&self) -> usize {
        self.saved_parents.len()
    }

    /// Makes the current child the parent.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` if there is no current child.
    pub fn descend(&mut self) {
        let Some(child) = self.child else {
            panic!(
                "MisuseError: NodeWalker::descend() called without a current child (parent: {})",
                self.parent.kind_name(),
            );
        };
        let children = child.children();
        self.saved_parents.push(std::mem::replace(&mut self.parent, child));
        self.saved_children.push(std::mem::replace(&mut self.children, children));
        self.saved_child_indices.push(self.child_index.take());
        self.saved_child.push(self.child.take());
    }

    /// Returns to the previous parent, whose current child is again the
    /// node that was descended into.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` at the root.
    pub fn ascend(&mut self) {
        let Some(parent) = self.saved_parents.pop() else {
            panic!("MisuseError: NodeWalker::ascend() called at the root");
        };
        self.parent = parent;
        self.children = self.saved_children.pop().unwrap_or_default();
        self.child_index = self.saved_child_indices.pop().flatten();
        self.child = self.saved_child.pop().flatten();
    }
}
