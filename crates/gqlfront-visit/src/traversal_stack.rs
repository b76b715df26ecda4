use gqlfront_parser::ast::NodeRef;
use std::cell::RefCell;
use std::rc::Rc;

/// The `(node, data)` frames of the dispatches a
/// [`TraversingVisitor`](crate::TraversingVisitor) is currently inside,
/// innermost last.
///
/// Clones share the same frames. A frame is pushed by
/// [`enter`](Self::enter) and popped when the returned guard is dropped,
/// so frames are unwound even if a visitor method panics.
pub struct TraversalStack<'a, D> {
    frames: Rc<RefCell<Vec<TraversalFrame<'a, D>>>>,
}

#[derive(Clone, Debug)]
struct TraversalFrame<'a, D> {
    node: NodeRef<'a>,
    data: D,
}

impl<'a, D> TraversalStack<'a, D> {
    pub fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Number of active dispatches.
    pub fn depth(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    /// The node of the innermost active dispatch.
    pub fn current_node(&self) -> Option<NodeRef<'a>> {
        self.frames.borrow().last().map(|frame| frame.node)
    }

    /// Pushes a frame that lives until the returned guard is dropped.
    #[must_use = "the frame is popped as soon as the guard is dropped"]
    pub fn enter(&self, node: NodeRef<'a>, data: D) -> TraversalGuard<'a, D> {
        self.frames.borrow_mut().push(TraversalFrame { node, data });
        TraversalGuard {
            frames: Rc::clone(&self.frames),
        }
    }
}

impl<'a, D: Clone> TraversalStack<'a, D> {
    /// The node and data of the innermost active dispatch.
    pub fn current(&self) -> Option<(NodeRef<'a>, D)> {
        self.frames
            .borrow()
            .last()
            .map(|frame| (frame.node, frame.data.clone()))
    }
}

impl<D> Clone for TraversalStack<'_, D> {
    fn clone(&self) -> Self {
        Self {
            frames: Rc::clone(&self.frames),
        }
    }
}

impl<D> Default for TraversalStack<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for TraversalStack<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.frames.borrow().iter()).finish()
    }
}

/// Pops the frame pushed by [`TraversalStack::enter`] on drop.
pub struct TraversalGuard<'a, D> {
    frames: Rc<RefCell<Vec<TraversalFrame<'a, D>>>>,
}

impl<D> Drop for TraversalGuard<'_, D> {
    fn drop(&mut self) {
        self.frames.borrow_mut().pop();
    }
}
