use crate::VisitorContext;

/// The data a [`ContextualVisitor`](crate::ContextualVisitor) passes to its
/// inner visitor: a snapshot of the context next to the caller's data.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextualData<'a, 's, D> {
    pub context: VisitorContext<'a, 's>,
    pub data: D,
}
