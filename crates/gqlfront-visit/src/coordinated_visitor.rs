use crate::VisitCoordination;
use crate::Visitor;
use gqlfront_parser::ast::NodeRef;

/// A [`Visitor`] that can share a single walk with other visitors through
/// a [`ParallelVisitor`](crate::ParallelVisitor).
///
/// The visitor owns a [`VisitCoordination`] and uses it from its `visit_*`
/// methods to steer the walk for itself only: skipping a subtree or
/// aborting does not affect the other visitors.
pub trait CoordinatedVisitor<'a>: Visitor<'a, Data: Clone, Output = ()> {
    fn coordination(&self) -> &VisitCoordination<Self::Data>;

    fn coordination_mut(&mut self) -> &mut VisitCoordination<Self::Data>;

    /// Called once the subtree of `node` is finished, with the data `node`
    /// was dispatched with. Only called for nodes whose children this
    /// visitor chose to visit.
    fn leave_node(&mut self, node: NodeRef<'a>, data: Self::Data) {
        let _ = (node, data);
    }
}
