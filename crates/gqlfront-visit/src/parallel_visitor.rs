use crate::Accept;
use crate::CoordinatedVisitor;
use crate::NodeWalker;
use crate::visit_coordination::ChildrenDecision;
use gqlfront_parser::ast::NodeRef;

/// How a [`ParallelVisitor`] walk ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParallelVisitOutcome {
    /// The whole tree was walked for at least one visitor.
    Completed,
    /// Every visitor aborted before the end of the tree.
    Aborted,
}

/// Walks a tree once and dispatches each node to several
/// [`CoordinatedVisitor`]s in turn.
///
/// Each visitor steers its own part of the walk through its
/// [`VisitCoordination`](crate::VisitCoordination): a visitor that skips a
/// subtree is simply not dispatched nodes inside it, and a visitor that
/// aborts is never dispatched again. The walk itself stops early only once
/// every visitor has aborted. Nodes go to visitors in the order the
/// visitors were added.
///
/// Parallel here is logical: everything runs on the calling thread.
#[derive(Default)]
pub struct ParallelVisitor<'a, 'v> {
    participants: Vec<Participant<'a, 'v>>,
}

struct Participant<'a, 'v> {
    visitor: &'v mut (dyn DynCoordinatedVisitor<'a> + 'v),
    aborted: bool,
    /// Depth of the node whose subtree this visitor is skipping.
    skipping_below: Option<usize>,
}

impl Participant<'_, '_> {
    fn is_listening(&self) -> bool {
        !self.aborted && self.skipping_below.is_none()
    }
}

impl<'a, 'v> ParallelVisitor<'a, 'v> {
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    pub fn add_visitor<V>(&mut self, visitor: &'v mut V)
    where
        V: CoordinatedVisitor<'a> + 'v,
    {
        self.participants.push(Participant {
            visitor,
            aborted: false,
            skipping_below: None,
        });
    }

    pub fn with_visitor<V>(mut self, visitor: &'v mut V) -> Self
    where
        V: CoordinatedVisitor<'a> + 'v,
    {
        self.add_visitor(visitor);
        self
    }

    pub fn visitor_count(&self) -> usize {
        self.participants.len()
    }

    /// Walks the tree under `root` (inclusive) in pre-order.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` if a visitor's coordination is misused
    /// during the walk.
    pub fn walk(&mut self, root: NodeRef<'a>) -> ParallelVisitOutcome {
        let visitor_count = self.participants.len();
        let outcome = AttachedWalk::attach(&mut self.participants).run(root);
        log::debug!(
            "Parallel walk from {} with {visitor_count} visitor(s) ended: {outcome:?}",
            root.kind_name(),
        );
        outcome
    }
}

/// The participants of one walk. Every attached coordination is detached
/// on drop, so a visitor that panics mid-walk leaves none of them stuck in
/// the walk.
struct AttachedWalk<'p, 'a, 'v> {
    participants: &'p mut [Participant<'a, 'v>],
    attached: usize,
}

impl<'p, 'a, 'v> AttachedWalk<'p, 'a, 'v> {
    fn attach(participants: &'p mut [Participant<'a, 'v>]) -> Self {
        let mut walk = Self {
            participants,
            attached: 0,
        };
        for participant in walk.participants.iter_mut() {
            participant.visitor.attach();
            participant.aborted = false;
            participant.skipping_below = None;
            walk.attached += 1;
        }
        walk
    }

    fn run(&mut self, root: NodeRef<'a>) -> ParallelVisitOutcome {
        if self.participants.is_empty() {
            return ParallelVisitOutcome::Completed;
        }
        let mut walker = NodeWalker::new(root);
        if self.enter(root, 0) {
            return ParallelVisitOutcome::Aborted;
        }
        loop {
            if let Some(child) = walker.next_child() {
                if !self.participants.iter().any(Participant::is_listening) {
                    continue;
                }
                walker.descend();
                if self.enter(child, walker.depth()) {
                    return ParallelVisitOutcome::Aborted;
                }
            } else {
                self.leave(walker.parent(), walker.depth());
                if walker.depth() == 0 {
                    return ParallelVisitOutcome::Completed;
                }
                walker.ascend();
            }
        }
    }

    /// Dispatches `node` to every listening visitor. Returns `true` once
    /// every visitor has aborted.
    fn enter(&mut self, node: NodeRef<'a>, depth: usize) -> bool {
        for (index, participant) in self.participants.iter_mut().enumerate() {
            if !participant.is_listening() {
                continue;
            }
            match participant.visitor.dispatch(node) {
                ChildrenDecision::Visit => {},
                ChildrenDecision::Skip => {
                    log::trace!("Visitor #{index} skips the children of {}", node.kind_name());
                    participant.skipping_below = Some(depth);
                },
                ChildrenDecision::Abort => {
                    log::trace!("Visitor #{index} aborted at {}", node.kind_name());
                    participant.aborted = true;
                },
            }
        }
        self.participants.iter().all(|participant| participant.aborted)
    }

    fn leave(&mut self, node: NodeRef<'a>, depth: usize) {
        for participant in self.participants.iter_mut().filter(|p| !p.aborted) {
            match participant.skipping_below {
                Some(skip_depth) if skip_depth == depth => participant.skipping_below = None,
                Some(_) => {},
                None => participant.visitor.leave(node),
            }
        }
    }
}

impl Drop for AttachedWalk<'_, '_, '_> {
    fn drop(&mut self) {
        for participant in &mut self.participants[..self.attached] {
            participant.visitor.detach();
        }
    }
}

/// Object-safe view of a [`CoordinatedVisitor`], so visitors with
/// different data types can share a walk.
trait DynCoordinatedVisitor<'a> {
    fn attach(&mut self);
    fn detach(&mut self);
    fn dispatch(&mut self, node: NodeRef<'a>) -> ChildrenDecision;
    fn leave(&mut self, node: NodeRef<'a>);
}

impl<'a, V> DynCoordinatedVisitor<'a> for V
where
    V: CoordinatedVisitor<'a>,
{
    fn attach(&mut self) {
        self.coordination_mut().attach();
    }

    fn detach(&mut self) {
        self.coordination_mut().detach();
    }

    fn dispatch(&mut self, node: NodeRef<'a>) -> ChildrenDecision {
        let data = self.coordination_mut().begin_dispatch();
        node.accept(self, data);
        self.coordination_mut().finish_dispatch()
    }

    fn leave(&mut self, node: NodeRef<'a>) {
        let data = self.coordination_mut().finish_children();
        self.leave_node(node, data);
    }
}
