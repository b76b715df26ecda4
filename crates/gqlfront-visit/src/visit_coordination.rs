/// Where a [`VisitCoordination`] is in the per-node protocol of a
/// [`ParallelVisitor`](crate::ParallelVisitor) walk.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CoordinationState {
    /// Between dispatches.
    Initial,
    /// Inside a `visit_*` call, before a decision about the children.
    BeforeVisitingChildren,
    SkippingChildren,
    AfterVisitingChildren,
    /// The visitor stopped for the rest of the walk.
    Aborted,
    /// The walk finished without the visitor aborting.
    Completed,
}

/// What a visitor decided about the children of the node it was just
/// dispatched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ChildrenDecision {
    Visit,
    Skip,
    Abort,
}

/// The coordination half of a [`CoordinatedVisitor`](crate::CoordinatedVisitor).
///
/// While a `visit_*` method runs, the visitor tells the coordinator what to
/// do with the node's children by calling exactly one of
/// [`visit_children`](Self::visit_children),
/// [`visit_children_with`](Self::visit_children_with),
/// [`skip_children`](Self::skip_children) or [`abort`](Self::abort).
/// Returning without a decision visits the children with the same data.
///
/// The coordination also holds the data stack: the data a node was
/// dispatched with stays on the stack until its subtree is finished.
#[derive(Clone, Debug)]
pub struct VisitCoordination<D> {
    state: CoordinationState,
    in_walk: bool,
    data_stack: Vec<D>,
}

impl<D: Clone> VisitCoordination<D> {
    /// A coordination whose root node will be dispatched with
    /// `initial_data`.
    pub fn new(initial_data: D) -> Self {
        Self {
            state: CoordinationState::Initial,
            in_walk: false,
            data_stack: vec![initial_data],
        }
    }

    pub fn state(&self) -> CoordinationState {
        self.state
    }

    pub fn is_aborted(&self) -> bool {
        self.state == CoordinationState::Aborted
    }

    /// Stops this visitor for the rest of the walk.
    ///
    /// # Panics
    ///
    /// Panics with a `MisuseError` outside of a `visit_*` call or after a
    /// decision about the current node's children was already made.
    pub fn abort(&mut self) {
        self.expect_undecided("abort");
        self.state = CoordinationState::Aborted;
    }

    /// Skips the current node's children. The visitor resumes with the
    /// node's next sibling.
    ///
    /// # Panics
    ///
    /// See [`abort`](Self::abort).
    pub fn skip_children(&mut self) {
        self.expect_undecided("skip_children");
        self.state = CoordinationState::SkippingChildren;
    }

    /// Visits the current node's children with the data the node was
    /// dispatched with.
    ///
    /// # Panics
    ///
    /// See [`abort`](Self::abort).
    pub fn visit_children(&mut self) {
        self.expect_undecided("visit_children");
        let data = self.current_data();
        self.data_stack.push(data);
        self.state = CoordinationState::AfterVisitingChildren;
    }

    /// Visits the current node's children with `data`.
    ///
    /// # Panics
    ///
    /// See [`abort`](Self::abort).
    pub fn visit_children_with(&mut self, data: D) {
        self.expect_undecided("visit_children_with");
        self.data_stack.push(data);
        self.state = CoordinationState::AfterVisitingChildren;
    }

    fn expect_undecided(&self, operation: &str) {
        if self.state != CoordinationState::BeforeVisitingChildren {
            panic!(
                "MisuseError: VisitCoordination::{operation}() called in state {:?}; \
                 it is only allowed while visiting a node, before deciding on its \
                 children",
                self.state,
            );
        }
    }

    fn current_data(&self) -> D {
        match self.data_stack.last() {
            Some(data) => data.clone(),
            None => panic!("MisuseError: VisitCoordination has no data for the current node"),
        }
    }

    // =========================================================================
    // Coordinator side
    // =========================================================================

    pub(crate) fn attach(&mut self) {
        if self.in_walk {
            panic!("MisuseError: VisitCoordination is already attached to an active walk");
        }
        self.in_walk = true;
        self.state = CoordinationState::Initial;
        self.data_stack.truncate(1);
    }

    /// Ends the walk: every coordination that did not abort completes.
    pub(crate) fn detach(&mut self) {
        self.in_walk = false;
        if self.state != CoordinationState::Aborted {
            self.state = CoordinationState::Completed;
        }
    }

    /// Moves into `BeforeVisitingChildren` and returns the data to dispatch
    /// the node with.
    pub(crate) fn begin_dispatch(&mut self) -> D {
        if self.state != CoordinationState::Initial {
            panic!(
                "MisuseError: cannot dispatch into a VisitCoordination in state {:?}",
                self.state,
            );
        }
        self.state = CoordinationState::BeforeVisitingChildren;
        self.current_data()
    }

    /// Reads the decision made during the dispatch and gets ready for the
    /// next one.
    pub(crate) fn finish_dispatch(&mut self) -> ChildrenDecision {
        match self.state {
            CoordinationState::BeforeVisitingChildren => {
                self.visit_children();
                self.state = CoordinationState::Initial;
                ChildrenDecision::Visit
            },
            CoordinationState::AfterVisitingChildren => {
                self.state = CoordinationState::Initial;
                ChildrenDecision::Visit
            },
            CoordinationState::SkippingChildren => {
                self.state = CoordinationState::Initial;
                ChildrenDecision::Skip
            },
            CoordinationState::Aborted => ChildrenDecision::Abort,
            state @ (CoordinationState::Initial | CoordinationState::Completed) => {
                panic!("MisuseError: VisitCoordination left its dispatch in state {state:?}")
            },
        }
    }

    /// Pops the children's data after a subtree and returns the data the
    /// subtree's root was dispatched with.
    pub(crate) fn finish_children(&mut self) -> D {
        self.data_stack.pop();
        self.current_data()
    }
}
