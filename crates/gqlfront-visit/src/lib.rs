//! Visitors, walkers and transformers over the AST of [`gqlfront_parser`].
//!
//! - [`Visitor`] is the base trait: one method per node kind with defaults
//!   cascading through node categories down to a single required
//!   [`visit_node`](Visitor::visit_node). [`Accept`] dispatches a node to
//!   the method of its concrete kind.
//! - [`TraversingVisitor`] walks a tree with explicit
//!   [`descend`](TraversingVisitor::descend) calls.
//! - [`ParallelVisitor`] runs several [`CoordinatedVisitor`]s over a
//!   single walk, each able to skip subtrees or abort on its own.
//! - [`ContextualVisitor`] tracks the [`Schema`] types related to each node
//!   of an executable document for an inner visitor.
//! - [`Transformer`] rewrites trees copy-on-write.
//! - [`NodeWalker`] is a non-recursive cursor the others can build on.
//!
//! ```rust
//! use gqlfront_parser::ast::FieldSelection;
//! use gqlfront_parser::ast::NodeRef;
//! use gqlfront_visit::Accept;
//! use gqlfront_visit::Visitor;
//!
//! struct IsField;
//!
//! impl<'a> Visitor<'a> for IsField {
//!     type Data = ();
//!     type Output = bool;
//!
//!     fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) -> bool {
//!         false
//!     }
//!
//!     fn visit_field_selection(&mut self, _node: &'a FieldSelection, _data: ()) -> bool {
//!         true
//!     }
//! }
//!
//! let document = gqlfront_parser::parse_document("{ a }").unwrap();
//! let selection = &document.operations().next().unwrap().selection_set.selections[0];
//! assert!(selection.accept(&mut IsField, ()));
//! assert!(!document.accept(&mut IsField, ()));
//! ```

mod accept;
mod built_in_scalar;
mod contextual_data;
mod contextual_visitor;
mod coordinated_visitor;
mod document_schema;
mod named_type;
mod node_walker;
mod parallel_visitor;
mod schema;
mod schema_type;
pub mod transform_children;
mod transformer;
mod traversal_stack;
mod traversing_visitor;
mod visit_coordination;
mod visitor;
mod visitor_context;

pub use accept::Accept;
pub use built_in_scalar::BuiltInScalar;
pub use contextual_data::ContextualData;
pub use contextual_visitor::ContextualVisitor;
pub use coordinated_visitor::CoordinatedVisitor;
pub use document_schema::DocumentSchema;
pub use named_type::NamedType;
pub use node_walker::NodeWalker;
pub use parallel_visitor::ParallelVisitOutcome;
pub use parallel_visitor::ParallelVisitor;
pub use schema::Schema;
pub use schema_type::SchemaType;
pub use transformer::Transformer;
pub use traversal_stack::TraversalGuard;
pub use traversal_stack::TraversalStack;
pub use traversing_visitor::TraversingVisitor;
pub use visit_coordination::CoordinationState;
pub use visit_coordination::VisitCoordination;
pub use visitor::Visitor;
pub use visitor_context::VisitorContext;

#[cfg(test)]
mod tests;
