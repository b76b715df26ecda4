use crate::SchemaType;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::FragmentDefinition;
use gqlfront_parser::ast::OperationDefinition;
use gqlfront_parser::ast::SelectionSet;

/// What a [`ContextualVisitor`](crate::ContextualVisitor) knows about the
/// surroundings of the node being visited.
///
/// Every field is `None` until the walk reaches a node that sets it, and
/// reverts to its earlier value once that node's subtree is finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorContext<'a, 's> {
    /// The type of the value the current node describes: the return type
    /// of a field, the type condition of a fragment, the root type of an
    /// operation, or the declared type of an argument or variable.
    pub related_type: Option<SchemaType<'s>>,

    /// The type whose fields the enclosing selection set selects.
    pub related_parent_type: Option<SchemaType<'s>>,

    pub related_field_definition: Option<&'s FieldDefinition>,
    pub related_fragment_definition: Option<&'a FragmentDefinition>,
    pub related_operation_definition: Option<&'a OperationDefinition>,
    pub related_selection_set: Option<&'a SelectionSet>,
}
