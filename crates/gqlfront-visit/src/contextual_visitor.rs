use crate::Accept;
use crate::ContextualData;
use crate::Schema;
use crate::SchemaType;
use crate::TraversalStack;
use crate::TraversingVisitor;
use crate::Visitor;
use crate::VisitorContext;
use gqlfront_parser::ast::Document;
use gqlfront_parser::ast::FragmentDefinition;
use gqlfront_parser::ast::NamedTypeRef;
use gqlfront_parser::ast::NodeRef;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Walks a document and tells an inner [`Visitor`] where each node sits
/// relative to a [`Schema`].
///
/// The walk is a pre-order [`TraversingVisitor`] walk of the whole tree.
/// Before each node is dispatched to the inner visitor, the context is
/// updated for that node and the inner visitor receives a snapshot of it
/// in [`ContextualData`] together with the walk's data. Whatever a node
/// changes is restored once its subtree is finished, so siblings always
/// start from their parent's context.
///
/// Context updates per node:
///
/// | Node | Update |
/// |------|--------|
/// | `OperationDefinition` | operation = node, fragment = `None`, type = root type for its kind |
/// | `FragmentDefinition` | fragment = node, type = its type condition |
/// | `SelectionSet` | selection set = node, parent type = type |
/// | `FieldSelection` | field = parent type's field of that name, type = field's type |
/// | `FragmentSelection` | fragment = spread fragment, type = its type condition |
/// | `InlineFragmentSelection` | type = type condition, if it has one |
/// | `FieldDefinition`, `ArgumentDefinition`, `VariableDefinition` | type = declared type |
/// | type definitions and extensions | type = the type being defined |
///
/// Lookups that fail (unknown types or fields) set the looked-up value to
/// `None` rather than stopping the walk.
pub struct ContextualVisitor<'a, 's, S, V, D> {
    inner: V,
    schema: &'s S,
    document: &'a Document,
    fragments: IndexMap<&'a str, &'a FragmentDefinition>,
    context: Rc<RefCell<VisitorContext<'a, 's>>>,
    stack: TraversalStack<'a, D>,
}

impl<'a, 's, S, V, D> ContextualVisitor<'a, 's, S, V, D>
where
    S: Schema<'s>,
    V: Visitor<'a, Data = ContextualData<'a, 's, D>>,
    D: Clone,
{
    pub fn new(inner: V, schema: &'s S, document: &'a Document) -> Self {
        Self {
            inner,
            schema,
            document,
            fragments: document.fragments_by_name(),
            context: Rc::default(),
            stack: TraversalStack::new(),
        }
    }

    /// Walks the whole document.
    pub fn walk(&mut self, data: D) {
        self.walk_from(self.document.as_node_ref(), data);
    }

    /// Walks the subtree under `node` (inclusive), starting from the
    /// current context.
    pub fn walk_from(&mut self, node: NodeRef<'a>, data: D) {
        self.traverse(node, data);
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }

    /// A snapshot of the current context.
    pub fn context(&self) -> VisitorContext<'a, 's> {
        self.context.borrow().clone()
    }

    /// Updates the context for `node`. The returned guard restores the
    /// previous context when dropped.
    fn enter(&self, node: NodeRef<'a>) -> ContextGuard<'a, 's> {
        let mut context = self.context.borrow_mut();
        let saved = context.clone();
        self.update(&mut context, node);
        ContextGuard {
            context: Rc::clone(&self.context),
            saved,
        }
    }

    fn update(&self, context: &mut VisitorContext<'a, 's>, node: NodeRef<'a>) {
        match node {
            NodeRef::OperationDefinition(operation) => {
                context.related_operation_definition = Some(operation);
                context.related_fragment_definition = None;
                context.related_type = self
                    .schema
                    .root_type_for_operation(operation.kind)
                    .map(SchemaType::Named);
            },
            NodeRef::FragmentDefinition(fragment) => {
                context.related_fragment_definition = Some(fragment);
                context.related_type = self.named_type(&fragment.type_condition);
            },
            NodeRef::SelectionSet(selection_set) => {
                context.related_selection_set = Some(selection_set);
                context.related_parent_type = context.related_type.clone();
            },
            NodeRef::FieldSelection(field) => {
                let field_definition = context
                    .related_parent_type
                    .as_ref()
                    .and_then(|parent| self.schema.field_definition(parent, field.name.as_str()));
                context.related_field_definition = field_definition;
                context.related_type = field_definition
                    .and_then(|definition| self.schema.resolve_type(&definition.type_ref));
            },
            NodeRef::FragmentSelection(spread) => {
                let fragment = self.fragments.get(spread.name.as_str()).copied();
                context.related_fragment_definition = fragment;
                context.related_type =
                    fragment.and_then(|fragment| self.named_type(&fragment.type_condition));
            },
            NodeRef::InlineFragmentSelection(inline_fragment) => {
                if let Some(type_condition) = &inline_fragment.type_condition {
                    context.related_type = self.named_type(type_condition);
                }
            },
            NodeRef::FieldDefinition(field_definition) => {
                context.related_type = self.schema.resolve_type(&field_definition.type_ref);
            },
            NodeRef::ArgumentDefinition(argument) => {
                context.related_type = self.schema.resolve_type(&argument.type_ref);
            },
            NodeRef::VariableDefinition(variable) => {
                context.related_type = self.schema.resolve_type(&variable.type_ref);
            },
            _ => {
                if let Some(name) = defined_type_name(node) {
                    context.related_type = self.schema.named_type(name).map(SchemaType::Named);
                }
            },
        }
    }

    fn named_type(&self, type_ref: &NamedTypeRef) -> Option<SchemaType<'s>> {
        self.schema
            .named_type(type_ref.name.as_str())
            .map(SchemaType::Named)
    }
}

impl<'a, 's, S, V, D> Visitor<'a> for ContextualVisitor<'a, 's, S, V, D>
where
    S: Schema<'s>,
    V: Visitor<'a, Data = ContextualData<'a, 's, D>>,
    D: Clone,
{
    type Data = D;
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, data: D) {
        let _restore = self.enter(node);
        let context = self.context.borrow().clone();
        node.accept(&mut self.inner, ContextualData { context, data });
        self.descend();
    }
}

impl<'a, 's, S, V, D> TraversingVisitor<'a> for ContextualVisitor<'a, 's, S, V, D>
where
    S: Schema<'s>,
    V: Visitor<'a, Data = ContextualData<'a, 's, D>>,
    D: Clone,
{
    fn traversal_stack(&self) -> &TraversalStack<'a, D> {
        &self.stack
    }
}

/// Restores a saved context on drop.
struct ContextGuard<'a, 's> {
    context: Rc<RefCell<VisitorContext<'a, 's>>>,
    saved: VisitorContext<'a, 's>,
}

impl Drop for ContextGuard<'_, '_> {
    fn drop(&mut self) {
        *self.context.borrow_mut() = std::mem::take(&mut self.saved);
    }
}

/// The name a type definition or extension defines or extends.
fn defined_type_name(node: NodeRef<'_>) -> Option<&str> {
    let name = match node {
        NodeRef::ScalarTypeDefinition(node) => &node.name,
        NodeRef::ObjectTypeDefinition(node) => &node.name,
        NodeRef::InterfaceTypeDefinition(node) => &node.name,
        NodeRef::UnionTypeDefinition(node) => &node.name,
        NodeRef::EnumTypeDefinition(node) => &node.name,
        NodeRef::InputObjectTypeDefinition(node) => &node.name,
        NodeRef::ScalarTypeExtension(node) => &node.name,
        NodeRef::ObjectTypeExtension(node) => &node.name,
        NodeRef::InterfaceTypeExtension(node) => &node.name,
        NodeRef::UnionTypeExtension(node) => &node.name,
        NodeRef::EnumTypeExtension(node) => &node.name,
        NodeRef::InputObjectTypeExtension(node) => &node.name,
        _ => return None,
    };
    Some(name.as_str())
}
