//! Recursive descent parser producing the [`ast`](crate::ast).
//!
//! The parser pulls tokens from a [`Lexer`] one at a time and fails on the
//! first grammar violation. Every node it builds carries an [`Origin`]
//! running from the start of the production's first token to the end of
//! the last token the production consumed.

use crate::Lexer;
use crate::Origin;
use crate::ReservedNameContext;
use crate::Source;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::ast::Argument;
use crate::ast::ArgumentDefinition;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FieldSelection;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSelection;
use crate::ast::InlineFragmentSelection;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListTypeRef;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedTypeRef;
use crate::ast::NonNullTypeRef;
use crate::ast::NullValue;
use crate::ast::NullableTypeRef;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::ObjectValueField;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeRef;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::token::Token;
use crate::token::TokenKind;
use std::sync::Arc;

type ParseResult<T> = Result<T, SyntaxError>;

/// Limit on nested values, selection sets and list types. Deeper input
/// is reported as a [`SyntaxErrorKind::NestingTooDeep`] error instead of
/// overflowing the stack.
pub const MAX_RECURSION_DEPTH: usize = 64;

/// Keywords that can start a definition.
const DEFINITION_KEYWORDS: &[&str] = &[
    "query",
    "mutation",
    "subscription",
    "fragment",
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
    "extend",
];

// =============================================================================
// Const contexts
// =============================================================================

/// Where a value is being parsed, which decides whether variables are
/// allowed.
///
/// Carrying the context (rather than a `bool`) lets the error message say
/// why a variable was rejected.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Variables are allowed (e.g. field arguments in operations).
    AllowVariables,
    /// Default values of variable definitions.
    VariableDefaultValue,
    /// Directive arguments in const positions (type system definitions,
    /// variable definitions).
    DirectiveArgument,
    /// Default values of arguments and input fields.
    InputDefaultValue,
    /// A standalone const value.
    ConstValue,
}

impl ConstContext {
    fn allows_variables(self) -> bool {
        matches!(self, ConstContext::AllowVariables)
    }

    fn description(self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "non-const values",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "const directive arguments",
            ConstContext::InputDefaultValue => "input value default values",
            ConstContext::ConstValue => "const values",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// Each parser parses exactly one thing: the entry points take `self` by
/// value.
///
/// ```rust
/// use gqlfront_parser::Parser;
/// use gqlfront_parser::Source;
/// use std::sync::Arc;
///
/// let source = Arc::new(Source::new("type Query { hello: String }", "schema.graphql"));
/// let document = Parser::new(&source).parse_document().unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        Self {
            lexer: Lexer::new(source),
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a whole document: one or more definitions.
    pub fn parse_document(mut self) -> ParseResult<Document> {
        let source = self.lexer.source();
        log::debug!(
            "parsing document `{}` ({} bytes)",
            source.name(),
            source.content().len(),
        );
        self.lexer.advance()?;

        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.peek_is(&TokenKind::EndOfFile) {
                break;
            }
        }

        log::trace!("parsed {} definition(s)", definitions.len());
        Ok(Document {
            origin: self.origin_from(SourcePosition::default()),
            definitions,
        })
    }

    /// Parses a single value; variables are allowed. The input must contain
    /// nothing else.
    pub fn parse_value(mut self) -> ParseResult<Value> {
        self.lexer.advance()?;
        let value = self.parse_value_in(ConstContext::AllowVariables)?;
        self.expect_end()?;
        Ok(value)
    }

    /// Parses a single value that may not reference variables.
    pub fn parse_const_value(mut self) -> ParseResult<Value> {
        self.lexer.advance()?;
        let value = self.parse_value_in(ConstContext::ConstValue)?;
        self.expect_end()?;
        Ok(value)
    }

    /// Parses a single type reference, e.g. `[String!]!`. The input must
    /// contain nothing else.
    pub fn parse_type_ref(mut self) -> ParseResult<TypeRef> {
        self.lexer.advance()?;
        let type_ref = self.parse_type_ref_inner()?;
        self.expect_end()?;
        Ok(type_ref)
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    fn peek(&self) -> &Token<'src> {
        self.lexer.token()
    }

    /// Checks the current token's kind (ignoring payloads) without
    /// consuming.
    fn peek_is(&self, kind: &TokenKind<'_>) -> bool {
        self.peek().kind.same_kind(kind)
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.peek().kind.is_keyword(keyword)
    }

    fn peek_is_name(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Name(_))
    }

    /// Consumes the current token if it is of the given kind.
    fn skip(&mut self, kind: &TokenKind<'_>) -> ParseResult<bool> {
        if self.peek_is(kind) {
            self.lexer.consume()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the current token if it is the given keyword.
    fn skip_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        if self.peek_is_keyword(keyword) {
            self.lexer.consume()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes a token of the given kind, or fails.
    fn expect(&mut self, kind: &TokenKind<'_>) -> ParseResult<Token<'src>> {
        if self.peek_is(kind) {
            return self.lexer.consume();
        }
        Err(self.unexpected(Some(&format!("`{}`", kind.display()))))
    }

    /// Consumes the given keyword, or fails.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token<'src>> {
        if self.peek_is_keyword(keyword) {
            return self.lexer.consume();
        }
        Err(self.unexpected(Some(&format!("`{keyword}`"))))
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        if self.peek_is(&TokenKind::EndOfFile) {
            return Ok(());
        }
        Err(self.unexpected(Some("end of input")))
    }

    /// An error for the current token.
    fn unexpected(&self, expected: Option<&str>) -> SyntaxError {
        self.unexpected_token(self.peek(), expected)
    }

    fn unexpected_token(&self, token: &Token<'_>, expected: Option<&str>) -> SyntaxError {
        let origin = self.token_origin(token);
        let expected_owned = expected.map(str::to_string);
        if matches!(token.kind, TokenKind::EndOfFile) {
            let message = match expected {
                Some(expected) => format!("Expected {expected}, found end of input"),
                None => "Unexpected end of input".to_string(),
            };
            return SyntaxError::new(
                message,
                origin,
                SyntaxErrorKind::UnexpectedEof {
                    expected: expected_owned,
                },
            );
        }

        let found = token.kind.display();
        let found_display = if token.kind.is_string() {
            found.clone()
        } else {
            format!("`{found}`")
        };
        let message = match expected {
            Some(expected) => format!("Expected {expected}, found {found_display}"),
            None => format!("Unexpected {found_display}"),
        };
        SyntaxError::new(
            message,
            origin,
            SyntaxErrorKind::UnexpectedToken {
                expected: expected_owned,
                found,
            },
        )
    }

    // =========================================================================
    // Origins
    // =========================================================================

    fn token_origin(&self, token: &Token<'_>) -> Origin {
        Origin::new(Arc::clone(self.lexer.source()), token.start, token.end)
    }

    /// The span from `start` to the end of the last consumed token.
    fn span_from(&self, start: SourcePosition) -> Origin {
        Origin::new(
            Arc::clone(self.lexer.source()),
            start,
            self.lexer.last_token_end(),
        )
    }

    fn origin_from(&self, start: SourcePosition) -> Option<Origin> {
        Some(self.span_from(start))
    }

    // =========================================================================
    // Repetition helpers
    // =========================================================================

    /// `open item+ close`: one or more items between required delimiters.
    fn many<T>(
        &mut self,
        open: TokenKind<'static>,
        close: TokenKind<'static>,
        parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let open_token = self.expect(&open)?;
        let open_origin = self.token_origin(&open_token);
        self.items_until(&close, true, parse_one)
            .map_err(|error| note_unclosed(error, &open, open_origin))
    }

    /// Like [`many()`](Self::many), but an absent `open` token yields an
    /// empty list.
    fn optional_many<T>(
        &mut self,
        open: TokenKind<'static>,
        close: TokenKind<'static>,
        parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        if !self.peek_is(&open) {
            return Ok(Vec::new());
        }
        self.many(open, close, parse_one)
    }

    /// `open item* close`: zero or more items between required delimiters.
    fn any<T>(
        &mut self,
        open: TokenKind<'static>,
        close: TokenKind<'static>,
        parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let open_token = self.expect(&open)?;
        let open_origin = self.token_origin(&open_token);
        self.items_until(&close, false, parse_one)
            .map_err(|error| note_unclosed(error, &open, open_origin))
    }

    /// Items up to and including `close`, after the opening delimiter.
    fn items_until<T>(
        &mut self,
        close: &TokenKind<'static>,
        at_least_one: bool,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if at_least_one {
            items.push(parse_one(self)?);
        }
        while !self.skip(close)? {
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    /// `delimiter? item (delimiter item)*`, as used by `implements A & B`,
    /// union members and directive locations.
    fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind<'static>,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.skip(&delimiter)?;
        let mut items = vec![parse_one(self)?];
        while self.skip(&delimiter)? {
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    /// Runs `parse` one nesting level deeper, failing once
    /// [`MAX_RECURSION_DEPTH`] is exceeded.
    fn with_recursion_guard<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            let mut error = SyntaxError::new(
                "Maximum nesting depth exceeded",
                self.token_origin(self.peek()),
                SyntaxErrorKind::NestingTooDeep,
            );
            error.add_note(format!(
                "values, selection sets and list types may nest at most \
                 {MAX_RECURSION_DEPTH} levels deep",
            ));
            return Err(error);
        }
        self.recursion_depth += 1;
        let result = parse(self);
        self.recursion_depth -= 1;
        result
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn parse_name(&mut self) -> ParseResult<Name> {
        if !self.peek_is_name() {
            return Err(self.unexpected(Some("a name")));
        }
        let token = self.lexer.consume()?;
        let origin = Some(self.token_origin(&token));
        let value = match token.kind {
            TokenKind::Name(value) => value.into_owned(),
            _ => String::new(),
        };
        Ok(Name { origin, value })
    }

    /// Parses a name that may not be one of `reserved`.
    fn parse_unreserved_name(
        &mut self,
        reserved: &[&str],
        context: ReservedNameContext,
    ) -> ParseResult<Name> {
        let name = self.parse_name()?;
        if !reserved.contains(&name.as_str()) {
            return Ok(name);
        }
        let message = match context {
            ReservedNameContext::FragmentName => {
                format!("Fragment name cannot be `{}`", name.value)
            },
            ReservedNameContext::EnumValue => {
                format!("Enum value cannot be `{}`", name.value)
            },
        };
        let origin = name.origin.unwrap_or_else(|| self.span_from(self.peek().start));
        Err(SyntaxError::new(
            message,
            origin,
            SyntaxErrorKind::ReservedName {
                name: name.value,
                context,
            },
        ))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Parses one definition.
    ///
    /// A leading string is a description; the keyword after it is found
    /// with one token of lookahead, and only type system definitions may be
    /// described.
    fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.peek_is(&TokenKind::CurlyBraceOpen) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }

        let has_description = self.peek().kind.is_string();
        let keyword = {
            let token = if has_description {
                self.lexer.lookahead()?
            } else {
                self.lexer.token()
            };
            definition_keyword(&token.kind)
        };

        if has_description && !matches!(
            keyword,
            Some("schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive"),
        ) {
            let description = self.peek().clone();
            let mut error = SyntaxError::new(
                "Unexpected description",
                self.token_origin(&description),
                SyntaxErrorKind::UnexpectedDescription,
            );
            error.add_note(
                "descriptions may only precede schema, type and directive definitions",
            );
            return Err(error);
        }

        let start = self.peek().start;
        match keyword {
            Some("query" | "mutation" | "subscription") => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            },
            Some("fragment") => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
            Some("extend") => self.parse_type_system_extension(),
            Some("schema") => {
                let description = self.parse_description()?;
                Ok(Definition::Schema(self.parse_schema_definition(start, description)?))
            },
            Some("directive") => {
                let description = self.parse_description()?;
                Ok(Definition::Directive(
                    self.parse_directive_definition(start, description)?,
                ))
            },
            Some(_) => {
                let description = self.parse_description()?;
                Ok(Definition::Type(self.parse_type_definition(start, description)?))
            },
            None => Err(self.unexpected(Some("a definition"))),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        let start = self.peek().start;
        if self.peek_is(&TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                origin: self.origin_from(start),
                kind: OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }

        let kind = self.parse_operation_kind()?;
        let name = if self.peek_is_name() {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.optional_many(
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            Self::parse_variable_definition,
        )?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            origin: self.origin_from(start),
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_operation_kind(&mut self) -> ParseResult<OperationKind> {
        let kind = match &self.peek().kind {
            TokenKind::Name(name) => OperationKind::from_keyword(name),
            _ => None,
        };
        match kind {
            Some(kind) => {
                self.lexer.consume()?;
                Ok(kind)
            },
            None => Err(self.unexpected(Some("`query`, `mutation` or `subscription`"))),
        }
    }

    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let start = self.peek().start;
        let variable = self.parse_variable()?;
        self.expect(&TokenKind::Colon)?;
        let type_ref = self.parse_type_ref_inner()?;
        let default_value = if self.skip(&TokenKind::Equals)? {
            Some(self.parse_value_in(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(VariableDefinition {
            origin: self.origin_from(start),
            name: variable.name,
            type_ref,
            default_value,
            directives,
        })
    }

    /// `$name`
    fn parse_variable(&mut self) -> ParseResult<VariableValue> {
        let start = self.peek().start;
        self.expect(&TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(VariableValue {
            origin: self.origin_from(start),
            name,
        })
    }

    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let start = self.peek().start;
        self.expect_keyword("fragment")?;
        let name = self.parse_unreserved_name(&["on"], ReservedNameContext::FragmentName)?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type_ref()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            origin: self.origin_from(start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        self.with_recursion_guard(|parser| {
            let start = parser.peek().start;
            let selections = parser.many(
                TokenKind::CurlyBraceOpen,
                TokenKind::CurlyBraceClose,
                Self::parse_selection,
            )?;
            Ok(SelectionSet {
                origin: parser.origin_from(start),
                selections,
            })
        })
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek_is(&TokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// `alias: name(arguments) @directives { ... }`. A name followed by `:`
    /// is an alias.
    fn parse_field(&mut self) -> ParseResult<FieldSelection> {
        let start = self.peek().start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(&TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(FieldSelection {
            origin: self.origin_from(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// After `...`, a name other than `on` is a fragment spread. Anything
    /// else is an inline fragment with an optional `on Type` condition.
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.peek().start;
        self.expect(&TokenKind::Ellipsis)?;

        let has_type_condition = self.peek_is_keyword("on");
        if !has_type_condition && self.peek_is_name() {
            let name = self.parse_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(Selection::FragmentSpread(FragmentSelection {
                origin: self.origin_from(start),
                name,
                directives,
            }));
        }

        let type_condition = if has_type_condition {
            self.lexer.consume()?;
            Some(self.parse_named_type_ref()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragmentSelection {
            origin: self.origin_from(start),
            type_condition,
            directives,
            selection_set,
        }))
    }

    fn parse_arguments(&mut self, context: ConstContext) -> ParseResult<Vec<Argument>> {
        self.optional_many(TokenKind::ParenOpen, TokenKind::ParenClose, |parser| {
            parser.parse_argument(context)
        })
    }

    fn parse_argument(&mut self, context: ConstContext) -> ParseResult<Argument> {
        let start = self.peek().start;
        let name = self.parse_name()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.parse_value_in(context)?;
        Ok(Argument {
            origin: self.origin_from(start),
            name,
            value,
        })
    }

    fn parse_directives(&mut self, context: ConstContext) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek_is(&TokenKind::At) {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, context: ConstContext) -> ParseResult<Directive> {
        let start = self.peek().start;
        self.expect(&TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(context)?;
        Ok(Directive {
            origin: self.origin_from(start),
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value_in(&mut self, context: ConstContext) -> ParseResult<Value> {
        self.with_recursion_guard(|parser| parser.parse_value_inner(context))
    }

    fn parse_value_inner(&mut self, context: ConstContext) -> ParseResult<Value> {
        let start = self.peek().start;
        // Cloning only copies the borrowed payload.
        match self.peek().kind.clone() {
            TokenKind::Dollar => {
                let variable = self.parse_variable()?;
                if context.allows_variables() {
                    return Ok(Value::Variable(variable));
                }
                Err(SyntaxError::new(
                    format!(
                        "Variable `${}` is not allowed in {}",
                        variable.name.value,
                        context.description(),
                    ),
                    self.span_from(start),
                    SyntaxErrorKind::VariableInConstValue,
                ))
            },
            TokenKind::IntValue(raw) => {
                self.lexer.consume()?;
                let origin = self.span_from(start);
                match raw.parse::<i32>() {
                    Ok(value) => Ok(Value::Int(IntValue {
                        origin: Some(origin),
                        value,
                    })),
                    Err(_) => Err(SyntaxError::new(
                        format!("Int `{raw}` cannot be represented as a 32-bit signed integer"),
                        origin,
                        SyntaxErrorKind::InvalidValue,
                    )),
                }
            },
            TokenKind::FloatValue(raw) => {
                self.lexer.consume()?;
                let origin = self.span_from(start);
                match raw.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Value::Float(FloatValue {
                        origin: Some(origin),
                        value,
                    })),
                    _ => Err(SyntaxError::new(
                        format!("Float `{raw}` is not a finite number"),
                        origin,
                        SyntaxErrorKind::InvalidValue,
                    )),
                }
            },
            TokenKind::StringValue(_) | TokenKind::BlockStringValue(_) => {
                Ok(Value::String(self.parse_string_value()?))
            },
            TokenKind::SquareBracketOpen => {
                let values = self.any(
                    TokenKind::SquareBracketOpen,
                    TokenKind::SquareBracketClose,
                    |parser| parser.parse_value_in(context),
                )?;
                Ok(Value::List(ListValue {
                    origin: self.origin_from(start),
                    values,
                }))
            },
            TokenKind::CurlyBraceOpen => {
                let fields = self.any(
                    TokenKind::CurlyBraceOpen,
                    TokenKind::CurlyBraceClose,
                    |parser| parser.parse_object_value_field(context),
                )?;
                Ok(Value::Object(ObjectValue {
                    origin: self.origin_from(start),
                    fields,
                }))
            },
            TokenKind::Name(name) => {
                self.lexer.consume()?;
                let origin = self.origin_from(start);
                Ok(match name.as_ref() {
                    "true" => Value::Boolean(BooleanValue { origin, value: true }),
                    "false" => Value::Boolean(BooleanValue { origin, value: false }),
                    "null" => Value::Null(NullValue { origin }),
                    _ => Value::Enum(EnumValue {
                        origin,
                        value: name.to_string(),
                    }),
                })
            },
            _ => Err(self.unexpected(Some("a value"))),
        }
    }

    fn parse_object_value_field(&mut self, context: ConstContext) -> ParseResult<ObjectValueField> {
        let start = self.peek().start;
        let name = self.parse_name()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.parse_value_in(context)?;
        Ok(ObjectValueField {
            origin: self.origin_from(start),
            name,
            value,
        })
    }

    /// Parses a string or block string token into its cooked value.
    fn parse_string_value(&mut self) -> ParseResult<StringValue> {
        if !self.peek().kind.is_string() {
            return Err(self.unexpected(Some("a string")));
        }
        let token = self.lexer.consume()?;
        let origin = self.token_origin(&token);
        let is_block = matches!(token.kind, TokenKind::BlockStringValue(_));
        match token.kind.cook_string() {
            Some(Ok(value)) => Ok(StringValue {
                origin: Some(origin),
                value,
                is_block,
            }),
            Some(Err(err)) => Err(SyntaxError::new(
                format!("Invalid string: {err}"),
                origin,
                SyntaxErrorKind::InvalidString(Some(err)),
            )),
            None => Err(self.unexpected_token(&token, Some("a string"))),
        }
    }

    fn parse_description(&mut self) -> ParseResult<Option<StringValue>> {
        if self.peek().kind.is_string() {
            return Ok(Some(self.parse_string_value()?));
        }
        Ok(None)
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn parse_type_ref_inner(&mut self) -> ParseResult<TypeRef> {
        let start = self.peek().start;
        let nullable_type = if self.skip(&TokenKind::SquareBracketOpen)? {
            // Each list is one nesting level; the named type inside is not.
            let element_type = self.with_recursion_guard(Self::parse_type_ref_inner)?;
            self.expect(&TokenKind::SquareBracketClose)?;
            NullableTypeRef::List(ListTypeRef {
                origin: self.origin_from(start),
                element_type: Box::new(element_type),
            })
        } else {
            NullableTypeRef::Named(self.parse_named_type_ref()?)
        };

        if self.skip(&TokenKind::Bang)? {
            let origin = self.origin_from(start);
            return Ok(TypeRef::NonNull(NonNullTypeRef::new(nullable_type, origin)));
        }
        Ok(nullable_type.into())
    }

    fn parse_named_type_ref(&mut self) -> ParseResult<NamedTypeRef> {
        let name = self.parse_name()?;
        Ok(NamedTypeRef {
            origin: name.origin.clone(),
            name,
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
        start: SourcePosition,
        description: Option<StringValue>,
    ) -> ParseResult<SchemaDefinition> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let operation_types = self.many(
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            Self::parse_operation_type_definition,
        )?;
        Ok(SchemaDefinition {
            origin: self.origin_from(start),
            description,
            directives,
            operation_types,
        })
    }

    fn parse_operation_type_definition(&mut self) -> ParseResult<OperationTypeDefinition> {
        let start = self.peek().start;
        let operation = self.parse_operation_kind()?;
        self.expect(&TokenKind::Colon)?;
        let type_ref = self.parse_named_type_ref()?;
        Ok(OperationTypeDefinition {
            origin: self.origin_from(start),
            operation,
            type_ref,
        })
    }

    fn parse_type_definition(
        &mut self,
        start: SourcePosition,
        description: Option<StringValue>,
    ) -> ParseResult<TypeDefinition> {
        let keyword = definition_keyword(&self.peek().kind);
        self.lexer.consume()?;
        let name = self.parse_name()?;

        let definition = match keyword {
            Some("scalar") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                TypeDefinition::Scalar(ScalarTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    directives,
                })
            },
            Some("type") => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Object(ObjectTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                })
            },
            Some("interface") => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Interface(InterfaceTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                })
            },
            Some("union") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let member_types = self.parse_union_member_types()?;
                TypeDefinition::Union(UnionTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    directives,
                    member_types,
                })
            },
            Some("enum") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let values = self.parse_enum_values_definition()?;
                TypeDefinition::Enum(EnumTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    directives,
                    values,
                })
            },
            _ => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_input_fields_definition()?;
                TypeDefinition::InputObject(InputObjectTypeDefinition {
                    origin: self.origin_from(start),
                    description,
                    name,
                    directives,
                    fields,
                })
            },
        };
        Ok(definition)
    }

    /// `implements A & B`, with an optional leading `&`.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<NamedTypeRef>> {
        if !self.skip_keyword("implements")? {
            return Ok(Vec::new());
        }
        self.delimited_many(TokenKind::Ampersand, Self::parse_named_type_ref)
    }

    /// `= A | B`, with an optional leading `|`.
    fn parse_union_member_types(&mut self) -> ParseResult<Vec<NamedTypeRef>> {
        if !self.skip(&TokenKind::Equals)? {
            return Ok(Vec::new());
        }
        self.delimited_many(TokenKind::Pipe, Self::parse_named_type_ref)
    }

    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            Self::parse_field_definition,
        )
    }

    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let start = self.peek().start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&TokenKind::Colon)?;
        let type_ref = self.parse_type_ref_inner()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(FieldDefinition {
            origin: self.origin_from(start),
            description,
            name,
            arguments,
            type_ref,
            directives,
        })
    }

    fn parse_arguments_definition(&mut self) -> ParseResult<Vec<ArgumentDefinition>> {
        self.optional_many(
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            Self::parse_input_value_definition,
        )
    }

    fn parse_input_fields_definition(&mut self) -> ParseResult<Vec<ArgumentDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            Self::parse_input_value_definition,
        )
    }

    /// `"description" name: Type = default @directives`
    fn parse_input_value_definition(&mut self) -> ParseResult<ArgumentDefinition> {
        let start = self.peek().start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(&TokenKind::Colon)?;
        let type_ref = self.parse_type_ref_inner()?;
        let default_value = if self.skip(&TokenKind::Equals)? {
            Some(self.parse_value_in(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(ArgumentDefinition {
            origin: self.origin_from(start),
            description,
            name,
            type_ref,
            default_value,
            directives,
        })
    }

    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<EnumValueDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            Self::parse_enum_value_definition,
        )
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition> {
        let start = self.peek().start;
        let description = self.parse_description()?;
        let name = self.parse_unreserved_name(
            &["true", "false", "null"],
            ReservedNameContext::EnumValue,
        )?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(EnumValueDefinition {
            origin: self.origin_from(start),
            description,
            name,
            directives,
        })
    }

    fn parse_directive_definition(
        &mut self,
        start: SourcePosition,
        description: Option<StringValue>,
    ) -> ParseResult<DirectiveDefinition> {
        self.expect_keyword("directive")?;
        self.expect(&TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        let is_repeatable = self.skip_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.delimited_many(TokenKind::Pipe, Self::parse_directive_location)?;
        Ok(DirectiveDefinition {
            origin: self.origin_from(start),
            description,
            name,
            arguments,
            is_repeatable,
            locations,
        })
    }

    fn parse_directive_location(&mut self) -> ParseResult<Name> {
        let name = self.parse_name()?;
        if DirectiveLocation::from_name(name.as_str()).is_some() {
            return Ok(name);
        }
        let origin = name.origin.clone().unwrap_or_else(|| self.span_from(self.peek().start));
        let mut error = SyntaxError::new(
            format!("Unknown directive location `{}`", name.value),
            origin,
            SyntaxErrorKind::UnknownDirectiveLocation {
                name: name.value.clone(),
            },
        );
        if let Some(suggestion) = suggest_directive_location(name.as_str()) {
            error.add_help(format!("did you mean `{suggestion}`?"));
        }
        Err(error)
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    /// Dispatches on the keyword after `extend`.
    fn parse_type_system_extension(&mut self) -> ParseResult<Definition> {
        let keyword = definition_keyword(&self.lexer.lookahead()?.kind);
        if !matches!(
            keyword,
            Some("schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"),
        ) {
            let token = self.lexer.lookahead()?.clone();
            return Err(self.unexpected_token(&token, Some("a type system extension")));
        }

        let start = self.peek().start;
        self.expect_keyword("extend")?;
        self.lexer.consume()?;

        if keyword == Some("schema") {
            let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
            let operation_types = self.optional_many(
                TokenKind::CurlyBraceOpen,
                TokenKind::CurlyBraceClose,
                Self::parse_operation_type_definition,
            )?;
            if directives.is_empty() && operation_types.is_empty() {
                return Err(self.unexpected(None));
            }
            return Ok(Definition::SchemaExtension(SchemaExtension {
                origin: self.origin_from(start),
                directives,
                operation_types,
            }));
        }

        let name = self.parse_name()?;
        let extension = match keyword {
            Some("scalar") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                if directives.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Scalar(ScalarTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    directives,
                })
            },
            Some("type") => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_fields_definition()?;
                if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Object(ObjectTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    interfaces,
                    directives,
                    fields,
                })
            },
            Some("interface") => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_fields_definition()?;
                if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Interface(InterfaceTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    interfaces,
                    directives,
                    fields,
                })
            },
            Some("union") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let member_types = self.parse_union_member_types()?;
                if directives.is_empty() && member_types.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Union(UnionTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    directives,
                    member_types,
                })
            },
            Some("enum") => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let values = self.parse_enum_values_definition()?;
                if directives.is_empty() && values.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Enum(EnumTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    directives,
                    values,
                })
            },
            _ => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_input_fields_definition()?;
                if directives.is_empty() && fields.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::InputObject(InputObjectTypeExtension {
                    origin: self.origin_from(start),
                    name,
                    directives,
                    fields,
                })
            },
        };
        Ok(Definition::TypeExtension(extension))
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns the definition keyword this token spells, if any.
fn definition_keyword(kind: &TokenKind<'_>) -> Option<&'static str> {
    match kind {
        TokenKind::Name(name) => DEFINITION_KEYWORDS
            .iter()
            .copied()
            .find(|keyword| *keyword == name.as_ref()),
        _ => None,
    }
}

/// Suggests the closest directive location for a typo.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;
    for location in DirectiveLocation::ALL {
        let distance = edit_distance(&input_upper, location.as_str());
        if distance < best_distance && distance <= 3 {
            best_distance = distance;
            best_match = Some(location.as_str());
        }
    }
    best_match
}

/// Levenshtein edit distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

/// Points an end-of-input error inside a delimited list back at the
/// delimiter that opened the list.
fn note_unclosed(
    mut error: SyntaxError,
    open: &TokenKind<'_>,
    open_origin: Origin,
) -> SyntaxError {
    if matches!(error.kind(), SyntaxErrorKind::UnexpectedEof { .. }) {
        error.add_note_with_origin(
            format!("unclosed `{}` opened here", open.display()),
            open_origin,
        );
    }
    error
}

// =============================================================================
// Convenience functions
// =============================================================================

/// Parses a GraphQL document.
///
/// ```rust
/// let document = gqlfront_parser::parse_document("{ a }").unwrap();
/// let origin = document.origin.as_ref().unwrap();
/// assert_eq!(origin.byte_range(), 0..5);
/// ```
pub fn parse_document(source: impl Into<Source>) -> Result<Document, SyntaxError> {
    let source = Arc::new(source.into());
    Parser::new(&source).parse_document()
}

/// Parses a single value, e.g. `{ a: [1, 2], b: $var }`.
pub fn parse_value(source: impl Into<Source>) -> Result<Value, SyntaxError> {
    let source = Arc::new(source.into());
    Parser::new(&source).parse_value()
}

/// Parses a single value that may not contain variables.
pub fn parse_const_value(source: impl Into<Source>) -> Result<Value, SyntaxError> {
    let source = Arc::new(source.into());
    Parser::new(&source).parse_const_value()
}

/// Parses a single type reference, e.g. `[String!]!`.
pub fn parse_type_ref(source: impl Into<Source>) -> Result<TypeRef, SyntaxError> {
    let source = Arc::new(source.into());
    Parser::new(&source).parse_type_ref()
}
