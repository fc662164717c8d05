//! Command tree nodes and the backtracking matcher.
//!
//! Matching is a depth-first walk over an immutable tree with one mutable
//! cursor. The central invariant: a node that returns `false` leaves the
//! cursor (and the argument it may have stored) exactly as it found them,
//! so the next sibling retries from the same position.

use cmdgram_types::diagnostic::Diagnostic;
use cmdgram_types::error::{CmdgramError, Result};

use crate::arguments::ArgumentType;
use crate::context::ParseContext;

/// Callback fired when a path through the tree completes.
pub type Action = Box<dyn Fn(&ParseContext<'_>)>;

/// What a node matches.
pub enum NodeKind {
    /// Tree root. Matches nothing itself.
    Root,
    /// An exact keyword token.
    Literal(String),
    /// A named value read by an argument type.
    Argument {
        name: String,
        arg_type: Box<dyn ArgumentType>,
    },
}

/// An immutable node of the command tree. Build one with [`NodeBuilder`].
pub struct CommandNode {
    kind: NodeKind,
    children: Vec<CommandNode>,
    action: Option<Action>,
    optional: bool,
    description: String,
}

impl CommandNode {
    pub(crate) fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            children: Vec::new(),
            action: None,
            optional: false,
            description: String::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a failed parse of this argument stays silent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// The token of a literal node.
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Literal(token) => Some(token),
            _ => None,
        }
    }

    /// The name of an argument node.
    pub fn argument_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Argument { name, .. } => Some(name),
            _ => None,
        }
    }

    pub(crate) fn push_child(&mut self, child: CommandNode) {
        self.children.push(child);
    }

    /// Reject nodes that could never match.
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.kind {
            NodeKind::Root => {
                return Err(CmdgramError::Registration(
                    "a root node cannot be registered".to_string(),
                ));
            },
            NodeKind::Literal(token) if token.is_empty() => {
                return Err(CmdgramError::Registration("empty literal".to_string()));
            },
            NodeKind::Literal(token) if token.chars().any(char::is_whitespace) => {
                return Err(CmdgramError::Registration(format!(
                    "literal contains whitespace: \"{token}\""
                )));
            },
            NodeKind::Argument { name, .. } if name.is_empty() => {
                return Err(CmdgramError::Registration(
                    "argument without a name".to_string(),
                ));
            },
            _ => {},
        }
        self.children.iter().try_for_each(CommandNode::validate)
    }

    /// Try to match this node (and a path below it) at the cursor.
    ///
    /// Returns `true` once an action has fired or a literal reached the end
    /// of input.
    pub fn try_match(&self, ctx: &mut ParseContext<'_>) -> bool {
        match &self.kind {
            NodeKind::Root => self.match_children(ctx),
            NodeKind::Literal(token) => self.match_literal(token, ctx),
            NodeKind::Argument { name, arg_type } => {
                self.match_argument(name, arg_type.as_ref(), ctx)
            },
        }
    }

    /// First child to match wins.
    fn match_children(&self, ctx: &mut ParseContext<'_>) -> bool {
        let start = ctx.pos();
        for child in &self.children {
            if child.try_match(ctx) {
                return true;
            }
            debug_assert_eq!(ctx.pos(), start, "failed node leaked cursor movement");
        }
        false
    }

    fn match_literal(&self, token: &str, ctx: &mut ParseContext<'_>) -> bool {
        let start = ctx.pos();
        if !ctx.consume(token) {
            return false;
        }
        log::trace!("literal {token:?} matched at {start}");

        if ctx.is_at_end() {
            self.fire(ctx);
            return true;
        }
        if self.match_children(ctx) {
            return true;
        }
        // Trailing input no child wants is left to this node's own action.
        if self.action.is_some() {
            self.fire(ctx);
            return true;
        }

        ctx.set_pos(start);
        false
    }

    fn match_argument(
        &self,
        name: &str,
        arg_type: &dyn ArgumentType,
        ctx: &mut ParseContext<'_>,
    ) -> bool {
        let start = ctx.pos();
        let Some(value) = arg_type.parse(ctx) else {
            ctx.set_pos(start);
            if !self.optional {
                ctx.report(&Diagnostic::MissingArgument(name.to_string()));
            }
            return false;
        };
        log::trace!("argument {name:?} = {value:?}");

        let previous = ctx.set_argument(name, value);
        if self.match_children(ctx) {
            return true;
        }
        if self.action.is_some() {
            self.fire(ctx);
            return true;
        }

        ctx.restore_argument(name, previous);
        ctx.set_pos(start);
        false
    }

    fn fire(&self, ctx: &ParseContext<'_>) {
        if let Some(action) = &self.action {
            action(ctx);
        }
    }
}

/// Fluent builder for [`CommandNode`].
///
/// ```
/// use cmdgram_terminal::{NodeBuilder, StringArgumentType};
///
/// let node = NodeBuilder::literal("socials")
///     .description("Lists the socials")
///     .add_child(
///         NodeBuilder::argument("social", StringArgumentType::new())
///             .optional()
///             .executes(|ctx| ctx.send_output(ctx.get_string("social").unwrap_or(""))),
///     )
///     .executes(|ctx| ctx.send_output("all"))
///     .build();
/// assert_eq!(node.children().len(), 1);
/// ```
pub struct NodeBuilder {
    node: CommandNode,
}

impl NodeBuilder {
    /// A node matching exactly `token`.
    pub fn literal(token: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Literal(token.into()))
    }

    /// A node reading a value named `name` with `arg_type`.
    pub fn argument(name: impl Into<String>, arg_type: impl ArgumentType + 'static) -> Self {
        Self::with_kind(NodeKind::Argument {
            name: name.into(),
            arg_type: Box::new(arg_type),
        })
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            node: CommandNode {
                kind,
                ..CommandNode::root()
            },
        }
    }

    /// Append a child. Children are tried in the order they are added.
    pub fn add_child(mut self, child: NodeBuilder) -> Self {
        self.node.children.push(child.build());
        self
    }

    /// Bind the action fired when this node completes a match.
    pub fn executes<F>(mut self, action: F) -> Self
    where
        F: Fn(&ParseContext<'_>) + 'static,
    {
        self.node.action = Some(Box::new(action));
        self
    }

    /// Suppress the missing-argument diagnostic. Only meaningful for
    /// argument nodes.
    pub fn optional(mut self) -> Self {
        if !matches!(self.node.kind, NodeKind::Argument { .. }) {
            log::warn!("optional() has no effect on a literal node");
        }
        self.node.optional = true;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.node.description = text.into();
        self
    }

    pub fn build(self) -> CommandNode {
        self.node
    }
}

impl From<NodeBuilder> for CommandNode {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}
