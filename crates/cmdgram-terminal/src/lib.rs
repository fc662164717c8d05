//! Grammar-based command interpreter.
//!
//! Commands are registered as a tree of nodes. A [`CommandNode`] is either a
//! literal keyword or a typed argument; the [`CommandDispatcher`] owns the
//! root, strips its prefix from each input line, and walks the tree with a
//! backtracking cursor until a complete path fires its bound action.

pub mod arguments;
pub mod context;
pub mod dispatcher;
pub mod help;
pub mod node;
pub mod output;

#[cfg(test)]
pub(crate) mod test_utils;

/// Pluggable value parser trait.
pub use arguments::ArgumentType;
/// Validation rule for string arguments.
pub use arguments::Allows;
/// Decimal integer argument type.
pub use arguments::IntegerArgumentType;
/// Word or quoted-span string argument type.
pub use arguments::StringArgumentType;
/// A resolved argument value.
pub use context::ArgValue;
/// Cursor and resolved arguments for one dispatch.
pub use context::ParseContext;
/// Owner of the command tree and entry point for input lines.
pub use dispatcher::CommandDispatcher;
/// What a dispatch call did.
pub use dispatcher::DispatchOutcome;
/// Action bound to a node.
pub use node::Action;
/// An immutable tree node.
pub use node::CommandNode;
/// Fluent builder producing a [`CommandNode`].
pub use node::NodeBuilder;
/// Node variant (root, literal, argument).
pub use node::NodeKind;
/// Buffering output sink.
pub use output::BufferSink;
/// Output sink that forwards to the `log` facade.
pub use output::LogSink;
/// Injected output collaborator.
pub use output::OutputSink;
