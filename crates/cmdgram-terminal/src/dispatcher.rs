//! The dispatcher: owns the command tree and turns input lines into actions.

use cmdgram_types::diagnostic::Diagnostic;
use cmdgram_types::error::{CmdgramError, Result};

use crate::context::ParseContext;
use crate::help;
use crate::node::CommandNode;
use crate::output::OutputSink;

/// What a call to [`CommandDispatcher::dispatch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The line lacked the prefix and was not parsed.
    Ignored,
    /// A path matched and its action (if any) fired.
    Executed,
    /// Nothing matched; a not-found diagnostic was emitted.
    NotFound,
}

/// Owns the root of the command tree.
///
/// Register every command before the first dispatch. Dispatch is
/// synchronous and runs to completion; the tree is not mutated by it.
pub struct CommandDispatcher {
    prefix: String,
    root: CommandNode,
    commands: Vec<String>,
    output: Box<dyn OutputSink>,
}

impl CommandDispatcher {
    /// Create a dispatcher for lines starting with `prefix`.
    pub fn new(prefix: impl Into<String>, output: impl OutputSink + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            root: CommandNode::root(),
            commands: Vec::new(),
            output: Box::new(output),
        }
    }

    /// Replace the output sink.
    pub fn set_output(&mut self, output: impl OutputSink + 'static) {
        self.output = Box::new(output);
    }

    pub fn output(&self) -> &dyn OutputSink {
        self.output.as_ref()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Top-level literal tokens, in registration order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Append a top-level node.
    ///
    /// Fails for nodes that can never match and for a literal whose token is
    /// already registered.
    pub fn register(&mut self, node: impl Into<CommandNode>) -> Result<()> {
        let node = node.into();
        node.validate()?;
        if let Some(token) = node.literal() {
            if self.commands.iter().any(|c| c == token) {
                return Err(CmdgramError::Registration(format!(
                    "duplicate command \"{token}\""
                )));
            }
            self.commands.push(token.to_string());
        }
        log::debug!(
            "registered top-level node #{} ({} commands)",
            self.root.children().len(),
            self.commands.len()
        );
        self.root.push_child(node);
        Ok(())
    }

    /// Parse `line` and fire the action of the first path that matches.
    ///
    /// Lines without the prefix are ignored silently.
    pub fn dispatch(&self, line: &str) -> DispatchOutcome {
        let Some(input) = line.strip_prefix(self.prefix.as_str()) else {
            return DispatchOutcome::Ignored;
        };

        let mut ctx = ParseContext::new(input, self);
        if self.root.try_match(&mut ctx) {
            log::debug!("dispatched {input:?}");
            DispatchOutcome::Executed
        } else {
            ctx.report(&Diagnostic::NotFound(input.to_string()));
            DispatchOutcome::NotFound
        }
    }

    /// Top-level literal named exactly `name`.
    pub fn find_command(&self, name: &str) -> Option<&CommandNode> {
        self.root
            .children()
            .iter()
            .find(|node| node.literal() == Some(name))
    }

    /// Help for every command, or for the single command `command`.
    pub fn help_string(&self, command: Option<&str>) -> String {
        match command {
            Some(name) => match self.find_command(name) {
                Some(node) => help::help_string(node, ""),
                None => format!("No help available for \"{name}\""),
            },
            None => help::help_string(&self.root, ""),
        }
    }
}
