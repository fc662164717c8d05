//! Parse state for a single dispatch: input, cursor, resolved arguments.

use std::collections::HashMap;
use std::fmt;

use cmdgram_types::diagnostic::Diagnostic;

use crate::dispatcher::CommandDispatcher;
use crate::output::OutputSink;

/// A value resolved by an argument type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Integer(i64),
    String(String),
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// True when `rest` starts at a token boundary (end of input or whitespace).
pub(crate) fn at_boundary(rest: &str) -> bool {
    rest.chars().next().is_none_or(char::is_whitespace)
}

/// Mutable cursor over one input line plus the arguments resolved so far.
///
/// The cursor is a byte offset that always sits on a char boundary. Nodes
/// save it before an attempt and restore it with [`set_pos`] on failure.
///
/// [`set_pos`]: ParseContext::set_pos
pub struct ParseContext<'a> {
    input: &'a str,
    pos: usize,
    arguments: HashMap<String, ArgValue>,
    dispatcher: &'a CommandDispatcher,
}

impl<'a> ParseContext<'a> {
    /// A fresh context at position 0.
    pub fn new(input: &'a str, dispatcher: &'a CommandDispatcher) -> Self {
        Self {
            input,
            pos: 0,
            arguments: HashMap::new(),
            dispatcher,
        }
    }

    /// The full line being parsed (prefix already stripped).
    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor, clamped to the input length.
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos.min(self.input.len())));
        self.pos = pos.min(self.input.len());
    }

    /// Unconsumed input from the cursor on.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte length of the whitespace run at the cursor.
    pub fn whitespace_len(&self) -> usize {
        let rest = self.remaining();
        rest.len() - rest.trim_start().len()
    }

    pub fn skip_whitespace(&mut self) {
        self.pos += self.whitespace_len();
    }

    /// Consume `literal` as a whole token after any leading whitespace.
    ///
    /// The token must be followed by whitespace or end of input. On failure
    /// the cursor is left untouched.
    pub fn consume(&mut self, literal: &str) -> bool {
        let skip = self.whitespace_len();
        let rest = &self.remaining()[skip..];
        match rest.strip_prefix(literal) {
            Some(after) if !literal.is_empty() && at_boundary(after) => {
                self.pos += skip + literal.len();
                true
            },
            _ => false,
        }
    }

    /// Store a resolved argument, returning the value it replaced.
    pub fn set_argument(&mut self, name: &str, value: ArgValue) -> Option<ArgValue> {
        self.arguments.insert(name.to_string(), value)
    }

    /// Undo a [`set_argument`](Self::set_argument) after a failed branch.
    pub(crate) fn restore_argument(&mut self, name: &str, previous: Option<ArgValue>) {
        match previous {
            Some(value) => {
                self.arguments.insert(name.to_string(), value);
            },
            None => {
                self.arguments.remove(name);
            },
        }
    }

    pub fn argument(&self, name: &str) -> Option<&ArgValue> {
        self.arguments.get(name)
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.argument(name).and_then(ArgValue::as_str)
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.argument(name).and_then(ArgValue::as_integer)
    }

    pub fn arguments(&self) -> &HashMap<String, ArgValue> {
        &self.arguments
    }

    /// The dispatcher driving this parse (for help text, command lists).
    pub fn dispatcher(&self) -> &'a CommandDispatcher {
        self.dispatcher
    }

    pub fn output(&self) -> &'a dyn OutputSink {
        self.dispatcher.output()
    }

    pub fn send_output(&self, text: &str) {
        self.output().send_output(text);
    }

    pub fn send_warn(&self, text: &str) {
        self.output().send_warn(text);
    }

    pub fn send_error(&self, text: &str) {
        self.output().send_error(text);
    }

    /// Emit a diagnostic on the error channel.
    pub fn report(&self, diagnostic: &Diagnostic) {
        log::debug!("diagnostic at {}: {diagnostic}", self.pos);
        self.send_error(&diagnostic.to_string());
    }
}
