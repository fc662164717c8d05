//! Output collaborators.
//!
//! The interpreter never renders anything itself. Diagnostics and command
//! results go to an [`OutputSink`] injected into the dispatcher.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives text produced while dispatching.
pub trait OutputSink {
    /// Regular command output.
    fn send_output(&self, text: &str);

    fn send_warn(&self, text: &str);

    /// Diagnostics (missing arguments, validation failures, no match).
    fn send_error(&self, text: &str);
}

impl<T: OutputSink + ?Sized> OutputSink for Rc<T> {
    fn send_output(&self, text: &str) {
        (**self).send_output(text);
    }
    fn send_warn(&self, text: &str) {
        (**self).send_warn(text);
    }
    fn send_error(&self, text: &str) {
        (**self).send_error(text);
    }
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn send_output(&self, text: &str) {
        log::info!("{text}");
    }
    fn send_warn(&self, text: &str) {
        log::warn!("{text}");
    }
    fn send_error(&self, text: &str) {
        log::error!("{text}");
    }
}

/// Which channel a buffered line arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Output,
    Warn,
    Error,
}

/// Collects every line in arrival order.
///
/// Share it with the dispatcher through an `Rc` to read the lines back.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: RefCell<Vec<(OutputKind, String)>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All buffered lines with their channel.
    pub fn lines(&self) -> Vec<(OutputKind, String)> {
        self.lines.borrow().clone()
    }

    /// Lines sent through `send_output`.
    pub fn outputs(&self) -> Vec<String> {
        self.of_kind(OutputKind::Output)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.of_kind(OutputKind::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_kind(OutputKind::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<(OutputKind, String)> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    fn of_kind(&self, kind: OutputKind) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.clone())
            .collect()
    }

    fn push(&self, kind: OutputKind, text: &str) {
        self.lines.borrow_mut().push((kind, text.to_string()));
    }
}

impl OutputSink for BufferSink {
    fn send_output(&self, text: &str) {
        self.push(OutputKind::Output, text);
    }
    fn send_warn(&self, text: &str) {
        self.push(OutputKind::Warn, text);
    }
    fn send_error(&self, text: &str) {
        self.push(OutputKind::Error, text);
    }
}
