//! Shared test utilities for interpreter tests.

use std::rc::Rc;

use crate::dispatcher::CommandDispatcher;
use crate::output::BufferSink;

/// A dispatcher with the given prefix whose output is captured.
pub fn capturing(prefix: &str) -> (CommandDispatcher, Rc<BufferSink>) {
    let sink = Rc::new(BufferSink::new());
    let dispatcher = CommandDispatcher::new(prefix, Rc::clone(&sink));
    (dispatcher, sink)
}
