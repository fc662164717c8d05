//! Foundation types for cmdgram.
//!
//! This crate contains the pieces shared by the interpreter core and its
//! hosts: the error type, the user-visible diagnostic vocabulary, and the
//! shell configuration.

pub mod config;
pub mod diagnostic;
pub mod error;
