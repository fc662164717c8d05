//! Stdout-backed output sink.

use cmdgram_terminal::OutputSink;
use cmdgram_types::config::ShellConfig;

/// Prints each message on stdout, prefixing warnings and errors.
pub struct ConsoleSink {
    error_prefix: String,
    warn_prefix: String,
}

impl ConsoleSink {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            error_prefix: config.error_prefix.clone(),
            warn_prefix: config.warn_prefix.clone(),
        }
    }

    fn format(prefix: &str, text: &str) -> Option<String> {
        // Empty messages are not shown.
        (!text.is_empty()).then(|| format!("{prefix}{text}"))
    }
}

impl OutputSink for ConsoleSink {
    fn send_output(&self, text: &str) {
        if let Some(line) = Self::format("", text) {
            println!("{line}");
        }
    }
    fn send_warn(&self, text: &str) {
        if let Some(line) = Self::format(&self.warn_prefix, text) {
            println!("{line}");
        }
    }
    fn send_error(&self, text: &str) {
        if let Some(line) = Self::format(&self.error_prefix, text) {
            println!("{line}");
        }
    }
}
