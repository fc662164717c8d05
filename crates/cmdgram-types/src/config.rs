//! Shell configuration loaded from TOML (or JSON) files.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CmdgramError, Result};

/// A named profile link shown by the `socials` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Host configuration for the interactive shell.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Prefix a line must start with to be dispatched.
    #[serde(default)]
    pub prefix: String,
    /// Prompt echoed in front of every entered line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Command dispatched once at startup.
    #[serde(default = "default_startup_command")]
    pub startup_command: Option<String>,
    /// Prepended to error diagnostics when displayed.
    #[serde(default = "default_error_prefix")]
    pub error_prefix: String,
    /// Prepended to warnings when displayed.
    #[serde(default = "default_warn_prefix")]
    pub warn_prefix: String,
    /// Text printed by `whoami`.
    #[serde(default = "default_about")]
    pub about: String,
    /// Links listed by `socials`, in display order.
    #[serde(default = "default_socials")]
    pub socials: Vec<SocialLink>,
}

fn default_prompt() -> String {
    "$ ".to_string()
}
fn default_startup_command() -> Option<String> {
    Some("help".to_string())
}
fn default_error_prefix() -> String {
    "Error: ".to_string()
}
fn default_warn_prefix() -> String {
    "Warning: ".to_string()
}
fn default_about() -> String {
    "Hi i am tympanicblock61 or also known as zombi\n\
     i am not very well known and have very few projects that i actually continue\n\
     enjoy my site :)"
        .to_string()
}
fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink::new("discord", "zombiiess"),
        SocialLink::new("github", "https://github.com/Tympanicblock61"),
        SocialLink::new(
            "bluesky",
            "https://bsky.app/profile/howlingjackel.bsky.social",
        ),
        SocialLink::new(
            "myanimelist",
            "https://myanimelist.net/profile/thehowlingjackel",
        ),
        SocialLink::new("anilist", "https://anilist.co/user/Thehowlingjackel/"),
    ]
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            prompt: default_prompt(),
            startup_command: default_startup_command(),
            error_prefix: default_error_prefix(),
            warn_prefix: default_warn_prefix(),
            about: default_about(),
            socials: default_socials(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_toml_str(&text)?,
        };
        log::debug!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Reject social lists the `socials` command cannot address.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for link in &self.socials {
            if link.name.trim().is_empty() {
                return Err(CmdgramError::Config("social name is empty".to_string()));
            }
            if link.name.chars().any(char::is_whitespace) {
                return Err(CmdgramError::Config(format!(
                    "social name contains whitespace: \"{}\"",
                    link.name
                )));
            }
            if !seen.insert(link.name.as_str()) {
                return Err(CmdgramError::Config(format!(
                    "duplicate social: \"{}\"",
                    link.name
                )));
            }
        }
        Ok(())
    }
}
