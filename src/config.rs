use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::select::{default_model_dir, tokenizer_files_present, TOOLKIT_COMPILED};

/// Default port, same as the development server the web page was built against.
pub const DEFAULT_PORT: u16 = 5000;

/// Which keyword extraction strategy to use.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolkitBackend {
    /// Use the linguistic toolkit when it's usable, otherwise fall back (default)
    Auto,
    /// Require the nlprule toolkit — startup fails without it
    Nlprule,
    /// Always use the tokenizer heuristic
    Fallback,
}

impl ToolkitBackend {
    /// Parse a CASTWORDS_TOOLKIT value. Anything unrecognized means `Auto`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "nlprule" => Self::Nlprule,
            "fallback" => Self::Fallback,
            _ => Self::Auto,
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web server binds to
    pub bind: String,
    pub port: u16,
    pub toolkit: ToolkitBackend,
    /// Directory containing en_tokenizer.bin
    pub model_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            toolkit: ToolkitBackend::Auto,
            model_dir: default_model_dir(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Everything has a default;
    /// only a malformed CASTWORDS_PORT is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("CASTWORDS_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("CASTWORDS_PORT is not a valid port: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            bind: env::var("CASTWORDS_BIND").unwrap_or(defaults.bind),
            port,
            toolkit: env::var("CASTWORDS_TOOLKIT")
                .map(|v| ToolkitBackend::parse(&v))
                .unwrap_or(ToolkitBackend::Auto),
            model_dir: env::var("CASTWORDS_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
        })
    }

    /// Validate that the toolkit can be loaded: compiled in and model present.
    pub fn require_toolkit(&self) -> Result<()> {
        if !TOOLKIT_COMPILED {
            anyhow::bail!(
                "CASTWORDS_TOOLKIT=nlprule but castwords was built without the 'nlprule' feature.\n\
                 Rebuild with: cargo build --features nlprule\n\
                 Or set CASTWORDS_TOOLKIT=fallback to use the tokenizer heuristic."
            );
        }
        if !tokenizer_files_present(&self.model_dir) {
            anyhow::bail!(
                "nlprule tokenizer not found in {}\n\
                 Download en_tokenizer.bin from the nlprule releases page into that directory,\n\
                 or set CASTWORDS_MODEL_DIR to where it lives.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
