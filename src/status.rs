// System status display — which keyword strategy is active and why.

use anyhow::Result;
use colored::Colorize;

use crate::config::{Config, ToolkitBackend};
use crate::keywords::select::{select_strategy, tokenizer_files_present, tokenizer_path, TOOLKIT_COMPILED};

/// Display toolkit status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    let requested = match config.toolkit {
        ToolkitBackend::Auto => "auto",
        ToolkitBackend::Nlprule => "nlprule",
        ToolkitBackend::Fallback => "fallback",
    };
    println!("Requested toolkit: {requested}");

    if TOOLKIT_COMPILED {
        println!("nlprule support: {}", "compiled in".green());
    } else {
        println!("nlprule support: {}", "not compiled in".yellow());
        println!("  Rebuild with `cargo build --features nlprule` to enable lemmatization");
    }

    let path = tokenizer_path(&config.model_dir);
    if tokenizer_files_present(&config.model_dir) {
        println!("Tokenizer: {}", path.display());
    } else {
        println!("Tokenizer: {} ({})", path.display(), "missing".yellow());
    }

    // Resolve exactly as `serve` would, so this reports the real outcome
    let strategy = select_strategy(config)?;
    println!("Active strategy: {}", strategy.name().bold());

    Ok(())
}
