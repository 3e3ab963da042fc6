// Strategy selection — decided once at startup.
//
// The toolkit is optional twice over: it must be compiled in (the `nlprule`
// feature) and its tokenizer binary must be on disk. When either is missing
// in auto mode we log why and use the fallback heuristic for the lifetime of
// the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::fallback::FallbackExtractor;
use super::traits::KeywordStrategy;
use crate::config::{Config, ToolkitBackend};

/// Whether this build includes the nlprule toolkit.
pub const TOOLKIT_COMPILED: bool = cfg!(feature = "nlprule");

/// File name of nlprule's English tokenizer binary.
pub const TOKENIZER_FILE: &str = "en_tokenizer.bin";

/// Returns the default directory for storing model files.
/// Uses the platform data directory: ~/.local/share/castwords/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("castwords")
        .join("models")
}

pub fn tokenizer_path(model_dir: &Path) -> PathBuf {
    model_dir.join(TOKENIZER_FILE)
}

/// Check whether the tokenizer binary exists.
pub fn tokenizer_files_present(model_dir: &Path) -> bool {
    tokenizer_path(model_dir).exists()
}

/// Pick the keyword strategy for this process.
///
/// `Fallback` never fails. `Nlprule` fails if the toolkit can't be loaded.
/// `Auto` tries the toolkit and degrades to the fallback on any error.
pub fn select_strategy(config: &Config) -> Result<Arc<dyn KeywordStrategy>> {
    match config.toolkit {
        ToolkitBackend::Fallback => {
            info!("Using fallback keyword extractor");
            Ok(Arc::new(FallbackExtractor))
        }
        ToolkitBackend::Nlprule => {
            config.require_toolkit()?;
            load_toolkit(&config.model_dir)
        }
        ToolkitBackend::Auto => match load_toolkit(&config.model_dir) {
            Ok(strategy) => Ok(strategy),
            Err(e) => {
                warn!(error = %e, "Linguistic toolkit unavailable, using fallback keyword extractor");
                Ok(Arc::new(FallbackExtractor))
            }
        },
    }
}

#[cfg(feature = "nlprule")]
fn load_toolkit(model_dir: &Path) -> Result<Arc<dyn KeywordStrategy>> {
    use super::nlprule_toolkit::NlpruleToolkit;
    use super::toolkit::ToolkitExtractor;

    let toolkit = NlpruleToolkit::load(&tokenizer_path(model_dir))?;
    info!("Using nlprule keyword extractor");
    Ok(Arc::new(ToolkitExtractor::new(toolkit)))
}

#[cfg(not(feature = "nlprule"))]
fn load_toolkit(_model_dir: &Path) -> Result<Arc<dyn KeywordStrategy>> {
    anyhow::bail!("built without the 'nlprule' feature")
}
