// Keyword extraction — swappable strategies behind one trait.

pub mod fallback;
#[cfg(feature = "nlprule")]
pub mod nlprule_toolkit;
pub mod select;
pub mod toolkit;
pub mod traits;
