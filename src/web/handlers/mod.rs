pub mod generate;
pub mod suggestions;
