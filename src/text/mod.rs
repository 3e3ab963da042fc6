// Text preparation — normalization and stopword lists.

pub mod normalize;
pub mod stopwords;
