// Phrase composition — n-gram windows over keyword sequences.

pub mod ngrams;
