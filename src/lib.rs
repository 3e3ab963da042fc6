// castwords: keyword and title suggestions for podcasts and audio dramas
//
// This is the library root. Each module corresponds to one stage of the
// text → keywords → phrases pipeline, plus the surfaces that expose it.

pub mod config;
pub mod keywords;
pub mod output;
pub mod phrases;
pub mod pipeline;
pub mod status;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
