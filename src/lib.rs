// wikirag: Ask a question, ground the answer in Wikipedia
//
// This is the library root. Each module corresponds to one stage of the
// question -> topic -> context -> prompt -> answer flow.

pub mod config;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod selftest;
pub mod topics;
pub mod wiki;
