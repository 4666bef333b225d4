// Question answering pipeline: question -> topic -> context -> prompt -> answer.

pub mod ask;

pub use ask::{PreparedPrompt, RagAnswer};
