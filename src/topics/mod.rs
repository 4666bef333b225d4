// Topic extraction: pick the subject word out of a question.

pub mod capitalized;
pub mod traits;

pub use capitalized::{extract_topic, CapitalizedWordExtractor};
pub use traits::TopicExtractor;
