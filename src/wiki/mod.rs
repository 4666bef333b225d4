// Context retrieval: trait-based abstraction for swappable knowledge sources.
//
// The ContextSource trait defines the interface. WikiClient implements it
// against the MediaWiki action API; NoContext is the stand-in when the user
// asks for an ungrounded answer.

pub mod client;
pub mod traits;

pub use client::WikiClient;
pub use traits::{ContextSource, NoContext};
