// Language model invocation: trait-based abstraction for swappable backends.
//
// The LanguageModel trait defines the interface. OllamaClient implements it
// against a local Ollama server, so nothing leaves the machine except the
// Wikipedia lookups.

pub mod ollama;
pub mod traits;

pub use ollama::OllamaClient;
pub use traits::LanguageModel;
