pub mod parse;
pub mod prompt;
pub mod types;

pub use parse::parse_reply;
pub use prompt::{build_prompt, EXAMPLE_CONTRACT};
pub use types::{GenerationRequest, GenerationResult};
