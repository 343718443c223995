pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::{extract_answer, ERROR_PARSING_PREFIX, NO_CONTENT_FOUND};
pub use prompt::{build_prompt, template_for};
pub use types::{Content, GenerateContentRequest, Operation, Part, ResearchError, ResearchRequest};
