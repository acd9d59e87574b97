//! Spoken response generation
//!
//! Renders SSML for each dialog state and advances the list pointers as
//! headlines are read.

mod language;
mod response;

pub use language::unknown_section_error;
pub use response::{ResponseGenerator, SkillResponse};
