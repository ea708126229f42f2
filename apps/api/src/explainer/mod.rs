//! Prompt composition and endpoint orchestration for the explanation,
//! feedback, and ask APIs.

pub mod handlers;
pub mod prompts;
