//! Internal services backing the planner: prompt templating, the upstream
//! HTTP client, and reply-to-plan extraction

pub mod extract;
pub mod gemini_client;
pub mod prompt;
