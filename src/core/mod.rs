pub mod planner;

pub use crate::services::extract::{extract_plan, fallback_plan, locate_json_object};
pub use crate::services::gemini_client::{GenerateContentRequest, DEFAULT_MODEL};
pub use crate::services::prompt::{build_chat_prompt, build_plan_prompt};
pub use planner::Planner;
