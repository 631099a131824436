use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::types::plan::TravelPlan;

/// Why a reply could not be turned into a plan.
///
/// Never surfaced to callers: every variant is absorbed into the fallback
/// plan. Kept as a type so the failure policy stays independently testable.
#[derive(Debug)]
pub(crate) enum MalformedResponse {
    MissingCandidate,
    NoJsonObject,
    Parse(String),
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedResponse::MissingCandidate => write!(f, "reply contained no candidate text"),
            MalformedResponse::NoJsonObject => write!(f, "no JSON object found in reply text"),
            MalformedResponse::Parse(detail) => write!(f, "plan JSON failed to parse {detail}"),
        }
    }
}

/// Text of the first candidate's first part, if the reply carries one.
pub(crate) fn candidate_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Slice from the first `{` to the last `}` inclusive.
///
/// Tolerates surrounding prose and markdown fences. Breaks when the text
/// carries multiple independent objects or unbalanced braces inside string
/// values; the upstream contract is one top-level object per reply.
pub fn locate_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn parse_plan(json: &str) -> Result<TravelPlan, MalformedResponse> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        MalformedResponse::Parse(format!("at {location}: {err}"))
    })
}

/// Best-effort destination label scraped from a summary like
/// "A week-long trip from Mumbai to Tokyo". Heuristic; may misfire on
/// ordinary prose, and its absence is not an error.
fn infer_destination(summary: &str) -> Option<String> {
    let (_, rest) = summary.split_once(" to ")?;
    rest.split_whitespace().next().map(|word| word.to_string())
}

/// The degraded-but-valid plan returned when a reply cannot be parsed.
pub fn fallback_plan() -> TravelPlan {
    TravelPlan {
        summary: "Failed to generate travel plan. Please try again.".to_string(),
        destination: Some("Unknown".to_string()),
        days: Vec::new(),
        tips: vec!["Please check your input and try again.".to_string()],
        total_estimated_cost: "Unknown".to_string(),
    }
}

/// Convert a raw `generateContent` reply into a plan.
///
/// Two stages: locate the candidate JSON substring, then strict-parse it.
/// Any failure becomes the fallback value rather than an error, so the
/// consumer always has something renderable to work with.
pub fn extract_plan(response: &Value) -> TravelPlan {
    match try_extract(response) {
        Ok(plan) => plan,
        Err(reason) => {
            debug!(
                target: "wanderplan::extract",
                reason = %reason,
                "falling back to placeholder plan"
            );
            fallback_plan()
        }
    }
}

fn try_extract(response: &Value) -> Result<TravelPlan, MalformedResponse> {
    let text = candidate_text(response).ok_or(MalformedResponse::MissingCandidate)?;
    let json = locate_json_object(text).ok_or(MalformedResponse::NoJsonObject)?;
    let mut plan = parse_plan(json)?;

    if plan.destination.is_none() {
        plan.destination = infer_destination(&plan.summary);
    }

    Ok(plan)
}
