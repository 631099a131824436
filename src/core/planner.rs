use std::time::Duration;

use tracing::{debug, info};

use crate::{
    config,
    error::{PlannerError, Result},
    services::{
        extract,
        gemini_client::{GeminiClient, GenerateContentRequest, DEFAULT_MODEL},
        prompt,
    },
    types::{plan::TravelPlan, trip::TripRequest},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const CHAT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Entry point for the plan synthesizer and the chat assistant.
///
/// Holds the resolved credential, model name, and request timeout. Stateless
/// across calls: identical requests re-query the upstream service every time
/// and nothing is cached.
#[derive(Clone, Debug)]
pub struct Planner {
    client: GeminiClient,
    model: String,
    timeout: Duration,
}

impl Planner {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a planner for one request, letting a process-wide default
    /// credential take precedence over the per-request key.
    pub fn for_request(request: &TripRequest) -> Self {
        let api_key = config::resolve_api_key(&request.api_key).unwrap_or_default();
        Self::new(api_key)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    /// Generate an itinerary: one prompt, one upstream call, one typed result.
    ///
    /// Only the HTTP stage can fail; a reply that cannot be parsed comes back
    /// as the fallback plan with empty days.
    pub async fn generate_travel_plan(&self, request: &TripRequest) -> Result<TravelPlan> {
        let prompt = prompt::build_plan_prompt(request);
        debug!(
            target: "wanderplan::planner",
            origin = %request.origin,
            destination = %request.destination,
            "requesting itinerary"
        );

        let body = GenerateContentRequest::new(prompt).into_value();
        let response = self
            .client
            .generate_content(&self.model, &body, self.timeout)
            .await?;

        let plan = extract::extract_plan(&response);
        info!(
            target: "wanderplan::planner",
            days = plan.days.len(),
            renderable = plan.is_renderable(),
            "itinerary received"
        );
        Ok(plan)
    }

    /// Ask a follow-up question about a generated plan.
    ///
    /// Same endpoint and error policy as the synthesizer, with a smaller
    /// output budget. There is no fallback value for chat: a reply with no
    /// candidate text is an upstream error.
    pub async fn ask(&self, plan: &TravelPlan, question: &str) -> Result<String> {
        let prompt = prompt::build_chat_prompt(plan, question);
        let body = GenerateContentRequest::new(prompt)
            .with_max_output_tokens(CHAT_MAX_OUTPUT_TOKENS)
            .into_value();

        let response = self
            .client
            .generate_content(&self.model, &body, self.timeout)
            .await?;

        extract::candidate_text(&response)
            .map(|text| text.to_string())
            .ok_or_else(|| PlannerError::Upstream("reply contained no candidate text".to_string()))
    }
}
