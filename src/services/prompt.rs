use crate::types::{plan::TravelPlan, trip::TripRequest};

/// Build the itinerary prompt for one trip request.
///
/// Pure string templating: every request field is embedded verbatim and a
/// fixed instruction block pins the JSON shape the reply must follow.
pub fn build_plan_prompt(request: &TripRequest) -> String {
    format!(
        r#"
You are a highly experienced travel planner. Create a detailed travel itinerary from {origin} to {destination}.

Travel Details:
- Start Date: {start_date}
- End Date: {end_date}
- Budget: {budget}
- Number of Travelers: {travelers}
- Interests: {interests}

Please provide a day-by-day itinerary in the following JSON format. Do not include any text outside of this JSON structure:

{{
  "summary": "Brief overview of the trip",
  "days": [
    {{
      "day": 1,
      "date": "YYYY-MM-DD",
      "activities": [
        {{
          "time": "Morning/Afternoon/Evening or specific time",
          "description": "Detailed description of the activity",
          "location": "Name of the place",
          "cost": "Estimated cost"
        }}
      ]
    }}
  ],
  "tips": [
    "Practical tip 1",
    "Practical tip 2"
  ],
  "totalEstimatedCost": "Total estimated cost for the entire trip"
}}

Make sure that the itinerary:
1. Is realistic in terms of travel times and activities per day
2. Stays within the specified budget
3. Incorporates the traveler's interests
4. Includes local specialties and hidden gems, not just tourist attractions
5. Provides practical tips for the specific destination
"#,
        origin = request.origin,
        destination = request.destination,
        start_date = request.start_date,
        end_date = request.end_date,
        budget = request.budget,
        travelers = request.travelers,
        interests = request.interests.join(", "),
    )
}

/// Build the follow-up question prompt for the chat assistant.
///
/// Embeds a short trip-context block, the full plan as pretty-printed JSON,
/// and the user's question.
pub fn build_chat_prompt(plan: &TravelPlan, question: &str) -> String {
    let destination = plan
        .days
        .first()
        .and_then(|day| day.activities.first())
        .and_then(|activity| activity.location.as_deref())
        .and_then(|location| location.split(',').next_back())
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or("the destination");

    let plan_json =
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"You are a helpful travel assistant. The user has received a travel itinerary with the following details:

Destination: {destination}
Trip duration: {day_count} days
Budget: {total_cost}

The full itinerary details:
{plan_json}

The user has the following question about their trip:
"{question}"

Please provide a helpful, concise response. Focus on being practical and specific. If you don't know something, it's okay to say so."#,
        day_count = plan.days.len(),
        total_cost = plan.total_estimated_cost,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::plan::{Activity, DayPlan};

    fn sample_request() -> TripRequest {
        TripRequest::new(
            "Mumbai",
            "Tokyo",
            "2025-06-01".parse().unwrap(),
            "2025-06-05".parse().unwrap(),
            "$3000",
            "2",
            vec!["food".to_string(), "museums".to_string()],
            "key",
        )
        .unwrap()
    }

    fn sample_plan() -> TravelPlan {
        TravelPlan {
            summary: "Five days in Tokyo".to_string(),
            destination: Some("Tokyo".to_string()),
            days: vec![DayPlan {
                day: 1,
                date: "2025-06-01".to_string(),
                activities: vec![Activity {
                    time: "Morning".to_string(),
                    description: "Arrive at Narita".to_string(),
                    location: Some("Narita, Tokyo".to_string()),
                    cost: Some("$30".to_string()),
                }],
            }],
            tips: vec!["Carry cash".to_string()],
            total_estimated_cost: "$2800".to_string(),
        }
    }

    #[test]
    fn test_plan_prompt_embeds_request_fields() {
        let prompt = build_plan_prompt(&sample_request());

        assert!(prompt.contains("Mumbai"));
        assert!(prompt.contains("Tokyo"));
        assert!(prompt.contains("food, museums"));
        assert!(prompt.contains("2025-06-01"));
        assert!(prompt.contains("2025-06-05"));
        assert!(prompt.contains("$3000"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"totalEstimatedCost\""));
    }

    #[test]
    fn test_plan_prompt_lists_constraints() {
        let prompt = build_plan_prompt(&sample_request());
        assert!(prompt.contains("Stays within the specified budget"));
        assert!(prompt.contains("hidden gems"));
    }

    #[test]
    fn test_chat_prompt_embeds_context_and_question() {
        let prompt = build_chat_prompt(&sample_plan(), "Do I need a rail pass?");

        assert!(prompt.contains("Destination: Tokyo"));
        assert!(prompt.contains("Trip duration: 1 days"));
        assert!(prompt.contains("Budget: $2800"));
        assert!(prompt.contains("\"Do I need a rail pass?\""));
        // full plan JSON is included
        assert!(prompt.contains("\"totalEstimatedCost\": \"$2800\""));
    }

    #[test]
    fn test_chat_prompt_falls_back_without_locations() {
        let mut plan = sample_plan();
        plan.days[0].activities[0].location = None;

        let prompt = build_chat_prompt(&plan, "Anything else?");
        assert!(prompt.contains("Destination: the destination"));
    }
}
