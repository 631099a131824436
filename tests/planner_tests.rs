use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use wanderplan::{Planner, PlannerError, TripRequest};

fn sample_request(api_key: &str) -> TripRequest {
    TripRequest::new(
        "Mumbai",
        "Tokyo",
        "2025-06-01".parse().unwrap(),
        "2025-06-05".parse().unwrap(),
        "$3000",
        "2",
        vec!["food".to_string(), "museums".to_string()],
        api_key,
    )
    .unwrap()
}

fn gemini_reply(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_travel_plan_success() {
    let mut server = mockito::Server::new_async().await;
    let reply_text = "Here is your itinerary:\n```json\n{\"summary\":\"A trip from Mumbai to Tokyo\",\"days\":[{\"day\":1,\"date\":\"2025-06-01\",\"activities\":[{\"time\":\"Morning\",\"description\":\"Arrive at Narita\",\"location\":\"Narita, Tokyo\",\"cost\":\"$30\"}]}],\"tips\":[\"Carry cash\"],\"totalEstimatedCost\":\"$2800\"}\n```";

    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "maxOutputTokens": 8192 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply(reply_text))
        .create_async()
        .await;

    let planner = Planner::new("test-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    let plan = planner
        .generate_travel_plan(&sample_request("test-key"))
        .await
        .unwrap();

    assert_eq!(plan.summary, "A trip from Mumbai to Tokyo");
    assert_eq!(plan.destination.as_deref(), Some("Tokyo"));
    assert_eq!(plan.days.len(), 1);
    assert_eq!(plan.total_estimated_cost, "$2800");
    assert!(plan.is_renderable());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unparseable_reply_becomes_fallback_plan() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply("Sorry, I cannot produce an itinerary right now."))
        .create_async()
        .await;

    let planner = Planner::new("test-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    // Malformed content is not an error: the caller gets the fallback value
    let plan = planner
        .generate_travel_plan(&sample_request("test-key"))
        .await
        .unwrap();

    assert!(plan.days.is_empty());
    assert!(!plan.is_renderable());
    assert_eq!(plan.total_estimated_cost, "Unknown");
    assert_eq!(plan.destination.as_deref(), Some("Unknown"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_message_propagated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": { "message": "API key not valid" } }).to_string())
        .create_async()
        .await;

    let planner = Planner::new("bad-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    let err = planner
        .generate_travel_plan(&sample_request("bad-key"))
        .await
        .unwrap_err();

    match err {
        PlannerError::Upstream(message) => assert!(message.contains("API key not valid")),
        other => panic!("expected Upstream error, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_credential_fails_without_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let planner = Planner::new("")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    let err = planner
        .generate_travel_plan(&sample_request(""))
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::Credential));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ask_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "maxOutputTokens": 1024 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply("Yes, a 7-day rail pass is worth it."))
        .create_async()
        .await;

    let planner = Planner::new("test-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    let plan = wanderplan::fallback_plan();
    let answer = planner.ask(&plan, "Is a rail pass worth it?").await.unwrap();

    assert_eq!(answer, "Yes, a 7-day rail pass is worth it.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ask_without_candidate_is_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "candidates": [] }).to_string())
        .create_async()
        .await;

    let planner = Planner::new("test-key")
        .with_base_url(server.url())
        .with_timeout(Duration::from_secs(5));

    let err = planner
        .ask(&wanderplan::fallback_plan(), "Hello?")
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::Upstream(_)));
    mock.assert_async().await;
}
