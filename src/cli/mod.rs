use clap::{Arg, Command};
use std::time::Duration;
use tracing::{error, info};

use crate::{
    core::DEFAULT_MODEL,
    flights,
    types::{plan::TravelPlan, trip::TripRequest},
    Planner,
};

/// CLI entry point for the wanderplan tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("wanderplan")
        .version("0.1.0")
        .about("AI-assisted travel itinerary planner with synthetic flight listings")
        .arg(
            Arg::new("origin")
                .help("City you are traveling from")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("destination")
                .help("City you are traveling to")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("start-date")
                .short('s')
                .long("start-date")
                .value_name("YYYY-MM-DD")
                .help("First day of the trip")
                .required(true),
        )
        .arg(
            Arg::new("end-date")
                .short('e')
                .long("end-date")
                .value_name("YYYY-MM-DD")
                .help("Last day of the trip")
                .required(true),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("AMOUNT")
                .help("Total budget, free text")
                .default_value("moderate"),
        )
        .arg(
            Arg::new("travelers")
                .short('n')
                .long("travelers")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("1"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("LIST")
                .help("Comma-separated interest tags")
                .default_value("sightseeing"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GEMINI_API_KEY env var)"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The generative model to use")
                .default_value(DEFAULT_MODEL),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Override the generative-language API base URL"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("flights")
                .long("flights")
                .value_name("COUNT")
                .help("Number of synthetic flight listings to show")
                .default_value("6"),
        )
        .arg(
            Arg::new("ask")
                .long("ask")
                .value_name("QUESTION")
                .help("Follow-up question for the travel assistant"),
        )
        .get_matches();

    let origin = matches.get_one::<String>("origin").unwrap();
    let destination = matches.get_one::<String>("destination").unwrap();
    let start_date = matches.get_one::<String>("start-date").unwrap().parse()?;
    let end_date = matches.get_one::<String>("end-date").unwrap().parse()?;
    let interests: Vec<String> = matches
        .get_one::<String>("interests")
        .unwrap()
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    let request = TripRequest::new(
        origin.as_str(),
        destination.as_str(),
        start_date,
        end_date,
        matches.get_one::<String>("budget").unwrap().as_str(),
        matches.get_one::<String>("travelers").unwrap().as_str(),
        interests,
        matches
            .get_one::<String>("api-key")
            .cloned()
            .unwrap_or_default(),
    )?;

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let flight_count: usize = matches.get_one::<String>("flights").unwrap().parse()?;

    let mut planner = Planner::for_request(&request)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_timeout(Duration::from_secs(timeout_seconds));
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        planner = planner.with_base_url(base_url.as_str());
    }

    info!("Generating itinerary from {} to {}", origin, destination);

    let plan = match planner.generate_travel_plan(&request).await {
        Ok(plan) => plan,
        Err(e) => {
            error!("Itinerary generation failed: {}", e);
            return Err(e.into());
        }
    };

    render_plan(&plan);

    if plan.is_renderable() {
        let departure_date = plan
            .days
            .first()
            .map(|day| day.date.clone())
            .unwrap_or_else(|| request.start_date.to_string());
        let flight_destination = plan.destination.as_deref().unwrap_or(destination);

        let offers = flights::sample_flights(origin, flight_destination, &departure_date, flight_count);
        render_flights(&offers);
    }

    if let Some(question) = matches.get_one::<String>("ask") {
        info!("Asking the travel assistant: {}", question);
        match planner.ask(&plan, question).await {
            Ok(answer) => println!("\nAssistant:\n{}", answer),
            Err(e) => {
                error!("Chat request failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}

fn render_plan(plan: &TravelPlan) {
    println!("\n{}", plan.summary);
    if let Some(destination) = &plan.destination {
        println!("Destination: {}", destination);
    }

    for day in &plan.days {
        println!("\nDay {} ({})", day.day, day.date);
        for activity in &day.activities {
            let mut line = format!("  {}: {}", activity.time, activity.description);
            if let Some(location) = &activity.location {
                line.push_str(&format!(" @ {}", location));
            }
            if let Some(cost) = &activity.cost {
                line.push_str(&format!(" ({})", cost));
            }
            println!("{}", line);
        }
    }

    if !plan.tips.is_empty() {
        println!("\nTips:");
        for tip in &plan.tips {
            println!("  - {}", tip);
        }
    }

    println!("\nTotal estimated cost: {}", plan.total_estimated_cost);
}

fn render_flights(offers: &[crate::types::flight::FlightOffer]) {
    println!("\nAvailable flights (sample data):");
    for offer in offers {
        println!(
            "  {} {} | {} -> {} | {} | {} | {} seats left",
            offer.airline,
            offer.flight_number,
            offer.departure_time.format("%Y-%m-%d %H:%M"),
            offer.arrival_time.format("%Y-%m-%d %H:%M"),
            offer.duration,
            offer.price,
            offer.seats_available,
        );
    }
}
