use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Validated trip parameters for a single planning request.
///
/// Constructed once per submission and immutable afterwards. Nothing here is
/// persisted; the record lives only for the duration of one planning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-text budget, embedded verbatim in the prompt
    pub budget: String,
    /// Traveler count as entered; must parse as a positive integer
    pub travelers: String,
    pub interests: Vec<String>,
    /// Per-request credential; may be empty when a process default is set
    pub api_key: String,
}

impl TripRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: impl Into<String>,
        travelers: impl Into<String>,
        interests: Vec<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() {
            return Err(PlannerError::Validation("origin must not be empty".to_string()));
        }
        if destination.trim().is_empty() {
            return Err(PlannerError::Validation(
                "destination must not be empty".to_string(),
            ));
        }
        if end_date < start_date {
            return Err(PlannerError::Validation(format!(
                "end date {} is before start date {}",
                end_date, start_date
            )));
        }

        let travelers = travelers.into();
        match travelers.trim().parse::<u32>() {
            Ok(count) if count > 0 => {}
            _ => {
                return Err(PlannerError::Validation(format!(
                    "travelers must be a positive integer, got `{}`",
                    travelers
                )))
            }
        }

        if interests.is_empty() {
            return Err(PlannerError::Validation(
                "at least one interest is required".to_string(),
            ));
        }
        for (index, interest) in interests.iter().enumerate() {
            if interest.trim().is_empty() {
                return Err(PlannerError::Validation(
                    "interests must not be empty strings".to_string(),
                ));
            }
            if interests[..index].contains(interest) {
                return Err(PlannerError::Validation(format!(
                    "duplicate interest `{}`",
                    interest
                )));
            }
        }

        Ok(Self {
            origin,
            destination,
            start_date,
            end_date,
            budget: budget.into(),
            travelers,
            interests,
            api_key: api_key.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn build(start: &str, end: &str, travelers: &str, interests: Vec<String>) -> Result<TripRequest> {
        TripRequest::new(
            "Mumbai",
            "Tokyo",
            date(start),
            date(end),
            "$3000",
            travelers,
            interests,
            "key",
        )
    }

    #[test]
    fn test_valid_request() {
        let request = build("2025-06-01", "2025-06-05", "2", vec!["food".to_string()]).unwrap();
        assert_eq!(request.origin, "Mumbai");
        assert_eq!(request.interests, vec!["food"]);
    }

    #[test]
    fn test_single_day_trip_allowed() {
        assert!(build("2025-06-01", "2025-06-01", "1", vec!["art".to_string()]).is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = build("2025-06-05", "2025-06-01", "2", vec!["food".to_string()]).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_non_positive_travelers_rejected() {
        assert!(build("2025-06-01", "2025-06-05", "0", vec!["food".to_string()]).is_err());
        assert!(build("2025-06-01", "2025-06-05", "two", vec!["food".to_string()]).is_err());
    }

    #[test]
    fn test_empty_interests_rejected() {
        assert!(build("2025-06-01", "2025-06-05", "2", vec![]).is_err());
    }

    #[test]
    fn test_duplicate_interests_rejected() {
        let err = build(
            "2025-06-01",
            "2025-06-05",
            "2",
            vec!["food".to_string(), "food".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
