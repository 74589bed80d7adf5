//! Data Transfer Objects - request/response bodies of the API.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /user-input`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInputRequest {
    pub area_of_interest: String,
    pub content_type: String,
    pub keywords: Vec<String>,
    pub post_frequency: i64,
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub liked: bool,
    pub comments: String,
}

/// 2xx body of both submit endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /state`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub generated_content: Vec<ContentItemDto>,
    #[serde(default)]
    pub user_input: Option<serde_json::Value>,
    #[serde(default)]
    pub schedule: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "string_entries")]
    pub suggested_topics: Option<Vec<String>>,
}

/// One entry of `generated_content`. Numbers are kept as their text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItemDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub topic: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep the string entries of a list; anything else reads as absent.
fn string_entries<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accepts_numbers_for_text_fields() {
        let state: StateResponse = serde_json::from_str(
            r#"{"generated_content":[{"day":3,"topic":"Gas fees","content":"Low."}]}"#,
        )
        .unwrap();
        assert_eq!(state.generated_content.len(), 1);
        assert_eq!(state.generated_content[0].day, "3");
        assert_eq!(state.generated_content[0].topic, "Gas fees");
    }

    #[test]
    fn test_state_missing_or_null_content_is_empty() {
        let state: StateResponse = serde_json::from_str("{}").unwrap();
        assert!(state.generated_content.is_empty());

        let state: StateResponse =
            serde_json::from_str(r#"{"generated_content":null,"schedule":null}"#).unwrap();
        assert!(state.generated_content.is_empty());
        assert!(state.schedule.is_none());
    }

    #[test]
    fn test_state_keeps_optional_sections() {
        let state: StateResponse = serde_json::from_str(
            r#"{
                "user_input": {"area_of_interest": "Technology"},
                "schedule": {"posting_days": ["Monday", "Thursday"]},
                "generated_content": [],
                "suggested_topics": ["Ethereum staking"]
            }"#,
        )
        .unwrap();
        assert_eq!(
            state.suggested_topics,
            Some(vec!["Ethereum staking".to_string()])
        );
        assert_eq!(
            state.schedule.unwrap()["posting_days"][1],
            serde_json::json!("Thursday")
        );
    }

    #[test]
    fn test_odd_suggested_topics_do_not_hide_content() {
        let state: StateResponse = serde_json::from_str(
            r#"{
                "generated_content": [{"day": "Monday", "topic": "Rollups", "content": "Body"}],
                "suggested_topics": ["Staking", 42, {"topic": "MEV"}, null]
            }"#,
        )
        .unwrap();
        assert_eq!(state.generated_content.len(), 1);
        assert_eq!(state.suggested_topics, Some(vec!["Staking".to_string()]));

        let state: StateResponse =
            serde_json::from_str(r#"{"generated_content": [], "suggested_topics": "Staking"}"#)
                .unwrap();
        assert_eq!(state.suggested_topics, None);
    }
}
