use models::result::{self, NewResult, Scores};
use serde::{Deserialize, Serialize};

/// Submission payload. Every field is required; the JSON extractor rejects
/// anything missing or of the wrong type before the service sees it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SubmitInput {
    pub username: String,
    pub scores: Scores,
    pub profile: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
}

impl From<SubmitInput> for NewResult {
    fn from(input: SubmitInput) -> Self {
        NewResult {
            username: input.username,
            scores: input.scores,
            profile: input.profile,
            energy: input.energy,
            math: input.math,
            tech: input.tech,
            career: input.career,
        }
    }
}

/// Listing view of a stored result. Scores are not exposed here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultSummary {
    pub id: i32,
    pub username: String,
    pub profile: String,
    pub date: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
}

impl From<result::Model> for ResultSummary {
    fn from(m: result::Model) -> Self {
        let date = m.formatted_date();
        ResultSummary {
            id: m.id,
            username: m.username,
            profile: m.profile,
            date,
            energy: m.energy,
            math: m.math,
            tech: m.tech,
            career: m.career,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn submit_input_requires_every_field() {
        let missing_career = r#"{"username":"a","scores":{},"profile":"p","energy":1,"math":1,"tech":1}"#;
        assert!(serde_json::from_str::<SubmitInput>(missing_career).is_err());

        let string_score = r#"{"username":"a","scores":{"x":"1"},"profile":"p","energy":1,"math":1,"tech":1,"career":1}"#;
        assert!(serde_json::from_str::<SubmitInput>(string_score).is_err());

        let ok = r#"{"username":"a","scores":{"x":1.5},"profile":"p","energy":1,"math":2,"tech":3,"career":4}"#;
        let input: SubmitInput = serde_json::from_str(ok).unwrap();
        assert_eq!(input.career, 4);
    }

    #[test]
    fn summary_omits_scores_and_formats_date() {
        let m = result::Model {
            id: 3,
            username: "alice".into(),
            scores: r#"{"energy":5}"#.into(),
            profile: "engineer".into(),
            energy: 5,
            math: 3,
            tech: 4,
            career: 2,
            date: Utc.with_ymd_and_hms(2025, 9, 1, 14, 30, 12).unwrap(),
        };
        let value = serde_json::to_value(ResultSummary::from(m)).unwrap();
        assert_eq!(value["date"], "01.09.2025 14:30");
        assert_eq!(value["profile"], "engineer");
        assert!(value.get("scores").is_none());
        assert_eq!(value.as_object().unwrap().len(), 8);
    }
}
