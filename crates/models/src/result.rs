//! `results` entity: one persisted quiz submission.
//!
//! Rows are append-only. `scores` is kept as serialized JSON text so the
//! category set stays open-ended.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set};

use crate::errors::ModelError;

/// Rendering used by every date shown to clients.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Per-category raw scores. Numbers keep their integer/float identity.
pub type Scores = BTreeMap<String, serde_json::Number>;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub scores: String,
    pub profile: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn decoded_scores(&self) -> Result<Scores, ModelError> {
        decode_scores(&self.scores)
    }
}

pub fn encode_scores(scores: &Scores) -> Result<String, ModelError> {
    serde_json::to_string(scores).map_err(|e| ModelError::Codec(e.to_string()))
}

pub fn decode_scores(raw: &str) -> Result<Scores, ModelError> {
    serde_json::from_str(raw).map_err(|e| ModelError::Codec(e.to_string()))
}

/// Fields a client supplies; `id` and `date` are assigned here and by the database.
#[derive(Clone, Debug, PartialEq)]
pub struct NewResult {
    pub username: String,
    pub scores: Scores,
    pub profile: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewResult) -> Result<Model, ModelError> {
    let scores = encode_scores(&new.scores)?;
    let am = ActiveModel {
        id: NotSet,
        username: Set(new.username),
        scores: Set(scores),
        profile: Set(new.profile),
        energy: Set(new.energy),
        math: Set(new.math),
        tech: Set(new.tech),
        career: Set(new.career),
        date: Set(Utc::now()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(date: DateTimeUtc) -> Model {
        Model {
            id: 7,
            username: "alice".into(),
            scores: r#"{"energy":5}"#.into(),
            profile: "engineer".into(),
            energy: 5,
            math: 3,
            tech: 4,
            career: 2,
            date,
        }
    }

    #[test]
    fn formats_date_zero_padded_24h() {
        let d = Utc.with_ymd_and_hms(2024, 3, 5, 7, 4, 59).unwrap();
        assert_eq!(sample(d).formatted_date(), "05.03.2024 07:04");

        let evening = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(sample(evening).formatted_date(), "31.12.2023 23:59");
    }

    #[test]
    fn scores_survive_encode_decode() {
        let scores: Scores = serde_json::from_str(
            r#"{"energy": 5, "math": 3.5, "tech": -2, "career": 1e3, "arts": 0}"#,
        )
        .unwrap();
        let text = encode_scores(&scores).unwrap();
        assert_eq!(decode_scores(&text).unwrap(), scores);
    }

    #[test]
    fn integer_scores_stay_integers() {
        let scores: Scores = serde_json::from_str(r#"{"energy": 5}"#).unwrap();
        let text = encode_scores(&scores).unwrap();
        assert_eq!(text, r#"{"energy":5}"#);
    }

    #[test]
    fn integers_beyond_64_bits_keep_their_digits() {
        let submitted = r#"{"x":12345678901234567890123,"y":-9223372036854775809}"#;
        let scores: Scores = serde_json::from_str(submitted).unwrap();
        let text = encode_scores(&scores).unwrap();
        assert_eq!(text, submitted);
        assert_eq!(decode_scores(&text).unwrap(), scores);
    }

    #[test]
    fn non_numeric_scores_are_rejected() {
        assert!(decode_scores(r#"{"energy": "high"}"#).is_err());
        assert!(decode_scores("not json").is_err());
    }

    #[test]
    fn model_decodes_its_own_scores() {
        let d = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let scores = sample(d).decoded_scores().unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["energy"].as_i64(), Some(5));
    }
}
