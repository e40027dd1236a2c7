use chrono::{DateTime, Utc};
use model::recommendation::Recommendation;
use serde_json::Value;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: `recommendations`
#[derive(Debug, Clone, FromRow)]
pub struct RecommendationRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: Option<f64>,
    /// Stored as `JSONB`.
    pub factors: Option<Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DatabaseRow for RecommendationRow {
    type Model = Recommendation;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Recommendation {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            score: self.score,
            factors: self.factors,
            notes: self.notes,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
