use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utility::id::HasId;

use crate::{
    validation::{Validate, ValidationError, Validator},
    ExampleData, Resource,
};

/// A scored location authored by a client. The score and the factors are
/// stored as they are submitted, nothing is computed server side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: Option<f64>,
    /// Free form description of what contributed to the score.
    pub factors: Option<Value>,
    pub notes: Option<String>,

    /// Set by the database.
    #[serde(default, skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Set by the database, refreshed on every update.
    #[serde(default, skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HasId for Recommendation {
    type IdType = i32;
}

impl Resource for Recommendation {
    const NAME: &'static str = "Recommendation";

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Validate for Recommendation {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .not_blank("name", &self.name)
            .coordinates(self.latitude, self.longitude)
            .finite("score", self.score)
            .finish()
    }
}

impl ExampleData for Recommendation {
    fn example_data() -> Self {
        Self {
            name: "Xianlin Avenue".to_owned(),
            latitude: 32.070,
            longitude: 118.802,
            score: Some(87.5),
            factors: Some(json!({
                "population": 3275,
                "existing_stations_within_1km": 0,
                "parking_capacity": 120
            })),
            notes: Some("Uncovered residential area next to a large parking lot".to_owned()),
            created_at: None,
            updated_at: None,
        }
    }
}
