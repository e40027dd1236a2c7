use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{
    validation::{Validate, ValidationError, Validator},
    ExampleData, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChargingStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Charger type, e.g. `"fast"` or `"slow"`.
    #[serde(rename = "type")]
    pub station_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl HasId for ChargingStation {
    type IdType = i32;
}

impl Resource for ChargingStation {
    const NAME: &'static str = "Charging station";

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Validate for ChargingStation {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .not_blank("name", &self.name)
            .coordinates(self.latitude, self.longitude)
            .finish()
    }
}

impl ExampleData for ChargingStation {
    fn example_data() -> Self {
        Self {
            name: "Gulou Charging Hub".to_owned(),
            latitude: 32.0623,
            longitude: 118.7784,
            station_type: Some("fast".to_owned()),
            address: Some("Zhongshan North Road 1, Gulou District, Nanjing".to_owned()),
            phone: Some("025-83123456".to_owned()),
        }
    }
}
