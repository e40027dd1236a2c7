use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{
    validation::{Validate, ValidationError, Validator},
    ExampleData, Resource,
};

/// A parking lot, which is a candidate location for new charging stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParkingLot {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: Option<i32>,
    pub available_spaces: Option<i32>,
    #[serde(rename = "type")]
    pub lot_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl HasId for ParkingLot {
    type IdType = i32;
}

impl Resource for ParkingLot {
    const NAME: &'static str = "Parking lot";

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Validate for ParkingLot {
    fn validate(&self) -> Result<(), ValidationError> {
        let fits = match (self.capacity, self.available_spaces) {
            (Some(capacity), Some(available)) => available <= capacity,
            _ => true,
        };

        Validator::new()
            .not_blank("name", &self.name)
            .coordinates(self.latitude, self.longitude)
            .non_negative("capacity", self.capacity)
            .non_negative("available_spaces", self.available_spaces)
            .check(fits, "available_spaces", "must not exceed capacity")
            .finish()
    }
}

impl ExampleData for ParkingLot {
    fn example_data() -> Self {
        Self {
            name: "Zhongshan Road Parking".to_owned(),
            latitude: 32.058,
            longitude: 118.796,
            capacity: Some(100),
            available_spaces: Some(35),
            lot_type: Some("public".to_owned()),
            address: Some("Zhongshan Road 100, Xuanwu District, Nanjing".to_owned()),
            phone: Some("025-12345678".to_owned()),
        }
    }
}
