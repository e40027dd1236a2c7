use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{
    validation::{Validate, ValidationError, Validator},
    ExampleData, Resource,
};

/// A point of interest which is considered as a location for new facilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Site {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub site_type: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl HasId for Site {
    type IdType = i32;
}

impl Resource for Site {
    const NAME: &'static str = "Site";

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Validate for Site {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .not_blank("name", &self.name)
            .coordinates(self.latitude, self.longitude)
            .finish()
    }
}

impl ExampleData for Site {
    fn example_data() -> Self {
        Self {
            name: "Xinjiekou Square".to_owned(),
            latitude: 32.0415,
            longitude: 118.7781,
            site_type: Some("commercial".to_owned()),
            description: Some("Shopping district with high daytime traffic".to_owned()),
            image_url: None,
        }
    }
}
