use model::site::Site;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: `sites`
#[derive(Debug, Clone, FromRow)]
pub struct SiteRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sqlx(rename = "type")]
    pub site_type: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl DatabaseRow for SiteRow {
    type Model = Site;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Site {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            site_type: self.site_type,
            description: self.description,
            image_url: self.image_url,
        }
    }
}
