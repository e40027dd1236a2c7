use model::charging_station::ChargingStation;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: `charging_stations`
#[derive(Debug, Clone, FromRow)]
pub struct ChargingStationRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sqlx(rename = "type")]
    pub station_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl DatabaseRow for ChargingStationRow {
    type Model = ChargingStation;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        ChargingStation {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            station_type: self.station_type,
            address: self.address,
            phone: self.phone,
        }
    }
}
