use model::parking_lot::ParkingLot;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: `parking_lots`
#[derive(Debug, Clone, FromRow)]
pub struct ParkingLotRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: Option<i32>,
    pub available_spaces: Option<i32>,
    #[sqlx(rename = "type")]
    pub lot_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl DatabaseRow for ParkingLotRow {
    type Model = ParkingLot;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        ParkingLot {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            capacity: self.capacity,
            available_spaces: self.available_spaces,
            lot_type: self.lot_type,
            address: self.address,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use model::ExampleData;

    use super::*;
    use crate::data_model::with_id;

    #[test]
    fn row_keeps_every_column() {
        let lot = ParkingLot::example_data();
        let row = ParkingLotRow {
            id: 9,
            name: lot.name.clone(),
            latitude: lot.latitude,
            longitude: lot.longitude,
            capacity: lot.capacity,
            available_spaces: lot.available_spaces,
            lot_type: lot.lot_type.clone(),
            address: lot.address.clone(),
            phone: lot.phone.clone(),
        };

        let record = with_id(row);
        assert_eq!(record.id.raw(), 9);
        assert_eq!(record.content, lot);
    }
}
