//! Sample records for a fresh installation.
//!
//! Seeding is an explicit bootstrap step (`init-db --seed`). Request handlers
//! never fall back to sample data.

use log::info;
use model::{
    charging_station::ChargingStation, parking_lot::ParkingLot,
    recommendation::Recommendation, site::Site, ExampleData, Resource,
};

use crate::repo::{Database, Repo, Result};

/// Number of records inserted per resource.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub sites: usize,
    pub charging_stations: usize,
    pub parking_lots: usize,
    pub recommendations: usize,
}

/// Inserts the example record of every resource whose table is empty.
/// Tables that already contain data are left untouched.
pub async fn seed_examples<D>(database: &D) -> Result<SeedReport>
where
    D: Database + ?Sized,
{
    Ok(SeedReport {
        sites: seed_if_empty::<Site, _>(database).await?,
        charging_stations: seed_if_empty::<ChargingStation, _>(database).await?,
        parking_lots: seed_if_empty::<ParkingLot, _>(database).await?,
        recommendations: seed_if_empty::<Recommendation, _>(database).await?,
    })
}

async fn seed_if_empty<T, D>(database: &D) -> Result<usize>
where
    T: Resource,
    D: Repo<T> + ?Sized,
{
    if !database.get_all().await?.is_empty() {
        info!("{} table already contains data, not seeding", T::NAME);
        return Ok(0);
    }

    let inserted = database.insert(T::example_data()).await?;
    info!("seeded {} with id {}", T::NAME, inserted.id);
    Ok(1)
}
