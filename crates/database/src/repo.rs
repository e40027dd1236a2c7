use std::{error, result};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use model::{
    charging_station::ChargingStation, parking_lot::ParkingLot,
    recommendation::Recommendation, site::Site, Resource, WithDistance, WithId,
};
use thiserror::Error;
use utility::{geo::BoundingBox, id::Id};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync>),
}

impl DatabaseError {
    pub fn other<E: error::Error + Send + Sync + 'static>(why: E) -> Self {
        Self::Other(Box::new(why))
    }
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Storage of a single record kind.
///
/// Every method maps to exactly one SQL statement, so each of them is atomic
/// on its own. Nothing is atomic across calls.
#[async_trait]
pub trait Repo<T: Resource>: Send + Sync {
    /// All records, in the fixed order of the record kind.
    async fn get_all(&self) -> Result<Vec<WithId<T>>>;

    async fn get(&self, id: Id<T>) -> Result<WithId<T>>;

    /// Inserts a new record and returns it with its generated id.
    async fn insert(&self, element: T) -> Result<WithId<T>>;

    /// Overwrites every column of an existing record.
    /// Fails with `DatabaseError::NotFound` if the id does not exist.
    async fn update(&self, element: WithId<T>) -> Result<WithId<T>>;

    /// Fails with `DatabaseError::NotFound` if the id does not exist.
    async fn delete(&self, id: Id<T>) -> Result<Id<T>>;

    /// All records positioned inside the box. May be ordered arbitrarily.
    async fn get_within(&self, bounding_box: BoundingBox) -> Result<Vec<WithId<T>>>;

    /// Records within `radius_km` of the point, closest first.
    async fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<WithDistance<WithId<T>>>> {
        let bounding_box = BoundingBox::around(latitude, longitude, radius_km);
        let candidates = Repo::<T>::get_within(self, bounding_box).await?;
        Ok(WithDistance::within(candidates, latitude, longitude, radius_km))
    }
}

#[async_trait]
pub trait Database:
    Repo<Site> + Repo<ChargingStation> + Repo<ParkingLot> + Repo<Recommendation>
{
    /// Current time as seen by the database. Used as a connectivity check.
    async fn now(&self) -> Result<DateTime<Utc>>;
}
