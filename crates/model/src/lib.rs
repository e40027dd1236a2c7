use std::fmt::Debug;

use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utility::{
    geo,
    id::{HasId, Id},
};

pub mod charging_station;
pub mod parking_lot;
pub mod recommendation;
pub mod site;
pub mod validation;

pub use validation::{Validate, ValidationError, Violation};

pub trait ExampleData {
    fn example_data() -> Self;
}

/// A record kind that is stored in its own table and exposed as a REST
/// resource. All resources are addressed by a serial integer id and carry a
/// position.
pub trait Resource:
    HasId<IdType = i32>
    + Serialize
    + DeserializeOwned
    + JsonSchema
    + ExampleData
    + Validate
    + Debug
    + Clone
    + Send
    + Sync
    + 'static
{
    /// Human readable name of the record kind, e.g. `"Charging station"`.
    const NAME: &'static str;

    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    fn distance_to(&self, latitude: f64, longitude: f64) -> f64 {
        geo::haversine_distance(latitude, longitude, self.latitude(), self.longitude())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WithDistance<T> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            content,
        }
    }
}

impl<R: Resource> WithDistance<WithId<R>> {
    /// Attaches the distance to the given point and keeps only the records
    /// within `radius_km`, closest first.
    pub fn within(
        records: Vec<WithId<R>>,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Vec<Self> {
        let mut result = records
            .into_iter()
            .map(|record| {
                let distance = record.content.distance_to(latitude, longitude);
                WithDistance::new(distance, record)
            })
            .filter(|record| record.distance_km <= radius_km)
            .collect::<Vec<_>>();
        result.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + JsonSchema + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + JsonSchema + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}
