#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use database::repo::{Database, DatabaseError, Repo, Result};
use http_body_util::BodyExt;
use model::{
    charging_station::ChargingStation, parking_lot::ParkingLot,
    recommendation::Recommendation, site::Site, Resource, WithId,
};
use serde_json::Value;
use tower::ServiceExt;
use utility::{geo::BoundingBox, id::Id};
use web::{router, WebState};

/// Per record kind behaviour that the SQL statements implement in Postgres.
pub trait Stored: Resource {
    fn order(records: &mut [WithId<Self>]) {
        records.sort_by_key(|record| record.id);
    }

    fn stamp(&mut self, _previous: Option<&Self>) {}
}

impl Stored for Site {
    fn order(records: &mut [WithId<Self>]) {
        records.sort_by(|a, b| a.content.name.cmp(&b.content.name).then(a.id.cmp(&b.id)));
    }
}

impl Stored for ChargingStation {}

impl Stored for ParkingLot {}

impl Stored for Recommendation {
    fn order(records: &mut [WithId<Self>]) {
        records.sort_by(|a, b| {
            b.content
                .created_at
                .cmp(&a.content.created_at)
                .then(b.id.cmp(&a.id))
        });
    }

    fn stamp(&mut self, previous: Option<&Self>) {
        let now = Utc::now();
        self.created_at = previous.and_then(|previous| previous.created_at).or(Some(now));
        self.updated_at = Some(now);
    }
}

struct TableState<T> {
    next_id: i32,
    records: BTreeMap<i32, T>,
}

pub struct Table<T> {
    state: Mutex<TableState<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(TableState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Stored> Table<T> {
    fn all(&self) -> Vec<WithId<T>> {
        let state = self.state.lock().unwrap();
        let mut records = state
            .records
            .iter()
            .map(|(id, record)| WithId::new(Id::new(*id), record.clone()))
            .collect::<Vec<_>>();
        T::order(&mut records);
        records
    }

    fn get(&self, id: Id<T>) -> Result<WithId<T>> {
        let state = self.state.lock().unwrap();
        state
            .records
            .get(&id.raw())
            .map(|record| WithId::new(id, record.clone()))
            .ok_or(DatabaseError::NotFound)
    }

    fn insert(&self, mut element: T) -> Result<WithId<T>> {
        let mut state = self.state.lock().unwrap();
        element.stamp(None);
        let id = state.next_id;
        state.next_id += 1;
        state.records.insert(id, element.clone());
        Ok(WithId::new(Id::new(id), element))
    }

    fn update(&self, element: WithId<T>) -> Result<WithId<T>> {
        let WithId { id, mut content } = element;
        let mut state = self.state.lock().unwrap();
        let previous = state
            .records
            .get(&id.raw())
            .ok_or(DatabaseError::NotFound)?;
        content.stamp(Some(previous));
        state.records.insert(id.raw(), content.clone());
        Ok(WithId::new(id, content))
    }

    fn delete(&self, id: Id<T>) -> Result<Id<T>> {
        let mut state = self.state.lock().unwrap();
        state
            .records
            .remove(&id.raw())
            .map(|_| id)
            .ok_or(DatabaseError::NotFound)
    }

    fn within(&self, bounding_box: BoundingBox) -> Vec<WithId<T>> {
        self.all()
            .into_iter()
            .filter(|record| {
                bounding_box.contains(record.content.latitude(), record.content.longitude())
            })
            .collect()
    }
}

/// A `Database` keeping all records in memory. With `failing` set every call
/// fails like a lost connection would.
#[derive(Default)]
pub struct MemoryDatabase {
    pub sites: Table<Site>,
    pub charging_stations: Table<ChargingStation>,
    pub parking_lots: Table<ParkingLot>,
    pub recommendations: Table<Recommendation>,
    pub failing: bool,
}

impl MemoryDatabase {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(DatabaseError::other(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        } else {
            Ok(())
        }
    }
}

macro_rules! memory_repo {
    ($model:ty, $table:ident) => {
        #[async_trait]
        impl Repo<$model> for MemoryDatabase {
            async fn get_all(&self) -> Result<Vec<WithId<$model>>> {
                self.check()?;
                Ok(self.$table.all())
            }

            async fn get(&self, id: Id<$model>) -> Result<WithId<$model>> {
                self.check()?;
                self.$table.get(id)
            }

            async fn insert(&self, element: $model) -> Result<WithId<$model>> {
                self.check()?;
                self.$table.insert(element)
            }

            async fn update(&self, element: WithId<$model>) -> Result<WithId<$model>> {
                self.check()?;
                self.$table.update(element)
            }

            async fn delete(&self, id: Id<$model>) -> Result<Id<$model>> {
                self.check()?;
                self.$table.delete(id)
            }

            async fn get_within(
                &self,
                bounding_box: BoundingBox,
            ) -> Result<Vec<WithId<$model>>> {
                self.check()?;
                Ok(self.$table.within(bounding_box))
            }
        }
    };
}

memory_repo!(Site, sites);
memory_repo!(ChargingStation, charging_stations);
memory_repo!(ParkingLot, parking_lots);
memory_repo!(Recommendation, recommendations);

#[async_trait]
impl Database for MemoryDatabase {
    async fn now(&self) -> Result<DateTime<Utc>> {
        self.check()?;
        Ok(Utc::now())
    }
}

// - Driving the router -

pub fn app(database: Arc<MemoryDatabase>) -> Router {
    router(WebState { database })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::HOST, "localhost:3000")
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    with_raw_json(method, uri, body.to_string())
}

pub fn with_raw_json(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
