use std::{env, str::FromStr};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use model::{
    charging_station::ChargingStation, parking_lot::ParkingLot,
    recommendation::Recommendation, site::Site, WithId,
};
use queries::convert_error;
use repo::{Database, Repo, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;
use utility::{geo::BoundingBox, id::Id};

pub mod data_model;
pub mod queries;
pub mod repo;
pub mod seed;

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the connection info through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            username: required("DATABASE_USER")?,
            password: required("DATABASE_PASSWORD")?,
            hostname: required("DATABASE_HOST")?,
            port: parse_or(&lookup, "DATABASE_PORT", DEFAULT_PORT)?,
            database: required("DATABASE_NAME")?,
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.hostname)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Parses the variable `name` if it is set, `default` otherwise.
pub fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
) -> std::result::Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// The process wide connection pool. Cloning is cheap, all clones share the
/// same pool.
#[derive(Clone)]
pub struct PgDatabase {
    connection: sqlx::PgPool,
}

impl PgDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> std::result::Result<Self, sqlx::Error> {
        info!(
            "connecting to database {} at {}:{}",
            database_connection_info.database,
            database_connection_info.hostname,
            database_connection_info.port
        );
        let pool = PgPoolOptions::new()
            .max_connections(database_connection_info.max_connections)
            .connect_with(database_connection_info.connect_options())
            .await?;

        Ok(Self { connection: pool })
    }

    /// Creates or upgrades the schema. Only run by the bootstrap binary, the
    /// server expects the schema to exist.
    pub async fn migrate(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.connection).await
    }

    /// Waits for all connections to be returned and closes them.
    pub async fn close(&self) {
        self.connection.close().await;
        info!("database connections closed");
    }
}

macro_rules! pg_repo {
    ($model:ty, $queries:ident) => {
        #[async_trait]
        impl Repo<$model> for PgDatabase {
            async fn get_all(&self) -> Result<Vec<WithId<$model>>> {
                queries::$queries::get_all(&self.connection).await
            }

            async fn get(&self, id: Id<$model>) -> Result<WithId<$model>> {
                queries::$queries::get(&self.connection, id).await
            }

            async fn insert(&self, element: $model) -> Result<WithId<$model>> {
                queries::$queries::insert(&self.connection, element).await
            }

            async fn update(&self, element: WithId<$model>) -> Result<WithId<$model>> {
                queries::$queries::update(&self.connection, element).await
            }

            async fn delete(&self, id: Id<$model>) -> Result<Id<$model>> {
                queries::$queries::delete(&self.connection, id).await
            }

            async fn get_within(
                &self,
                bounding_box: BoundingBox,
            ) -> Result<Vec<WithId<$model>>> {
                queries::$queries::get_within(&self.connection, bounding_box).await
            }
        }
    };
}

pg_repo!(Site, site);
pg_repo!(ChargingStation, charging_station);
pg_repo!(ParkingLot, parking_lot);
pg_repo!(Recommendation, recommendation);

#[async_trait]
impl Database for PgDatabase {
    async fn now(&self) -> Result<DateTime<Utc>> {
        sqlx::query_scalar("SELECT NOW();")
            .fetch_one(&self.connection)
            .await
            .map_err(convert_error)
    }
}
