use model::{charging_station::ChargingStation, WithId};
use sqlx::{Executor, Postgres};
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

use super::convert_error;
use crate::{
    data_model::{charging_station::ChargingStationRow, with_id, with_ids},
    repo::Result,
};

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<ChargingStation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, address, phone
        FROM charging_stations
        ORDER BY id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|stations: Vec<ChargingStationRow>| Ok(with_ids(stations)))
}

pub async fn get<'c, E>(
    executor: E,
    id: Id<ChargingStation>,
) -> Result<WithId<ChargingStation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, address, phone
        FROM charging_stations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ChargingStationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(
    executor: E,
    station: ChargingStation,
) -> Result<WithId<ChargingStation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO charging_stations(
            name,
            latitude,
            longitude,
            type,
            address,
            phone
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, latitude, longitude, type, address, phone;
        ",
    )
    .bind(&station.name)
    .bind(station.latitude)
    .bind(station.longitude)
    .bind(&station.station_type)
    .bind(&station.address)
    .bind(&station.phone)
    .fetch_one(executor)
    .await
    .map(|row: ChargingStationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn update<'c, E>(
    executor: E,
    station: WithId<ChargingStation>,
) -> Result<WithId<ChargingStation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE charging_stations
        SET name = $1,
            latitude = $2,
            longitude = $3,
            type = $4,
            address = $5,
            phone = $6
        WHERE id = $7
        RETURNING id, name, latitude, longitude, type, address, phone;
        ",
    )
    .bind(&station.content.name)
    .bind(station.content.latitude)
    .bind(station.content.longitude)
    .bind(&station.content.station_type)
    .bind(&station.content.address)
    .bind(&station.content.phone)
    .bind(station.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ChargingStationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(
    executor: E,
    id: Id<ChargingStation>,
) -> Result<Id<ChargingStation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("DELETE FROM charging_stations WHERE id = $1 RETURNING id;")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|id: i32| Id::new(id))
        .map_err(convert_error)
}

pub async fn get_within<'c, E>(
    executor: E,
    bounding_box: BoundingBox,
) -> Result<Vec<WithId<ChargingStation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let [east, west] = bounding_box.longitude_ranges();
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, address, phone
        FROM charging_stations
        WHERE latitude BETWEEN $1 AND $2
            AND (longitude BETWEEN $3 AND $4 OR longitude BETWEEN $5 AND $6);
        ",
    )
    .bind(bounding_box.min_latitude)
    .bind(bounding_box.max_latitude)
    .bind(east.0)
    .bind(east.1)
    .bind(west.0)
    .bind(west.1)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|stations: Vec<ChargingStationRow>| Ok(with_ids(stations)))
}
