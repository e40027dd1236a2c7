use model::{parking_lot::ParkingLot, WithId};
use sqlx::{Executor, Postgres};
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

use super::convert_error;
use crate::{
    data_model::{parking_lot::ParkingLotRow, with_id, with_ids},
    repo::Result,
};

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<ParkingLot>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, capacity, available_spaces,
            type, address, phone
        FROM parking_lots
        ORDER BY id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|lots: Vec<ParkingLotRow>| Ok(with_ids(lots)))
}

pub async fn get<'c, E>(executor: E, id: Id<ParkingLot>) -> Result<WithId<ParkingLot>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, capacity, available_spaces,
            type, address, phone
        FROM parking_lots
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ParkingLotRow| with_id(row))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(executor: E, lot: ParkingLot) -> Result<WithId<ParkingLot>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO parking_lots(
            name,
            latitude,
            longitude,
            capacity,
            available_spaces,
            type,
            address,
            phone
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING
            id, name, latitude, longitude, capacity, available_spaces,
            type, address, phone;
        ",
    )
    .bind(&lot.name)
    .bind(lot.latitude)
    .bind(lot.longitude)
    .bind(lot.capacity)
    .bind(lot.available_spaces)
    .bind(&lot.lot_type)
    .bind(&lot.address)
    .bind(&lot.phone)
    .fetch_one(executor)
    .await
    .map(|row: ParkingLotRow| with_id(row))
    .map_err(convert_error)
}

pub async fn update<'c, E>(
    executor: E,
    lot: WithId<ParkingLot>,
) -> Result<WithId<ParkingLot>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE parking_lots
        SET name = $1,
            latitude = $2,
            longitude = $3,
            capacity = $4,
            available_spaces = $5,
            type = $6,
            address = $7,
            phone = $8
        WHERE id = $9
        RETURNING
            id, name, latitude, longitude, capacity, available_spaces,
            type, address, phone;
        ",
    )
    .bind(&lot.content.name)
    .bind(lot.content.latitude)
    .bind(lot.content.longitude)
    .bind(lot.content.capacity)
    .bind(lot.content.available_spaces)
    .bind(&lot.content.lot_type)
    .bind(&lot.content.address)
    .bind(&lot.content.phone)
    .bind(lot.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ParkingLotRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(executor: E, id: Id<ParkingLot>) -> Result<Id<ParkingLot>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("DELETE FROM parking_lots WHERE id = $1 RETURNING id;")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|id: i32| Id::new(id))
        .map_err(convert_error)
}

pub async fn get_within<'c, E>(
    executor: E,
    bounding_box: BoundingBox,
) -> Result<Vec<WithId<ParkingLot>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let [east, west] = bounding_box.longitude_ranges();
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, capacity, available_spaces,
            type, address, phone
        FROM parking_lots
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
    .let_owned(|lots: Vec<ParkingLotRow>| Ok(with_ids(lots)))
}
