use model::{site::Site, WithId};
use sqlx::{Executor, Postgres};
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

use super::convert_error;
use crate::{
    data_model::{site::SiteRow, with_id, with_ids},
    repo::Result,
};

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Site>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, description, image_url
        FROM sites
        ORDER BY name, id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|sites: Vec<SiteRow>| Ok(with_ids(sites)))
}

pub async fn get<'c, E>(executor: E, id: Id<Site>) -> Result<WithId<Site>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, description, image_url
        FROM sites
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: SiteRow| with_id(row))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(executor: E, site: Site) -> Result<WithId<Site>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO sites(
            name,
            latitude,
            longitude,
            type,
            description,
            image_url
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, latitude, longitude, type, description, image_url;
        ",
    )
    .bind(&site.name)
    .bind(site.latitude)
    .bind(site.longitude)
    .bind(&site.site_type)
    .bind(&site.description)
    .bind(&site.image_url)
    .fetch_one(executor)
    .await
    .map(|row: SiteRow| with_id(row))
    .map_err(convert_error)
}

pub async fn update<'c, E>(executor: E, site: WithId<Site>) -> Result<WithId<Site>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE sites
        SET name = $1,
            latitude = $2,
            longitude = $3,
            type = $4,
            description = $5,
            image_url = $6
        WHERE id = $7
        RETURNING id, name, latitude, longitude, type, description, image_url;
        ",
    )
    .bind(&site.content.name)
    .bind(site.content.latitude)
    .bind(site.content.longitude)
    .bind(&site.content.site_type)
    .bind(&site.content.description)
    .bind(&site.content.image_url)
    .bind(site.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: SiteRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(executor: E, id: Id<Site>) -> Result<Id<Site>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("DELETE FROM sites WHERE id = $1 RETURNING id;")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|id: i32| Id::new(id))
        .map_err(convert_error)
}

pub async fn get_within<'c, E>(
    executor: E,
    bounding_box: BoundingBox,
) -> Result<Vec<WithId<Site>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let [east, west] = bounding_box.longitude_ranges();
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, type, description, image_url
        FROM sites
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
    .let_owned(|sites: Vec<SiteRow>| Ok(with_ids(sites)))
}
