use model::{recommendation::Recommendation, WithId};
use sqlx::{Executor, Postgres};
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

use super::convert_error;
use crate::{
    data_model::{recommendation::RecommendationRow, with_id, with_ids},
    repo::Result,
};

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Recommendation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, score, factors, notes,
            created_at, updated_at
        FROM recommendations
        ORDER BY created_at DESC, id DESC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|recommendations: Vec<RecommendationRow>| Ok(with_ids(recommendations)))
}

pub async fn get<'c, E>(
    executor: E,
    id: Id<Recommendation>,
) -> Result<WithId<Recommendation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, score, factors, notes,
            created_at, updated_at
        FROM recommendations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: RecommendationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn insert<'c, E>(
    executor: E,
    recommendation: Recommendation,
) -> Result<WithId<Recommendation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO recommendations(
            name,
            latitude,
            longitude,
            score,
            factors,
            notes
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING
            id, name, latitude, longitude, score, factors, notes,
            created_at, updated_at;
        ",
    )
    .bind(&recommendation.name)
    .bind(recommendation.latitude)
    .bind(recommendation.longitude)
    .bind(recommendation.score)
    .bind(&recommendation.factors)
    .bind(&recommendation.notes)
    .fetch_one(executor)
    .await
    .map(|row: RecommendationRow| with_id(row))
    .map_err(convert_error)
}

/// Overwrites the client supplied columns and refreshes `updated_at`.
/// `created_at` is never touched.
pub async fn update<'c, E>(
    executor: E,
    recommendation: WithId<Recommendation>,
) -> Result<WithId<Recommendation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        UPDATE recommendations
        SET name = $1,
            latitude = $2,
            longitude = $3,
            score = $4,
            factors = $5,
            notes = $6,
            updated_at = NOW()
        WHERE id = $7
        RETURNING
            id, name, latitude, longitude, score, factors, notes,
            created_at, updated_at;
        ",
    )
    .bind(&recommendation.content.name)
    .bind(recommendation.content.latitude)
    .bind(recommendation.content.longitude)
    .bind(recommendation.content.score)
    .bind(&recommendation.content.factors)
    .bind(&recommendation.content.notes)
    .bind(recommendation.id.raw())
    .fetch_one(executor)
    .await
    .map(|row: RecommendationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn delete<'c, E>(
    executor: E,
    id: Id<Recommendation>,
) -> Result<Id<Recommendation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("DELETE FROM recommendations WHERE id = $1 RETURNING id;")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|id: i32| Id::new(id))
        .map_err(convert_error)
}

pub async fn get_within<'c, E>(
    executor: E,
    bounding_box: BoundingBox,
) -> Result<Vec<WithId<Recommendation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let [east, west] = bounding_box.longitude_ranges();
    sqlx::query_as(
        "
        SELECT
            id, name, latitude, longitude, score, factors, notes,
            created_at, updated_at
        FROM recommendations
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
    .let_owned(|recommendations: Vec<RecommendationRow>| Ok(with_ids(recommendations)))
}
