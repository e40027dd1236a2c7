//! CRUD handlers shared by all record kinds.
//!
//! Each handler performs exactly one storage call. Bodies are validated
//! before they reach the database; storage errors are mapped through
//! [`RouteErrorResponse::from_database`].

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, on},
    Extension, Json, Router,
};
use axum_extra::extract::WithRejection;
use database::repo::{Database, Repo};
use log::info;
use model::{validation::Validator, WithDistance, WithId};
use serde::{Deserialize, Serialize};
use utility::id::Id;

use super::{resource, Endpoint};
use crate::{
    common::{route_not_found, schema, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    middleware::base_url::{base_url_middleware, BaseUrl},
    WebState,
};

const DEFAULT_NEARBY_RADIUS_KM: f64 = 1.0;

type IdPath = WithRejection<Path<i32>, RouteErrorResponse>;
type Body<T> = WithRejection<Json<T>, RouteErrorResponse>;

pub(crate) fn routes<T: Endpoint>(state: WebState) -> Router
where
    dyn Database: Repo<T>,
{
    Router::new()
        .route("/schema", get(schema::<T>))
        .route("/nearby", get(nearby::<T>))
        .route(
            "/:id",
            get(get_one::<T>).put(update::<T>).delete(delete::<T>),
        )
        .route("/", get(get_all::<T>).post(create::<T>))
        .layer(axum::middleware::from_fn(base_url_middleware))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_all<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Arc<dyn Database>>,
) -> RouteResult<Json<Vec<WithId<T>>>>
where
    dyn Database: Repo<T>,
{
    Repo::<T>::get_all(&*database)
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_one<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    WithRejection(Path(id), _): IdPath,
    State(database): State<Arc<dyn Database>>,
) -> RouteResult<Json<WithId<T>>>
where
    dyn Database: Repo<T>,
{
    Repo::<T>::get(&*database, Id::new(id))
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Arc<dyn Database>>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    WithRejection(Json(element), _): Body<T>,
) -> RouteResult<Response>
where
    dyn Database: Repo<T>,
{
    element.validate().map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    let created = Repo::<T>::insert(&*database, element)
        .await
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })?;
    info!("created {} {}", T::NAME, created.id);

    let location = base_url.full_url(resource!("{}/{}", T::PATH, created.id));
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

async fn update<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    WithRejection(Path(id), _): IdPath,
    State(database): State<Arc<dyn Database>>,
    WithRejection(Json(element), _): Body<T>,
) -> RouteResult<Json<WithId<T>>>
where
    dyn Database: Repo<T>,
{
    element.validate().map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::PUT)
            .with_uri(original_uri.path())
    })?;

    Repo::<T>::update(&*database, WithId::new(Id::new(id), element))
        .await
        .map(|updated| {
            info!("updated {} {}", T::NAME, updated.id);
            Json(updated)
        })
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

#[derive(Debug, Serialize)]
struct DeletedDto {
    message: String,
    id: i32,
}

async fn delete<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    WithRejection(Path(id), _): IdPath,
    State(database): State<Arc<dyn Database>>,
) -> RouteResult<Json<DeletedDto>>
where
    dyn Database: Repo<T>,
{
    Repo::<T>::delete(&*database, Id::new(id))
        .await
        .map(|deleted| {
            info!("deleted {} {}", T::NAME, deleted);
            Json(DeletedDto {
                message: format!("{} deleted successfully", T::NAME),
                id: deleted.into_raw(),
            })
        })
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}

#[derive(Debug, Deserialize)]
struct NearbyQuery {
    latitude: f64,
    longitude: f64,
    radius: Option<f64>,
}

async fn nearby<T: Endpoint>(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Arc<dyn Database>>,
    WithRejection(Query(params), _): WithRejection<Query<NearbyQuery>, RouteErrorResponse>,
) -> RouteResult<Json<Vec<WithDistance<WithId<T>>>>>
where
    dyn Database: Repo<T>,
{
    let radius = params.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    Validator::new()
        .coordinates(params.latitude, params.longitude)
        .check(
            radius.is_finite() && radius > 0.0,
            "radius",
            "must be a positive number of kilometers",
        )
        .finish()
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })?;

    Repo::<T>::find_nearby(&*database, params.latitude, params.longitude, radius)
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from_database::<T>(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}
