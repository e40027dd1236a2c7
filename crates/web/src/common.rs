use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        OriginalUri, Query, Request,
    },
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use axum_extra::extract::WithRejection;
use database::repo::DatabaseError;
use log::{debug, error};
use model::{ExampleData, Resource, ValidationError, Violation};
use schemars::{schema_for, schema_for_value, JsonSchema};
use serde::{Deserialize, Serialize};

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

// - Services returning commonly used responses -

#[derive(Debug, Deserialize)]
pub(crate) struct SchemaParams {
    #[serde(default)]
    example_data: bool,
}

pub(crate) async fn schema<T: ExampleData + JsonSchema + Serialize>(
    WithRejection(Query(params), _): WithRejection<Query<SchemaParams>, RouteErrorResponse>,
) -> impl IntoResponse {
    if params.example_data {
        Json(schema_for_value!(T::example_data()))
    } else {
        Json(schema_for!(T))
    }
}

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    RouteErrorResponse::not_found(req.method(), original_uri.path())
}

// - Commonly used responses -

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    pub http_method: Option<String>,

    pub requested_uri: Option<String>,

    pub message: Option<String>,

    pub detailed_information: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
            detailed_information: None,
            violations: vec![],
        }
    }

    pub fn not_found(method: &Method, uri: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_method(method)
            .with_uri(uri)
            .with_default_message()
    }

    /// Maps a storage error of a request on `T` records.
    pub fn from_database<T: Resource>(why: DatabaseError) -> Self {
        match why {
            DatabaseError::NotFound => {
                debug!("{} not found", T::NAME);
                Self::new(StatusCode::NOT_FOUND).with_message(format!("{} not found", T::NAME))
            }
            DatabaseError::Other(other) => {
                error!("database request on {} failed: {}", T::NAME, other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_message(format!("Database request on {} failed.", T::NAME))
                    .with_detailed_information(other.to_string())
            }
        }
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("Unknown error");
        self.with_message(message)
    }

    pub fn with_detailed_information(mut self, message: impl Into<String>) -> Self {
        self.detailed_information = Some(message.into());
        self
    }
}

impl From<ValidationError> for RouteErrorResponse {
    fn from(value: ValidationError) -> Self {
        Self {
            violations: value.violations,
            ..Self::new(StatusCode::BAD_REQUEST).with_message("The submitted record is invalid.")
        }
    }
}

impl From<JsonRejection> for RouteErrorResponse {
    fn from(value: JsonRejection) -> Self {
        Self::new(value.status())
            .with_message("The request body is not a valid record.")
            .with_detailed_information(value.body_text())
    }
}

impl From<PathRejection> for RouteErrorResponse {
    fn from(value: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST)
            .with_message("The id in the path is not valid.")
            .with_detailed_information(value.body_text())
    }
}

impl From<QueryRejection> for RouteErrorResponse {
    fn from(value: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST)
            .with_message("The query parameters are not valid.")
            .with_detailed_information(value.body_text())
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use model::site::Site;

    use super::*;

    #[test]
    fn not_found_names_the_record_kind() {
        let response = RouteErrorResponse::from_database::<Site>(DatabaseError::NotFound);
        assert_eq!(response.status_code, StatusCode::NOT_FOUND);
        assert_eq!(response.message.as_deref(), Some("Site not found"));
        assert_eq!(response.detailed_information, None);
    }

    #[test]
    fn storage_fault_carries_the_driver_message() {
        let why = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let response = RouteErrorResponse::from_database::<Site>(DatabaseError::other(why));
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.detailed_information.as_deref(),
            Some("connection refused")
        );
    }

    #[test]
    fn serializes_without_empty_fields() {
        let value = serde_json::to_value(
            RouteErrorResponse::new(StatusCode::NOT_FOUND).with_message("Site not found"),
        )
        .unwrap();
        assert_eq!(value, serde_json::json!({ "message": "Site not found" }));
    }

    #[test]
    fn validation_error_lists_violations() {
        let why = ValidationError {
            violations: vec![Violation {
                field: "latitude",
                message: "must be a number between -90 and 90".to_owned(),
            }],
        };
        let value = serde_json::to_value(RouteErrorResponse::from(why)).unwrap();
        assert_eq!(value["violations"][0]["field"], "latitude");
    }
}
