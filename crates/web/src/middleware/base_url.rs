use axum::{extract, http::HeaderMap, middleware::Next, response::IntoResponse};
use std::sync::Arc;

/// The externally visible origin of the service, taking reverse proxy
/// headers into account. Used to build absolute `Location` headers.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseUrl {
    proto: String,
    host: String,
    prefix: String,
}

impl BaseUrl {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        let proto = header("x-forwarded-proto").unwrap_or("http").to_string();

        let host = header("x-forwarded-host")
            .or_else(|| header("host"))
            .unwrap_or("localhost")
            .to_string();

        let prefix = header("x-forwarded-prefix")
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string();

        BaseUrl {
            proto,
            host,
            prefix,
        }
    }

    pub fn full_url<S: Into<String>>(&self, path: S) -> String {
        format!(
            "{}://{}{}{}",
            self.proto,
            self.host,
            self.prefix,
            path.into()
        )
    }
}

pub async fn base_url_middleware(req: extract::Request, next: Next) -> impl IntoResponse {
    let base_url = BaseUrl::from_headers(req.headers());

    let mut req = req;
    req.extensions_mut().insert(Arc::new(base_url));

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("example.com:3000"));

        let base_url = BaseUrl::from_headers(&headers);
        assert_eq!(
            base_url.full_url("/api/sites/1"),
            "http://example.com:3000/api/sites/1"
        );
    }

    #[test]
    fn prefers_forwarded_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("backend:3000"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        headers.insert("x-forwarded-host", HeaderValue::from_static("siting.example.com"));
        headers.insert("x-forwarded-prefix", HeaderValue::from_static("/backend/"));

        let base_url = BaseUrl::from_headers(&headers);
        assert_eq!(
            base_url.full_url("/api/parking-lots/7"),
            "https://siting.example.com/backend/api/parking-lots/7"
        );
    }

    #[test]
    fn falls_back_to_localhost() {
        let base_url = BaseUrl::from_headers(&HeaderMap::new());
        assert_eq!(base_url.full_url("/api"), "http://localhost/api");
    }
}
