//! HTTP backend
//!
//! Talks to the dashboard's REST API. Every endpoint responds with a
//! `{ "data": <payload> }` envelope; any non-2xx status is a failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{Backend, Endpoint, ServiceError};
use crate::config::ApiConfig;

/// Backend issuing GET requests against the configured base URL
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

/// Response envelope wrapping every endpoint payload
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Value,
}

impl HttpBackend {
    /// Create an HTTP backend from the API configuration
    ///
    /// No request timeout is configured; an unresponsive backend leaves the
    /// caller waiting.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Full URL for an endpoint, with the user id substituted into the
    /// path template
    fn url(&self, endpoint: Endpoint, user_id: u32) -> String {
        let path = endpoint
            .template(&self.config.endpoints)
            .replace(":id", &user_id.to_string());
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch(&self, endpoint: Endpoint, user_id: u32) -> Result<Value, ServiceError> {
        let url = self.url(endpoint, user_id);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout
            } else if e.is_connect() {
                ServiceError::Unavailable
            } else {
                ServiceError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: Envelope = response.json().await.map_err(ServiceError::Request)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::UserService;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> HttpBackend {
        HttpBackend::new(ApiConfig {
            base_url: server.uri(),
            use_fixtures: false,
            endpoints: Default::default(),
        })
    }

    async fn mount_profile(server: &MockServer, id: u32) {
        Mock::given(method("GET"))
            .and(path(format!("/user/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": id,
                    "userInfos": {"firstName": "Karl", "lastName": "Dovineau", "age": 31},
                    "todayScore": 0.12,
                    "keyData": {
                        "calorieCount": 1930,
                        "proteinCount": 155,
                        "carbohydrateCount": 290,
                        "lipidCount": 50
                    }
                }
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/user/{id}/activity")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "sessions": [
                        {"day": "1", "kilogram": 70, "calories": 240},
                        {"day": "2", "kilogram": 69, "calories": 220}
                    ]
                }
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/user/{id}/average-sessions")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "sessions": [
                        {"day": 1, "sessionLength": 30},
                        {"day": 2, "sessionLength": 45}
                    ]
                }
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/user/{id}/performance")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "kind": {"1": "cardio", "2": "energy"},
                    "data": [
                        {"value": 80, "kind": 1},
                        {"value": 120, "kind": 2}
                    ]
                }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_unwraps_envelope() {
        let server = MockServer::start().await;
        mount_profile(&server, 12).await;

        let backend = backend_for(&server);
        let value = backend.fetch(Endpoint::User, 12).await.unwrap();

        assert_eq!(value["id"], 12);
        assert_eq!(value["userInfos"]["firstName"], "Karl");
    }

    #[tokio::test]
    async fn test_full_profile_over_http() {
        let server = MockServer::start().await;
        mount_profile(&server, 12).await;

        let service = UserService::new(Arc::new(backend_for(&server)));
        let user = service.fetch_user_profile(12).await.unwrap();

        assert_eq!(user.full_name(), "Karl Dovineau");
        assert_eq!(user.score().percent(), 12.0);
        assert_eq!(user.activity_chart_data().len(), 2);
        assert_eq!(user.performance_chart_data()[0].label, "cardio");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend.fetch(Endpoint::User, 42).await.unwrap_err();
        assert!(matches!(err, ServiceError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_user_exists_swallows_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/42"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = UserService::new(Arc::new(backend_for(&server)));
        assert!(!service.user_exists(42).await);
    }

    #[tokio::test]
    async fn test_id_substitution_in_templates() {
        let server = MockServer::start().await;
        let backend = backend_for(&server);

        assert_eq!(
            backend.url(Endpoint::AverageSessions, 18),
            format!("{}/user/18/average-sessions", server.uri())
        );
    }
}
