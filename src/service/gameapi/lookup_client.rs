use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ClientConfig,
    model::{
        lookup::{LookupOutcome, LookupRequest},
        summoner::LookupResult,
    },
    service::{
        fallback::fallback_result,
        gameapi::parsing::{
            lookup::{parse_lookup_response, LookupResponse},
            ParsingError,
        },
    },
};

pub const FOUND_MESSAGE: &str = "Summoner found!";
pub const FALLBACK_MESSAGE: &str = "Showing placeholder data, real lookup unavailable";

const RETRY_DELAYS_MS: [u64; 5] = [250, 500, 1000, 2000, 4000];

pub struct LookupClient {
    client: Client,
    config: ClientConfig,
}

impl LookupClient {
    pub fn new(config: ClientConfig) -> Result<Self, LookupClientInitError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Resolves every request to an outcome. Transport trouble is masked with placeholder data,
    /// refusals from the service are passed through as failures.
    #[instrument(skip_all, fields(riot_id = %request.riot_id(), region = %request.region))]
    pub async fn submit(&self, request: &LookupRequest) -> LookupOutcome {
        match self.fetch(request).await {
            Ok(result) => {
                info!(champions = result.top_champions.len(), "Summoner found");
                LookupOutcome::Success {
                    result,
                    used_fallback: false,
                    message: FOUND_MESSAGE.to_string(),
                }
            }
            Err(LookupError::Upstream { status, message }) => {
                info!(status, %message, "Lookup declined by service");
                LookupOutcome::Failure {
                    message,
                    used_fallback: false,
                }
            }
            Err(err) => {
                warn!(error = %err, "Lookup unavailable, using placeholder data");
                let result = fallback_result(&request.game_name, &mut rand::thread_rng());
                LookupOutcome::Success {
                    result,
                    used_fallback: true,
                    message: format!("{} ({})", FALLBACK_MESSAGE, err),
                }
            }
        }
    }

    pub async fn fetch(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        let mut attempts = 0;
        loop {
            match self.send(request).await {
                Err(err) if err.is_retryable() && attempts < self.config.max_retries => {
                    let delay = RETRY_DELAYS_MS[attempts.min(RETRY_DELAYS_MS.len() - 1)];
                    attempts += 1;
                    warn!(attempt = attempts, delay_ms = delay, error = %err, "Retrying lookup");
                    sleep(Duration::from_millis(delay)).await;
                }
                other => return other,
            }
        }
    }

    async fn send(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        debug!(endpoint = %self.config.endpoint, "Sending lookup request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Lookup response received");

        match parse_lookup_response(status, &body)? {
            LookupResponse::Found(result) => Ok(result),
            LookupResponse::Declined { status, message } => Err(LookupError::Upstream { status, message }),
        }
    }

    fn transport_error(&self, error: reqwest::Error) -> LookupError {
        if error.is_timeout() {
            LookupError::Timeout(self.config.timeout)
        } else {
            LookupError::Network(error)
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupClientInitError {
    #[error("Failed to create HTTP client: {0}")]
    HttpClientCreation(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("No response within {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Parsing(#[from] ParsingError),
    #[error("Service returned error {status}: {message}")]
    Upstream { status: u16, message: String },
}

impl LookupError {
    pub fn is_retryable(&self) -> bool {
        match self {
            LookupError::Network(_) | LookupError::Timeout(_) => true,
            LookupError::Parsing(ParsingError::NotJson { status, .. }) => is_retryable_status(*status),
            LookupError::Parsing(ParsingError::InvalidShape(_)) => false,
            LookupError::Upstream { status, .. } => is_retryable_status(*status),
        }
    }
}

fn is_retryable_status(status: u16) -> bool {
    // 429 and the gateway family
    matches!(status, 429 | 502 | 503 | 504)
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{
        model::{ids::ChampionId, region::Region},
        service::fallback::template_result,
    };

    fn request(name: &str) -> LookupRequest {
        LookupRequest {
            game_name: name.to_string(),
            tag_line: "NA1".to_string(),
            region: Region::NorthAmerica,
        }
    }

    fn client_for(server: &MockServer) -> LookupClient {
        LookupClient::new(ClientConfig::with_endpoint(&format!("{}/lookup", server.uri()))).unwrap()
    }

    fn closed_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/lookup", addr)
    }

    #[tokio::test]
    async fn posts_json_body_and_returns_parsed_result() {
        let server = MockServer::start().await;
        let expected = template_result();
        Mock::given(method("POST"))
            .and(path("/lookup"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "summonerName": "Doublelift",
                "tagLine": "NA1",
                "region": "na1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit(&request("Doublelift")).await;

        assert_eq!(
            outcome,
            LookupOutcome::Success {
                result: expected,
                used_fallback: false,
                message: FOUND_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn declined_request_is_surfaced_without_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "error": "summoner not found" })))
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit(&request("Nobody")).await;

        assert_eq!(
            outcome,
            LookupOutcome::Failure {
                message: "summoner not found".to_string(),
                used_fallback: false,
            }
        );
    }

    #[tokio::test]
    async fn non_json_gateway_page_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(504).set_body_string("<html>Gateway Timeout</html>"))
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit(&request("Doublelift")).await;

        assert!(outcome.used_fallback());
        assert!(outcome.message().starts_with(FALLBACK_MESSAGE));
        assert_eq!(outcome.result().unwrap().summoner.display_name, "Doublelift");
    }

    #[tokio::test]
    async fn wrong_shape_on_success_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit(&request("Doublelift")).await;
        assert!(outcome.is_success());
        assert!(outcome.used_fallback());
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back() {
        let client = LookupClient::new(ClientConfig::with_endpoint(&closed_endpoint())).unwrap();

        let outcome = client.submit(&request("Doublelift")).await;

        let LookupOutcome::Success {
            result, used_fallback, ..
        } = outcome
        else {
            panic!("expected fallback success");
        };
        assert!(used_fallback);
        assert_eq!(result.summoner.display_name, "Doublelift");
        assert_eq!(result.top_champions[0].champion_id, ChampionId(67));
    }

    #[tokio::test]
    async fn slow_endpoint_times_out_into_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(template_result())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config =
            ClientConfig::with_endpoint(&format!("{}/lookup", server.uri())).timeout(Duration::from_millis(200));
        let client = LookupClient::new(config).unwrap();

        let err = client.fetch(&request("Doublelift")).await.unwrap_err();
        assert!(matches!(err, LookupError::Timeout(_)));

        let outcome = client.submit(&request("Doublelift")).await;
        assert!(outcome.used_fallback());
    }

    #[tokio::test]
    async fn retries_rate_limit_then_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({ "error": "Rate limited" })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(template_result()))
            .mount(&server)
            .await;

        let config = ClientConfig::with_endpoint(&format!("{}/lookup", server.uri())).max_retries(2);
        let client = LookupClient::new(config).unwrap();

        let result = client.fetch(&request("Doublelift")).await.unwrap();
        assert_eq!(result, template_result());
    }

    #[tokio::test]
    async fn declined_request_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "error": "Summoner not found" })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::with_endpoint(&format!("{}/lookup", server.uri())).max_retries(3);
        let client = LookupClient::new(config).unwrap();

        let err = client.fetch(&request("Nobody")).await.unwrap_err();
        assert!(matches!(err, LookupError::Upstream { status: 404, .. }));
        assert_eq!(err.to_string(), "Service returned error 404: Summoner not found");
    }

    #[test]
    fn retryable_classification() {
        let rate_limited = LookupError::Upstream {
            status: 429,
            message: "slow down".into(),
        };
        let not_found = LookupError::Upstream {
            status: 404,
            message: "nope".into(),
        };
        assert!(rate_limited.is_retryable());
        assert!(!not_found.is_retryable());
        assert!(LookupError::Timeout(Duration::from_secs(1)).is_retryable());
    }
}
