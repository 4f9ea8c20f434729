use std::{error::Error, fmt, time::Duration};

use log::{debug, info};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::Serialize;

use super::{
    helpers::{decode_envelope, server_message_from_body},
    models::{
        api_model::{ApiOutcome, Credentials, ScheduleRequest},
        Config,
    },
};

/// Anything that kept a request from producing a readable envelope.
#[derive(Debug)]
pub enum RequestError {
    /// Connection problems and timeouts.
    Network(reqwest::Error),
    /// The server answered with a non-success status.
    Status {
        status: StatusCode,
        server_message: Option<String>,
    },
    /// The body was not a `{success, ...}` envelope.
    Malformed(serde_json::Error),
}

impl RequestError {
    /// Reason reported by the server itself, if the failed response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(err) => write!(f, "request failed: {}", err),
            RequestError::Status {
                status,
                server_message,
            } => match server_message {
                Some(message) => write!(f, "server answered {}: {}", status, message),
                None => write!(f, "server answered {}", status),
            },
            RequestError::Malformed(err) => write!(f, "malformed response: {}", err),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RequestError::Network(err) => Some(err),
            RequestError::Status { .. } => None,
            RequestError::Malformed(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Network(err)
    }
}

/// A trait, necessary for every entity that will talk to the scheduling server.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<ApiOutcome, RequestError>;
    async fn register(&self, credentials: &Credentials) -> Result<ApiOutcome, RequestError>;
    async fn create_schedule(&self, request: &ScheduleRequest)
        -> Result<ApiOutcome, RequestError>;
}

/// Builds the shared HTTP client: JSON headers, one fixed timeout, no cookie store.
pub fn build_http_client(config: &Config) -> Result<Client, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    Ok(client)
}

/// Allows to use Client for talking to the scheduling server over HTTP.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        HttpApi {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Box<dyn Error>> {
        Ok(HttpApi::new(build_http_client(config)?, &config.api_base_url))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiOutcome, RequestError> {
        let request_url = self.endpoint(path);
        info!("Posting to {}", request_url);
        let response = self.client.post(&request_url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("{} answered {} with {}", request_url, status, text);
        if !status.is_success() {
            return Err(RequestError::Status {
                status,
                server_message: server_message_from_body(&text),
            });
        }
        decode_envelope(&text).map_err(RequestError::Malformed)
    }
}

impl ApiClient for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<ApiOutcome, RequestError> {
        self.post("/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<ApiOutcome, RequestError> {
        self.post("/register", credentials).await
    }

    async fn create_schedule(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ApiOutcome, RequestError> {
        self.post("/create_schedule", request).await
    }
}
