use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use crate::config::constants::{secs, SESSION_COOKIE_NAME};
use crate::enums::api_error::ApiError;
use crate::errors::SpacesResult;
use crate::helpers::url_helper::UrlHelper;
use crate::structs::api::error_body::ErrorBody;
use crate::structs::config::server_config::ServerConfig;

/// Shared transport for the sites and GitHub clients.
#[derive(Clone)]
pub struct SpacesHttpClient {
    base_url: String,
    client: Client,
    session_cookie: Option<String>,
}

impl SpacesHttpClient {
    pub fn new(config: &ServerConfig) -> SpacesResult<Self> {
        let client = Client::builder()
            .timeout(secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            session_cookie: config.session_cookie(),
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            session_cookie: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        UrlHelper::join(&self.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");

        match &self.session_cookie {
            Some(cookie) => builder.header(COOKIE, format!("{SESSION_COOKIE_NAME}={cookie}")),
            None => builder,
        }
    }

    /// Sends the request and turns any non-2xx status into [`ApiError::Status`],
    /// keeping the server's `message`/`error` text when it sent one.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);

        log::debug!("🌐 {} responded {}", self.base_url, status);
        Err(ApiError::status(status.as_u16(), message))
    }

    pub async fn send_for_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
