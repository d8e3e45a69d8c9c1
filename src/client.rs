use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use reqwest::{Method, Request, Response, Url};
use tracing::debug;

use crate::credentials::Credentials;
use crate::domains_dns::DomainsDnsService;
use crate::error::{ConfigError, Result};

pub const PRODUCTION_URL: &str = "https://api.namecheap.com/xml.response";
pub const SANDBOX_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

const ENV_USE_SANDBOX: &str = "NAMECHEAP_USE_SANDBOX";

/// Command parameters for a single API call, keyed by parameter name.
pub type Params = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    #[default]
    Production,
    Sandbox,
}

impl Endpoint {
    pub fn url(&self) -> &'static str {
        match self {
            Endpoint::Production => PRODUCTION_URL,
            Endpoint::Sandbox => SANDBOX_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub credentials: Credentials,
    pub endpoint: Endpoint,
}

impl ClientOptions {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::default(),
        }
    }

    pub fn sandbox(mut self) -> Self {
        self.endpoint = Endpoint::Sandbox;
        self
    }

    /// Builds options from `NAMECHEAP_*` variables; see [`Credentials::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = Credentials::from_env()?;
        let use_sandbox = env::var(ENV_USE_SANDBOX)
            .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        let options = Self::new(credentials);
        Ok(if use_sandbox { options.sandbox() } else { options })
    }
}

/// A response body owned by the caller. Dropping it releases the underlying
/// connection.
#[async_trait]
pub trait ResponseBody: Send {
    async fn read_all(&mut self) -> Result<Vec<u8>>;
}

/// Sends one command to the API and hands back its response body.
#[async_trait]
pub trait Transport: Send + Sync {
    type Body: ResponseBody;

    async fn send(&self, params: Params) -> Result<Self::Body>;
}

/// reqwest-backed Namecheap client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl Client {
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_base_url(options.credentials, options.endpoint.url())
    }

    /// Points the client at an arbitrary `xml.response` URL.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| ConfigError::InvalidUrl(base_url.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        })
    }

    pub fn domains_dns(&self) -> DomainsDnsService<'_, Self> {
        DomainsDnsService::new(self)
    }

    /// Builds a GET request carrying the global credential parameters plus
    /// `params` in the query string.
    pub fn new_request(&self, params: &Params) -> Result<Request> {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in self.credentials.global_params() {
                query.append_pair(name, value);
            }
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        Ok(self.http.request(Method::GET, url).build()?)
    }
}

#[async_trait]
impl Transport for Client {
    type Body = HttpBody;

    async fn send(&self, params: Params) -> Result<HttpBody> {
        let request = self.new_request(&params)?;
        debug!(
            method = %request.method(),
            command = params.get("Command").map(String::as_str).unwrap_or_default(),
            "sending Namecheap request"
        );

        let response = self.http.execute(request).await?.error_for_status()?;
        debug!(status = %response.status(), "received Namecheap response");
        Ok(HttpBody { response })
    }
}

#[derive(Debug)]
pub struct HttpBody {
    response: Response,
}

#[async_trait]
impl ResponseBody for HttpBody {
    async fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        while let Some(chunk) = self.response.chunk().await? {
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}
