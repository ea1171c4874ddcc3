use crate::app_config::AppConfig;
use crate::domain::{CheckRequest, Credentials};
use crate::shelly::digest;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, InvalidHeaderValue, ToStrError, WWW_AUTHENTICATE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

pub fn new_client(config: &AppConfig) -> Result<Client, ShellyError> {
    let client = Client::builder().timeout(config.timeout()).build().map_err(ShellyError::Client)?;
    Ok(client)
}

/// How a single exchange authenticates against the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    None,
    Basic,
    Digest,
}

#[derive(Debug)]
pub struct ShellyClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ShellyClient {
    pub fn new(request: &CheckRequest, config: &AppConfig) -> Result<Self, ShellyError> {
        Ok(ShellyClient {
            client: new_client(config)?,
            base_url: request.base_url(),
            credentials: request.credentials.clone(),
        })
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T, ShellyError> {
        self.exchange(Method::GET, path, None, auth).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn post<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T, ShellyError> {
        self.exchange(Method::POST, path, None, auth).await
    }

    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B, auth: Auth) -> Result<T, ShellyError> {
        let body = serde_json::to_vec(body).map_err(ShellyError::Serialize)?;
        self.exchange(Method::POST, path, Some(body), auth).await
    }

    async fn exchange<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<Vec<u8>>, auth: Auth) -> Result<T, ShellyError> {
        let url = format!("{}{}", self.base_url, path);
        let credentials = match auth {
            Auth::None => None,
            Auth::Basic | Auth::Digest => self.credentials.as_ref(),
        };

        debug!("{} {}...", method, url);
        let mut request = self.request(&method, &url, body.as_deref());
        if let (Auth::Basic, Some(credentials)) = (auth, credentials) {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        let mut response = request.send().await.map_err(ShellyError::Request)?;

        if let (Auth::Digest, Some(credentials)) = (auth, credentials) {
            let challenge = response.headers().get(WWW_AUTHENTICATE).cloned();
            if response.status() == StatusCode::UNAUTHORIZED {
                if let Some(challenge) = challenge {
                    debug!("🔑 Answering digest challenge for {}", path);
                    let authorization = digest::authorization(&challenge, &method, path, body.as_deref(), credentials)?;
                    response = self
                        .request(&method, &url, body.as_deref())
                        .header(AUTHORIZATION, authorization)
                        .send()
                        .await
                        .map_err(ShellyError::Request)?;
                }
            }
        }

        let response = check_status(response)?;
        debug!(status = %response.status(), "{} {}... OK", method, url);

        let bytes = response.bytes().await.map_err(ShellyError::Request)?;
        serde_json::from_slice(&bytes).map_err(|source| ShellyError::MalformedResponse {
            path: path.to_string(),
            source,
        })
    }

    fn request(&self, method: &Method, url: &str, body: Option<&[u8]>) -> RequestBuilder {
        let request = self.client.request(method.clone(), url);
        match body {
            Some(body) => request.header(CONTENT_TYPE, "application/json").body(body.to_vec()),
            None => request,
        }
    }
}

fn check_status(response: Response) -> Result<Response, ShellyError> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ShellyError::Unauthorized),
        status => Err(ShellyError::UnexpectedStatus { status: status.as_u16() }),
    }
}

#[derive(Error, Debug)]
pub enum ShellyError {
    #[error("unable to authenticate (Shelly requires authentication)")]
    Unauthorized,
    #[error("Not able to communicate with Shelly device - HTTP response was {status}")]
    UnexpectedStatus { status: u16 },
    #[error("{0}")]
    Request(#[source] reqwest::Error),
    #[error("Unexpected response from Shelly device at {path}: {source}")]
    MalformedResponse { path: String, source: serde_json::Error },
    #[error("Unable to answer the digest challenge: {0}")]
    Digest(#[from] digest_auth::Error),
    #[error("Shelly device sent an unreadable challenge: {0}")]
    InvalidChallenge(#[from] ToStrError),
    #[error("Shelly client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error("Unable to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Unable to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
