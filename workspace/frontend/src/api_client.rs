pub mod firestore;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use homeprice_common::api::{ErrorResponse, LocationApi, LocationQuery, LocationsResponse, PredictionApi, PredictionResponse};
use homeprice_common::error::{ClientError, Result};
use homeprice_common::form::FormSnapshot;
use homeprice_common::session::{AuthReply, AuthStatus, Credentials, IdentityProvider};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use web_sys::RequestCredentials;

use crate::settings::AppSettings;

/// Client of the prediction backend.
///
/// The session endpoints send cookies; location and prediction calls do not.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: Rc<str>,
}

impl ApiClient {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            base_url: Rc::from(settings.api_base_url.as_str()),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Common GET request handler
    async fn get<T>(&self, endpoint: &str, query: Option<(&str, &str)>, with_session: bool) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log::debug!("GET request to: {} {:?}", url, query);

        let mut request = Request::get(&url);
        if let Some(param) = query {
            request = request.query([param]);
        }
        if with_session {
            request = request.credentials(RequestCredentials::Include);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            ClientError::Network(e.to_string())
        })?;

        read_json("GET", endpoint, response).await
    }

    /// Common POST request handler
    async fn post<T, B>(&self, endpoint: &str, body: Option<&B>, with_session: bool) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        log::debug!("POST request to: {}", url);

        let mut request = Request::post(&url);
        if with_session {
            request = request.credentials(RequestCredentials::Include);
        }

        let sent = match body {
            Some(body) => {
                let request = request.json(body).map_err(|e| {
                    log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                    ClientError::Encode(e.to_string())
                })?;
                request.send().await
            }
            None => request.header("Content-Type", "application/json").send().await,
        };
        let response = sent.map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ClientError::Network(e.to_string())
        })?;

        read_json("POST", endpoint, response).await
    }
}

/// Decodes a 2xx body, or turns a non-2xx answer into [`ClientError::Status`]
/// carrying the server's `error` text.
async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message);
        if let Some(message) = &message {
            log::error!("{} {} - API error: {}", method, endpoint, message);
        }
        return Err(ClientError::Status { status, message });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let body = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
        ClientError::Decode(e.to_string())
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(body)
}

#[async_trait(?Send)]
impl LocationApi for ApiClient {
    async fn fetch_locations(&self, query: &LocationQuery) -> Result<LocationsResponse> {
        log::trace!("Fetching locations: {:?}", query);
        self.get("/locations", query.param(), false).await
    }
}

#[async_trait(?Send)]
impl PredictionApi for ApiClient {
    async fn predict(&self, form: &FormSnapshot) -> Result<PredictionResponse> {
        log::debug!("Requesting prediction with {} fields", form.len());
        self.post("/predict", Some(form), false).await
    }
}

#[async_trait(?Send)]
impl IdentityProvider for ApiClient {
    async fn status(&self) -> Result<AuthStatus> {
        self.get("/check-auth", None, true).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthReply> {
        log::debug!("Signing in: {}", credentials.email);
        self.post("/login", Some(credentials), true).await
    }

    async fn sign_out(&self) -> Result<AuthReply> {
        self.post::<AuthReply, ()>("/logout", None, true).await
    }
}
