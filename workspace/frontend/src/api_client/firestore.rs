use async_trait::async_trait;
use gloo_net::http::Request;
use homeprice_common::contact::{Document, DocumentStore};
use homeprice_common::error::{ClientError, Result};
use std::rc::Rc;

use crate::settings::AppSettings;

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// Document store backed by the Firestore REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct FirestoreStore {
    project: Rc<str>,
    api_key: Rc<str>,
}

impl FirestoreStore {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            project: Rc::from(settings.firestore_project.as_str()),
            api_key: Rc::from(settings.firestore_api_key.as_str()),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            FIRESTORE_BASE, self.project, collection
        )
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreStore {
    async fn append(&self, collection: &str, document: &Document) -> Result<()> {
        let url = self.collection_url(collection);
        log::debug!("POST document to: {}", url);

        let mut request = Request::post(&url);
        if !self.api_key.is_empty() {
            request = request.query([("key", &*self.api_key)]);
        }
        let response = request
            .json(&document.to_firestore_json())
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::error!("Firestore {} - Request failed: {}", collection, e);
                ClientError::Network(e.to_string())
            })?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await.ok().filter(|t| !t.is_empty());
            log::error!("Firestore {} - HTTP error: {} {:?}", collection, status, message);
            return Err(ClientError::Status { status, message });
        }

        log::info!("Firestore {} - Document created", collection);
        Ok(())
    }
}
