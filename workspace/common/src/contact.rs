//! Contact form: validation, the record written to the document store and
//! its Firestore REST encoding.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, info};

use crate::error::Result;

pub const CONTACT_COLLECTION: &str = "contactMessages";

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out all fields.")]
    MissingFields,
}

/// Field value of a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValue {
    String(String),
    Timestamp(DateTime<Utc>),
}

/// A flat record appended to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: BTreeMap<String, DocumentValue>,
}

impl Document {
    pub fn with(mut self, name: &str, value: DocumentValue) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DocumentValue> {
        self.fields.get(name)
    }

    /// Body of a Firestore `createDocument` call.
    pub fn to_firestore_json(&self) -> Value {
        let fields: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| {
                let encoded = match value {
                    DocumentValue::String(s) => json!({ "stringValue": s }),
                    DocumentValue::Timestamp(ts) => json!({
                        "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Millis, true)
                    }),
                };
                (name.clone(), encoded)
            })
            .collect();
        json!({ "fields": fields })
    }
}

#[async_trait(?Send)]
pub trait DocumentStore {
    /// Appends one record to `collection`.
    async fn append(&self, collection: &str, document: &Document) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Trims every field; all four are required.
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> std::result::Result<Self, ContactError> {
        let [name, email, subject, message] = [name, email, subject, message].map(str::trim);
        if [name, email, subject, message].iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            created_at,
        })
    }

    pub fn to_document(&self) -> Document {
        Document::default()
            .with("name", DocumentValue::String(self.name.clone()))
            .with("email", DocumentValue::String(self.email.clone()))
            .with("subject", DocumentValue::String(self.subject.clone()))
            .with("message", DocumentValue::String(self.message.clone()))
            .with("createdAt", DocumentValue::Timestamp(self.created_at))
    }
}

/// Result shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Sent,
    Failed(String),
}

impl ContactStatus {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sent => "Message Sent",
            Self::Failed(_) => "Error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Sent => SENT_MESSAGE,
            Self::Failed(text) => text,
        }
    }
}

impl From<ContactError> for ContactStatus {
    fn from(err: ContactError) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Writes `message` to the contact collection.
pub async fn send_contact<S>(store: &S, message: &ContactMessage) -> ContactStatus
where
    S: DocumentStore + ?Sized,
{
    match store.append(CONTACT_COLLECTION, &message.to_document()).await {
        Ok(()) => {
            info!(subject = %message.subject, "Contact message stored");
            ContactStatus::Sent
        }
        Err(err) => {
            error!(%err, "Failed to store contact message");
            ContactStatus::Failed(SEND_FAILED_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        fail: bool,
        written: RefCell<Vec<(String, Document)>>,
    }

    #[async_trait(?Send)]
    impl DocumentStore for MemoryStore {
        async fn append(&self, collection: &str, document: &Document) -> Result<()> {
            if self.fail {
                return Err(ClientError::Status { status: 403, message: None });
            }
            self.written.borrow_mut().push((collection.to_string(), document.clone()));
            Ok(())
        }
    }

    fn sent_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn message() -> ContactMessage {
        ContactMessage::new(" Ravi ", "ravi@example.com", "Pricing", " How accurate is it? ", sent_at()).unwrap()
    }

    #[test]
    fn test_all_fields_required() {
        let err = ContactMessage::new("Ravi", "ravi@example.com", "   ", "Hi", sent_at()).unwrap_err();
        assert_eq!(err, ContactError::MissingFields);
        assert_eq!(ContactStatus::from(err).text(), "Please fill out all fields.");

        let trimmed = message();
        assert_eq!(trimmed.name, "Ravi");
        assert_eq!(trimmed.message, "How accurate is it?");
    }

    #[test]
    fn test_firestore_encoding() {
        let body = message().to_document().to_firestore_json();

        assert_eq!(body["fields"]["name"], json!({ "stringValue": "Ravi" }));
        assert_eq!(body["fields"]["subject"], json!({ "stringValue": "Pricing" }));
        assert_eq!(
            body["fields"]["createdAt"],
            json!({ "timestampValue": "2025-03-14T09:30:00.000Z" })
        );
        assert_eq!(body["fields"].as_object().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_send_writes_to_contact_collection() {
        let store = MemoryStore::default();

        let status = send_contact(&store, &message()).await;

        assert_eq!(status, ContactStatus::Sent);
        assert_eq!(status.title(), "Message Sent");
        let written = store.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "contactMessages");
        assert_eq!(
            written[0].1.get("email"),
            Some(&DocumentValue::String("ravi@example.com".to_string()))
        );
    }

    #[tokio::test]
    async fn test_store_failure_reported() {
        let store = MemoryStore { fail: true, ..Default::default() };

        let status = send_contact(&store, &message()).await;

        assert_eq!(status, ContactStatus::Failed(SEND_FAILED_MESSAGE.to_string()));
        assert_eq!(status.title(), "Error");
    }
}
