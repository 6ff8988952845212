//! Transport-layer types of the prediction backend and the service traits the
//! frontend implements on top of its HTTP client.
//!
//! The traits are `?Send` because every implementation runs on the browser's
//! single UI thread.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::FormSnapshot;
use crate::location::Level;

/// Body of `GET /locations`. The backend only fills the lists that match the
/// query, so missing keys decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub localities: Vec<String>,
}

/// One request against the location endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// Every state, no filter
    States,
    /// Cities of a state
    Cities { state: String },
    /// Localities of a city
    Localities { city: String },
}

impl LocationQuery {
    /// Query that fills the children of `level` once `value` is chosen there.
    /// Empty values and the last level have no follow-up query.
    pub fn for_children_of(level: Level, value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        match level {
            Level::Region => Some(Self::Cities { state: value.to_string() }),
            Level::SubRegion => Some(Self::Localities { city: value.to_string() }),
            Level::Area => None,
        }
    }

    /// Field this query populates.
    pub fn target(&self) -> Level {
        match self {
            Self::States => Level::Region,
            Self::Cities { .. } => Level::SubRegion,
            Self::Localities { .. } => Level::Area,
        }
    }

    /// Query-string parameter, `None` for the unfiltered query.
    pub fn param(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::States => None,
            Self::Cities { state } => Some(("state", state)),
            Self::Localities { city } => Some(("city", city)),
        }
    }

    /// The parent value the response belongs to.
    pub fn filter_value(&self) -> Option<&str> {
        self.param().map(|(_, value)| value)
    }

    /// Extracts the list this query asked for, keeping server order.
    pub fn pick(&self, response: LocationsResponse) -> Vec<String> {
        match self {
            Self::States => response.states,
            Self::Cities { .. } => response.cities,
            Self::Localities { .. } => response.localities,
        }
    }
}

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<f64>,
    /// Older backends answer with `price` instead of `prediction`
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// `error` when present, `message` otherwise.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[async_trait(?Send)]
pub trait LocationApi {
    async fn fetch_locations(&self, query: &LocationQuery) -> Result<LocationsResponse>;
}

#[async_trait(?Send)]
pub trait PredictionApi {
    async fn predict(&self, form: &FormSnapshot) -> Result<PredictionResponse>;
}
