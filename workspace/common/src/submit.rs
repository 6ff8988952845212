//! Lifecycle of one `POST /predict` request: the submit control is locked for
//! the duration of the call and always unlocked afterwards.

use tracing::{error, info};

use crate::api::PredictionResponse;
use crate::error::ClientError;
use crate::estimate::PriceEstimate;

pub const PREDICTION_FAILED: &str = "Prediction failed. Please check your inputs.";
pub const CONNECTION_FAILED: &str =
    "Failed to connect to server. Please make sure the backend is running.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Estimate(PriceEstimate),
    Failed(String),
}

/// User-facing text for a failed prediction request.
pub fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Network(_) => CONNECTION_FAILED.to_string(),
        _ => err.server_message().unwrap_or(PREDICTION_FAILED).to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    in_flight: bool,
    outcome: Option<SubmitOutcome>,
}

impl Submission {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.in_flight {
            "Predicting..."
        } else {
            "Predict Price"
        }
    }

    /// Locks the submit control and clears the previous result. Returns
    /// `false` when a request is already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.outcome = None;
        true
    }

    /// Records the result and unlocks the submit control.
    pub fn finish(&mut self, result: Result<PredictionResponse, ClientError>) -> &SubmitOutcome {
        self.in_flight = false;
        let outcome = match result {
            Ok(response) => {
                let estimate = PriceEstimate::from_response(&response);
                info!(lakhs = estimate.lakhs, "Prediction received");
                SubmitOutcome::Estimate(estimate)
            }
            Err(err) => {
                error!(%err, "Error predicting price");
                SubmitOutcome::Failed(failure_message(&err))
            }
        };
        self.outcome.insert(outcome)
    }
}
