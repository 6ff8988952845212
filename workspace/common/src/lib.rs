//! Client-side model of the HomePrice prediction app.
//!
//! Everything here is free of DOM and HTTP concerns so it can be exercised
//! natively: the frontend renders these types and implements the service
//! traits from [`api`], [`session`] and [`contact`] on top of its HTTP client.

pub mod amenities;
pub mod api;
pub mod contact;
pub mod error;
pub mod estimate;
pub mod form;
pub mod location;
pub mod property;
pub mod session;
pub mod submit;

pub use amenities::AmenitySelection;
pub use api::{
    ErrorResponse, LocationApi, LocationQuery, LocationsResponse, PredictionApi,
    PredictionResponse,
};
pub use contact::{ContactMessage, ContactStatus, Document, DocumentStore};
pub use error::{ClientError, ValidationGap};
pub use estimate::{Denomination, PriceEstimate};
pub use form::{FieldValue, FormSnapshot};
pub use location::{Applied, ChoiceField, Level, LocationCascade, SelectionState};
pub use property::FloorField;
pub use session::{AuthStatus, Credentials, IdentityProvider};
pub use submit::{SubmitOutcome, Submission};
