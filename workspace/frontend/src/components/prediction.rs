pub mod amenities;
pub mod form;
pub mod location_fields;
pub mod result;
