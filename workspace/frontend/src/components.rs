pub mod auth_guard;
pub mod layout;
pub mod prediction;
