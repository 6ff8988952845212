pub mod error;
pub mod loading;
pub mod session;
pub mod toast;
