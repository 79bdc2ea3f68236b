pub mod api_error;
pub mod credentials;
pub mod serde_utils;
