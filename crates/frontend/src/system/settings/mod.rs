//! Settings store: the user's third-party API keys.
pub mod context;
pub mod storage;
pub mod ui;
