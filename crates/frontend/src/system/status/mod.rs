//! Backend status shown on the home route.
pub mod api;
mod page;

pub use page::StatusPage;
