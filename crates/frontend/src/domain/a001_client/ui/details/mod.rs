//! Client Details UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ClientDetailsVm with RwSignals and commands
//! - view.rs: main component ClientDetails
//!
//! Commands themselves live in `domain::a001_client::model`.

mod view;
mod view_model;

pub use view::ClientDetails;
