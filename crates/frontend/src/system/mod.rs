pub mod settings;
pub mod status;
