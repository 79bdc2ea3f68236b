pub mod details;
pub mod list;
mod profile_form;
