mod banner;
mod page;

pub use banner::MissingCredentialsBanner;
pub use page::SettingsPage;
