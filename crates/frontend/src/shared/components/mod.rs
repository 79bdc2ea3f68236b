pub mod alert;
pub mod page_header;

pub use alert::{Alert, AlertKind};
pub use page_header::PageHeader;
