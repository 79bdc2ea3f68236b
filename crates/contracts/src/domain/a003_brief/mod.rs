pub mod aggregate;

pub use aggregate::BriefSummary;
