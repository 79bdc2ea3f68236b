pub mod aggregate;
pub mod collection;
pub mod csv_import;

pub use aggregate::{
    AddKeywordRequest, BulkKeywordsRequest, BulkKeywordsResponse, Keyword, KeywordStatus,
    UpdateKeywordStatusRequest,
};
pub use collection::{KeywordCollection, PendingChange, StatusCounts, StatusFilter};
pub use csv_import::parse_keyword_csv;
