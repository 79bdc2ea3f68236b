pub mod a001_client;
pub mod a002_keyword;
pub mod a003_brief;
