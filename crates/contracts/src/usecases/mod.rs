pub mod common;
pub mod u501_seo_analysis;
pub mod u502_article_writer;
