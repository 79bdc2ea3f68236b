pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod file_reader;
pub mod http;
pub mod icons;
pub mod page_frame;
pub mod page_standard;

#[cfg(test)]
pub mod testing;
