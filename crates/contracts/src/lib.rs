//! Shared contracts between the Lumi SEO Suite frontend and its HTTP backend.
//!
//! Everything here is plain Rust (no browser APIs) so it can be unit-tested natively:
//! wire DTOs, enums with their wire labels, form validation, the keyword CSV parser
//! and the keyword collection with its optimistic-update bookkeeping.

pub mod domain;
pub mod shared;
pub mod usecases;
