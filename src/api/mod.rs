// src/api/mod.rs
//
// Backend access: wire types, errors, query encoding, transport, client.

pub mod client;
pub mod error;
pub mod net;
pub mod query;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use types::{Category, Product, ProductId};
