//! HTTP inbound adapter exposing REST endpoints.

pub mod contacts;
pub mod error;
pub mod health;
pub mod ping;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;
