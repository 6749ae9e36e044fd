//! HTTP inbound adapter exposing the beer REST endpoints.

pub mod beers;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;

pub use error::ApiResult;
