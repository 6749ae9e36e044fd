//! Brewery backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds transport-agnostic
//! types and the collaborator port, `inbound::http` adapts them to Actix Web,
//! `outbound` provides the in-memory catalogue adapter, and `server`
//! assembles the application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
