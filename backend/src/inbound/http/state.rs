//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the domain port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::BeerService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The beer catalogue collaborator.
    pub beers: Arc<dyn BeerService>,
}

impl HttpState {
    /// Construct state around a catalogue implementation.
    pub fn new(beers: Arc<dyn BeerService>) -> Self {
        Self { beers }
    }
}
