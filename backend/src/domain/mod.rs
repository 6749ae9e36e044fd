//! Transport-agnostic brewery domain.
//!
//! Everything in this module is free of HTTP concerns. Inbound adapters map
//! these types onto the wire; outbound adapters implement the ports.

pub mod beer;
pub mod error;
pub mod ports;
pub mod validation;

pub use beer::{Beer, BeerDraft, BeerStyle, ParseBeerStyleError};
pub use error::{Error, ErrorCode};
pub use validation::{Violation, Violations};
