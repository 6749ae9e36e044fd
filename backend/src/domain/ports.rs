//! Driving port for the beer catalogue collaborator.
//!
//! HTTP handlers call the catalogue through this trait and never learn how
//! records are stored. Implementations must keep three outcomes distinct:
//! a lookup that matches nothing is `Ok(None)`, a write whose target id does
//! not exist reports `TargetMissing`, and only genuinely unexpected faults
//! surface as `Err`.

use async_trait::async_trait;

use super::{Beer, BeerDraft, Error};

/// Outcome of an update aimed at a specific id.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The target existed; the stored record after the write.
    Updated(Beer),
    /// No record with the target id exists.
    TargetMissing,
}

/// Outcome of a delete aimed at a specific id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and was removed.
    Deleted,
    /// No record with the target id exists.
    TargetMissing,
}

/// Asynchronous beer catalogue operations consumed by the handler layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Look up a beer by identity. When `show_inventory` is false the
    /// returned record should omit the on-hand quantity.
    async fn find_by_id(
        &self,
        beer_id: i32,
        show_inventory: bool,
    ) -> Result<Option<Beer>, Error>;

    /// Look up a beer by its UPC business key.
    async fn find_by_upc(&self, upc: &str) -> Result<Option<Beer>, Error>;

    /// Persist a new record; the result always has an assigned id.
    async fn create(&self, draft: BeerDraft) -> Result<Beer, Error>;

    /// Overwrite the record with the given id. The stored business key is
    /// never changed by an update.
    async fn update(&self, beer_id: i32, draft: BeerDraft) -> Result<UpdateOutcome, Error>;

    /// Remove the record with the given id.
    async fn delete_by_id(&self, beer_id: i32) -> Result<DeleteOutcome, Error>;
}
