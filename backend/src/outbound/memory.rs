//! In-memory beer catalogue adapter.
//!
//! Backs local runs and end-to-end tests. Ids are assigned from a
//! monotonically increasing counter starting at 1, UPC uniqueness is
//! enforced on create, and the stored UPC survives updates because it is a
//! business key.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::ports::{BeerService, DeleteOutcome, UpdateOutcome};
use crate::domain::{Beer, BeerDraft, BeerStyle, Error};

/// Catalogue held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBeerService {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    beers: BTreeMap<i32, Beer>,
}

impl Inner {
    fn insert(&mut self, draft: BeerDraft) -> Beer {
        self.next_id += 1;
        let beer = Beer {
            id: self.next_id,
            beer_name: draft.beer_name,
            beer_style: draft.beer_style,
            upc: draft.upc,
            price: draft.price,
            quantity_on_hand: draft.quantity_on_hand,
        };
        self.beers.insert(beer.id, beer.clone());
        beer
    }
}

impl InMemoryBeerService {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalogue pre-loaded with the bootstrap records.
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for draft in seed_drafts() {
            inner.insert(draft);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

fn seed_drafts() -> Vec<BeerDraft> {
    vec![
        BeerDraft {
            beer_name: "Mango Bobs".into(),
            beer_style: BeerStyle::Ipa,
            upc: "0631234200036".into(),
            price: Decimal::new(1295, 2),
            quantity_on_hand: Some(122),
        },
        BeerDraft {
            beer_name: "Galaxy Cat".into(),
            beer_style: BeerStyle::PaleAle,
            upc: "0631234300019".into(),
            price: Decimal::new(1195, 2),
            quantity_on_hand: Some(392),
        },
        BeerDraft {
            beer_name: "Pinball Porter".into(),
            beer_style: BeerStyle::Porter,
            upc: "0083783375213".into(),
            price: Decimal::new(1295, 2),
            quantity_on_hand: Some(144),
        },
    ]
}

#[async_trait]
impl BeerService for InMemoryBeerService {
    async fn find_by_id(
        &self,
        beer_id: i32,
        show_inventory: bool,
    ) -> Result<Option<Beer>, Error> {
        let inner = self.inner.read().await;
        Ok(inner.beers.get(&beer_id).map(|beer| {
            let mut beer = beer.clone();
            if !show_inventory {
                beer.quantity_on_hand = None;
            }
            beer
        }))
    }

    async fn find_by_upc(&self, upc: &str) -> Result<Option<Beer>, Error> {
        let inner = self.inner.read().await;
        Ok(inner.beers.values().find(|beer| beer.upc == upc).cloned())
    }

    async fn create(&self, draft: BeerDraft) -> Result<Beer, Error> {
        let mut inner = self.inner.write().await;
        if inner.beers.values().any(|beer| beer.upc == draft.upc) {
            // The original schema enforced this with a unique constraint;
            // the handler layer sees it as an unmodeled collaborator fault.
            return Err(Error::internal(format!("duplicate upc: {}", draft.upc)));
        }
        Ok(inner.insert(draft))
    }

    async fn update(&self, beer_id: i32, draft: BeerDraft) -> Result<UpdateOutcome, Error> {
        let mut inner = self.inner.write().await;
        match inner.beers.get_mut(&beer_id) {
            Some(beer) => {
                beer.beer_name = draft.beer_name;
                beer.beer_style = draft.beer_style;
                beer.price = draft.price;
                beer.quantity_on_hand = draft.quantity_on_hand;
                Ok(UpdateOutcome::Updated(beer.clone()))
            }
            None => Ok(UpdateOutcome::TargetMissing),
        }
    }

    async fn delete_by_id(&self, beer_id: i32) -> Result<DeleteOutcome, Error> {
        let mut inner = self.inner.write().await;
        Ok(match inner.beers.remove(&beer_id) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::TargetMissing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    fn draft(name: &str, upc: &str) -> BeerDraft {
        BeerDraft {
            beer_name: name.into(),
            beer_style: BeerStyle::Ale,
            upc: upc.into(),
            price: Decimal::new(899, 2),
            quantity_on_hand: Some(10),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let catalogue = InMemoryBeerService::new();
        let first = catalogue.create(draft("A", "1")).await.expect("created");
        let second = catalogue.create(draft("B", "2")).await.expect("created");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn seeded_catalogue_resolves_by_upc() {
        let catalogue = InMemoryBeerService::seeded();
        let beer = catalogue
            .find_by_upc("0631234200036")
            .await
            .expect("lookup succeeds")
            .expect("seed record present");
        assert_eq!(beer.beer_name, "Mango Bobs");
        assert_eq!(beer.beer_style, BeerStyle::Ipa);
    }

    #[tokio::test]
    async fn find_by_id_hides_inventory_unless_requested() {
        let catalogue = InMemoryBeerService::seeded();
        let hidden = catalogue
            .find_by_id(1, false)
            .await
            .expect("lookup succeeds")
            .expect("seed record present");
        assert_eq!(hidden.quantity_on_hand, None);

        let shown = catalogue
            .find_by_id(1, true)
            .await
            .expect("lookup succeeds")
            .expect("seed record present");
        assert_eq!(shown.quantity_on_hand, Some(122));
    }

    #[tokio::test]
    async fn duplicate_upc_is_a_collaborator_fault() {
        let catalogue = InMemoryBeerService::seeded();
        let err = catalogue
            .create(draft("Clone", "0631234200036"))
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn update_keeps_the_stored_upc() {
        let catalogue = InMemoryBeerService::seeded();
        let outcome = catalogue
            .update(1, draft("Mango Bobs Remix", "9999999999999"))
            .await
            .expect("update succeeds");
        let UpdateOutcome::Updated(beer) = outcome else {
            panic!("seed record should exist");
        };
        assert_eq!(beer.beer_name, "Mango Bobs Remix");
        assert_eq!(beer.upc, "0631234200036");
    }

    #[tokio::test]
    async fn update_missing_id_reports_target_missing() {
        let catalogue = InMemoryBeerService::new();
        let outcome = catalogue
            .update(999, draft("Ghost", "3"))
            .await
            .expect("update succeeds");
        assert_eq!(outcome, UpdateOutcome::TargetMissing);
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let catalogue = InMemoryBeerService::seeded();
        let first = catalogue.delete_by_id(3).await.expect("delete succeeds");
        let second = catalogue.delete_by_id(3).await.expect("delete succeeds");
        assert_eq!(first, DeleteOutcome::Deleted);
        assert_eq!(second, DeleteOutcome::TargetMissing);
    }
}
