//! Beer records and related domain types.
//!
//! A [`Beer`] always carries the identity assigned by the catalogue
//! collaborator; a candidate that has never been persisted is a
//! [`BeerDraft`] and has no id at all. That split encodes the "id is null
//! until persisted" rule in the type system instead of a nullable field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A persisted beer record.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    /// Identity assigned by the catalogue on creation.
    pub id: i32,
    /// Display name.
    pub beer_name: String,
    /// Enumerated style tag.
    pub beer_style: BeerStyle,
    /// Unique business key; immutable once set.
    pub upc: String,
    /// Non-negative exact decimal price.
    pub price: Decimal,
    /// On-hand inventory, present only when explicitly requested.
    pub quantity_on_hand: Option<i32>,
}

/// A validated candidate record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerDraft {
    /// Display name.
    pub beer_name: String,
    /// Enumerated style tag.
    pub beer_style: BeerStyle,
    /// Unique business key.
    pub upc: String,
    /// Non-negative exact decimal price.
    pub price: Decimal,
    /// Optional on-hand inventory.
    pub quantity_on_hand: Option<i32>,
}

/// Enumerated beer style tag.
///
/// The wire form is `SCREAMING_SNAKE_CASE`, e.g. `"PALE_ALE"`.
///
/// # Examples
///
/// ```
/// # use brewery_backend::domain::BeerStyle;
/// assert_eq!("PALE_ALE".parse::<BeerStyle>(), Ok(BeerStyle::PaleAle));
/// assert_eq!(BeerStyle::Ipa.as_str(), "IPA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    /// Bottom-fermented, cold-conditioned.
    Lager,
    /// Pale, hoppy lager.
    Pilsner,
    /// Dark, roasted ale.
    Stout,
    /// Sour wheat beer.
    Gose,
    /// Dark ale brewed with brown malt.
    Porter,
    /// Top-fermented catch-all.
    Ale,
    /// Wheat-forward ale.
    Wheat,
    /// India pale ale.
    Ipa,
    /// Pale ale.
    PaleAle,
    /// Farmhouse ale.
    Saison,
}

impl BeerStyle {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lager => "LAGER",
            Self::Pilsner => "PILSNER",
            Self::Stout => "STOUT",
            Self::Gose => "GOSE",
            Self::Porter => "PORTER",
            Self::Ale => "ALE",
            Self::Wheat => "WHEAT",
            Self::Ipa => "IPA",
            Self::PaleAle => "PALE_ALE",
            Self::Saison => "SAISON",
        }
    }
}

impl std::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown beer style string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown beer style: {input}")]
pub struct ParseBeerStyleError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for BeerStyle {
    type Err = ParseBeerStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(Self::Lager),
            "PILSNER" => Ok(Self::Pilsner),
            "STOUT" => Ok(Self::Stout),
            "GOSE" => Ok(Self::Gose),
            "PORTER" => Ok(Self::Porter),
            "ALE" => Ok(Self::Ale),
            "WHEAT" => Ok(Self::Wheat),
            "IPA" => Ok(Self::Ipa),
            "PALE_ALE" => Ok(Self::PaleAle),
            "SAISON" => Ok(Self::Saison),
            _ => Err(ParseBeerStyleError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn style_round_trips_through_wire_form() {
        for style in [
            BeerStyle::Lager,
            BeerStyle::Pilsner,
            BeerStyle::Stout,
            BeerStyle::Gose,
            BeerStyle::Porter,
            BeerStyle::Ale,
            BeerStyle::Wheat,
            BeerStyle::Ipa,
            BeerStyle::PaleAle,
            BeerStyle::Saison,
        ] {
            assert_eq!(BeerStyle::from_str(style.as_str()), Ok(style));
        }
    }

    #[test]
    fn unknown_style_reports_input() {
        let err = BeerStyle::from_str("MILKSHAKE").expect_err("unknown style");
        assert_eq!(err.input, "MILKSHAKE");
    }

    #[test]
    fn serde_form_matches_as_str() {
        let value = serde_json::to_value(BeerStyle::PaleAle).expect("style serializes");
        assert_eq!(value, serde_json::json!("PALE_ALE"));
    }
}
