//! Payload validation for write operations.
//!
//! Turns a wire [`BeerPayload`] into a domain [`BeerDraft`], accumulating a
//! violation per failed constraint. The resulting error carries the whole
//! set, so a caller fixing its request sees every problem at once.

use std::str::FromStr;

use crate::domain::{BeerDraft, BeerStyle, Error, Violations};
use crate::inbound::http::beers::BeerPayload;

/// Validate a candidate record, collecting the full violation set.
///
/// Returns the draft only when every constraint holds; otherwise an
/// `InvalidRequest` error carrying all violations. The collaborator is never
/// consulted here.
pub(crate) fn parse_beer_payload(payload: BeerPayload) -> Result<BeerDraft, Error> {
    let mut violations = Violations::new();

    let beer_name = match payload.beer_name {
        Some(name) if !name.trim().is_empty() => Some(name),
        Some(_) => {
            violations.push("beerName", "must not be blank");
            None
        }
        None => {
            violations.push("beerName", "is required");
            None
        }
    };

    let beer_style = match payload.beer_style.as_deref() {
        Some(style) => match BeerStyle::from_str(style) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                violations.push("beerStyle", "is not a known beer style");
                None
            }
        },
        None => {
            violations.push("beerStyle", "is required");
            None
        }
    };

    let upc = match payload.upc {
        Some(upc) if !upc.trim().is_empty() => Some(upc),
        Some(_) => {
            violations.push("upc", "must not be blank");
            None
        }
        None => {
            violations.push("upc", "is required");
            None
        }
    };

    let price = match payload.price {
        Some(price) if price.is_sign_negative() => {
            violations.push("price", "must not be negative");
            None
        }
        Some(price) => Some(price),
        None => {
            violations.push("price", "is required");
            None
        }
    };

    if let (Some(beer_name), Some(beer_style), Some(upc), Some(price), true) =
        (beer_name, beer_style, upc, price, violations.is_empty())
    {
        Ok(BeerDraft {
            beer_name,
            beer_style,
            upc,
            price,
            quantity_on_hand: payload.quantity_on_hand,
        })
    } else {
        Err(violations.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn valid_payload() -> BeerPayload {
        BeerPayload {
            beer_name: Some("Pinball Porter".into()),
            beer_style: Some("PORTER".into()),
            upc: Some("0083783375213".into()),
            price: Some(Decimal::new(1295, 2)),
            quantity_on_hand: Some(12),
        }
    }

    fn violation_fields(err: &Error) -> Vec<String> {
        err.details()
            .and_then(|d| d.get("violations"))
            .and_then(|v| v.as_array())
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.get("field"))
                    .filter_map(|f| f.as_str())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn valid_payload_becomes_draft() {
        let draft = parse_beer_payload(valid_payload()).expect("valid payload");
        assert_eq!(draft.beer_name, "Pinball Porter");
        assert_eq!(draft.beer_style, BeerStyle::Porter);
        assert_eq!(draft.upc, "0083783375213");
        assert_eq!(draft.price, Decimal::new(1295, 2));
        assert_eq!(draft.quantity_on_hand, Some(12));
    }

    #[test]
    fn inventory_quantity_is_optional() {
        let payload = BeerPayload {
            quantity_on_hand: None,
            ..valid_payload()
        };
        let draft = parse_beer_payload(payload).expect("valid payload");
        assert_eq!(draft.quantity_on_hand, None);
    }

    #[rstest]
    #[case::missing_name(BeerPayload { beer_name: None, ..valid_payload() }, "beerName")]
    #[case::blank_name(BeerPayload { beer_name: Some("   ".into()), ..valid_payload() }, "beerName")]
    #[case::missing_style(BeerPayload { beer_style: None, ..valid_payload() }, "beerStyle")]
    #[case::unknown_style(BeerPayload { beer_style: Some("MILKSHAKE".into()), ..valid_payload() }, "beerStyle")]
    #[case::missing_upc(BeerPayload { upc: None, ..valid_payload() }, "upc")]
    #[case::blank_upc(BeerPayload { upc: Some(String::new()), ..valid_payload() }, "upc")]
    #[case::missing_price(BeerPayload { price: None, ..valid_payload() }, "price")]
    #[case::negative_price(BeerPayload { price: Some(Decimal::new(-899, 2)), ..valid_payload() }, "price")]
    fn single_violation_names_the_field(#[case] payload: BeerPayload, #[case] field: &str) {
        let err = parse_beer_payload(payload).expect_err("invalid payload");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(violation_fields(&err), vec![field.to_owned()]);
    }

    #[test]
    fn empty_payload_reports_every_required_field() {
        let err = parse_beer_payload(BeerPayload::default()).expect_err("invalid payload");
        assert_eq!(
            violation_fields(&err),
            vec!["beerName", "beerStyle", "upc", "price"]
        );
    }

    #[test]
    fn price_only_payload_reports_the_other_required_fields() {
        let payload = BeerPayload {
            price: Some(Decimal::new(899, 2)),
            ..BeerPayload::default()
        };
        let err = parse_beer_payload(payload).expect_err("invalid payload");
        assert_eq!(violation_fields(&err), vec!["beerName", "beerStyle", "upc"]);
    }
}
