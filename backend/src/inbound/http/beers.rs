//! Beer HTTP handlers.
//!
//! ```text
//! GET    /api/v2/beer/{beer_id}?showInventoryOnHand=bool
//! GET    /api/v2/beer/upc/{upc}
//! POST   /api/v2/beer
//! PUT    /api/v2/beer/{beer_id}
//! DELETE /api/v2/beer/{beer_id}
//! ```
//!
//! Each handler is one non-blocking pipeline: parse, validate (writes only),
//! await the catalogue collaborator, derive the status. Validation runs
//! strictly before the collaborator call and short-circuits it; absent
//! lookups and missing write targets answer with empty 404s built here, not
//! via error propagation.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{DeleteOutcome, UpdateOutcome};
use crate::domain::{Beer, BeerStyle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_beer_payload;

/// Base path for the beer resource; `Location` headers are derived from it.
pub const BEER_BASE_PATH: &str = "/api/v2/beer";

/// Candidate beer record submitted by POST and PUT.
///
/// Every field is optional on the wire so that validation can report all
/// missing fields in one round trip instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerPayload {
    /// Display name; required, non-blank.
    pub beer_name: Option<String>,
    /// Style tag in wire form, e.g. `"PALE_ALE"`; required.
    pub beer_style: Option<String>,
    /// UPC business key; required, non-blank.
    pub upc: Option<String>,
    /// Exact decimal price as a string, e.g. `"8.99"`; required, non-negative.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>, example = "8.99")]
    pub price: Option<Decimal>,
    /// Optional on-hand inventory quantity.
    pub quantity_on_hand: Option<i32>,
}

/// Wire representation of a beer record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerResponse {
    /// Catalogue-assigned identity.
    pub id: i32,
    /// Display name.
    pub beer_name: String,
    /// Style tag.
    pub beer_style: BeerStyle,
    /// UPC business key.
    pub upc: String,
    /// Exact decimal price as a string.
    #[serde(with = "rust_decimal::serde::str")]
    #[schema(value_type = String, example = "8.99")]
    pub price: Decimal,
    /// On-hand inventory; omitted unless explicitly requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            beer_name: beer.beer_name,
            beer_style: beer.beer_style,
            upc: beer.upc,
            price: beer.price,
            quantity_on_hand: beer.quantity_on_hand,
        }
    }
}

/// Query flags for beer lookups by id.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    /// Include the on-hand inventory quantity in the response.
    #[serde(default)]
    pub show_inventory_on_hand: bool,
}

/// Fetch a beer by id.
#[utoipa::path(
    get,
    path = "/api/v2/beer/{beer_id}",
    params(
        ("beer_id" = i32, Path, description = "Catalogue-assigned beer id"),
        InventoryQuery,
    ),
    responses(
        (status = 200, description = "Beer record", body = BeerResponse),
        (status = 404, description = "No beer with this id"),
        (status = 500, description = "Collaborator failure"),
    ),
    tags = ["beer"],
    operation_id = "getBeerById"
)]
#[get("/beer/{beer_id}")]
pub async fn get_beer_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    query: web::Query<InventoryQuery>,
) -> ApiResult<HttpResponse> {
    let beer_id = path.into_inner();
    let show_inventory = query.show_inventory_on_hand;

    let Some(beer) = state.beers.find_by_id(beer_id, show_inventory).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let mut body = BeerResponse::from(beer);
    if !show_inventory {
        // The flag already travels to the collaborator, but the response
        // contract holds regardless of what it returned.
        body.quantity_on_hand = None;
    }
    Ok(HttpResponse::Ok().json(body))
}

/// Fetch a beer by its UPC business key.
#[utoipa::path(
    get,
    path = "/api/v2/beer/upc/{upc}",
    params(("upc" = String, Path, description = "UPC business key")),
    responses(
        (status = 200, description = "Beer record", body = BeerResponse),
        (status = 404, description = "No beer with this UPC"),
        (status = 500, description = "Collaborator failure"),
    ),
    tags = ["beer"],
    operation_id = "getBeerByUpc"
)]
#[get("/beer/upc/{upc}")]
pub async fn get_beer_by_upc(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let upc = path.into_inner();

    let Some(beer) = state.beers.find_by_upc(&upc).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    Ok(HttpResponse::Ok().json(BeerResponse::from(beer)))
}

/// Create a new beer.
#[utoipa::path(
    post,
    path = "/api/v2/beer",
    request_body = BeerPayload,
    responses(
        (
            status = 201,
            description = "Created; the new record's URL is in the Location header",
            headers(("Location" = String, description = "URL of the created beer")),
        ),
        (status = 400, description = "Validation failure with the full violation list", body = crate::domain::Error),
        (status = 500, description = "Collaborator failure"),
    ),
    tags = ["beer"],
    operation_id = "createBeer"
)]
#[post("/beer")]
pub async fn create_beer(
    state: web::Data<HttpState>,
    payload: web::Json<BeerPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_beer_payload(payload.into_inner())?;

    let beer = state.beers.create(draft).await?;
    debug!(beer_id = beer.id, "beer created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{BEER_BASE_PATH}/{}", beer.id)))
        .finish())
}

/// Update the beer with the given id.
///
/// Success is communicated only via status 204; the body never echoes the
/// record. The stored UPC is not changed by an update.
#[utoipa::path(
    put,
    path = "/api/v2/beer/{beer_id}",
    params(("beer_id" = i32, Path, description = "Catalogue-assigned beer id")),
    request_body = BeerPayload,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation failure with the full violation list", body = crate::domain::Error),
        (status = 404, description = "No beer with this id"),
        (status = 500, description = "Collaborator failure"),
    ),
    tags = ["beer"],
    operation_id = "updateBeer"
)]
#[put("/beer/{beer_id}")]
pub async fn update_beer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<BeerPayload>,
) -> ApiResult<HttpResponse> {
    let beer_id = path.into_inner();
    let draft = parse_beer_payload(payload.into_inner())?;

    match state.beers.update(beer_id, draft).await? {
        UpdateOutcome::Updated(beer) => {
            debug!(beer_id = beer.id, "beer updated");
            Ok(HttpResponse::NoContent().finish())
        }
        UpdateOutcome::TargetMissing => {
            debug!(beer_id, "update target missing");
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// Delete the beer with the given id.
///
/// Deleting an id that does not exist is a 404, not a silent success.
#[utoipa::path(
    delete,
    path = "/api/v2/beer/{beer_id}",
    params(("beer_id" = i32, Path, description = "Catalogue-assigned beer id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No beer with this id"),
        (status = 500, description = "Collaborator failure"),
    ),
    tags = ["beer"],
    operation_id = "deleteBeer"
)]
#[delete("/beer/{beer_id}")]
pub async fn delete_beer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let beer_id = path.into_inner();

    match state.beers.delete_by_id(beer_id).await? {
        DeleteOutcome::Deleted => Ok(HttpResponse::Ok().finish()),
        DeleteOutcome::TargetMissing => {
            debug!(beer_id, "delete target missing");
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

#[cfg(test)]
#[path = "beers_tests.rs"]
mod tests;
