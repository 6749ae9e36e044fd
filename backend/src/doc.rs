//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! beer endpoints, the health probes, and the schemas they reference. The
//! document backs Swagger UI in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brewery backend API",
        description = "Non-blocking HTTP interface for the beer catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::beers::get_beer_by_id,
        crate::inbound::http::beers::get_beer_by_upc,
        crate::inbound::http::beers::create_beer,
        crate::inbound::http::beers::update_beer,
        crate::inbound::http::beers::delete_beer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::beers::BeerPayload,
        crate::inbound::http::beers::BeerResponse,
        crate::domain::BeerStyle,
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::Violation,
    )),
    tags(
        (name = "beer", description = "Beer catalogue operations"),
        (name = "health", description = "Readiness and liveness probes")
    )
)]
pub struct ApiDoc;
