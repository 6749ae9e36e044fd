//! HTTP server assembly.

pub mod config;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error as ActixError, web};

use crate::inbound::http::beers;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::state::HttpState;

/// Assemble the application: beer endpoints under `/api/v2` plus health
/// probes. The UPC route registers before the id route so `upc` is never
/// captured as an id path segment.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = ActixError,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(health_state)
        .service(health::ready)
        .service(health::live)
        .service(
            web::scope("/api/v2")
                .service(beers::get_beer_by_upc)
                .service(beers::get_beer_by_id)
                .service(beers::create_beer)
                .service(beers::update_beer)
                .service(beers::delete_beer),
        )
}
