use std::fmt;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::{
    api::handlers::{
        garden::{
            clear_garden, get_garden, get_relationships, load_garden, place_vegetable,
            preview_placement, remove_placement, restore_garden, save_garden,
        },
        vegetables::{get_companions, get_relationship, get_vegetable, list_vegetables},
    },
    models::request::ErrorResponse,
};

/// Turns an extractor rejection into a 400 with an `{"error"}` body.
fn bad_request<E>(err: E) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

/// Registers every `/api` route. The caller provides `web::Data<GardenState>`.
///
/// Malformed bodies, query strings and path segments all answer 400 with a
/// JSON error body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
            .app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
            .service(list_vegetables)
            .service(get_vegetable)
            .service(get_companions)
            .service(get_relationship)
            .service(get_garden)
            .service(restore_garden)
            .service(clear_garden)
            .service(place_vegetable)
            .service(remove_placement)
            .service(get_relationships)
            .service(preview_placement)
            .service(save_garden)
            .service(load_garden),
    );
}
