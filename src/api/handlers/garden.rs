use actix_web::{delete, get, http::Method, post, put, web, HttpResponse, Responder};
use log::{error, info, warn};

use crate::{
    api::state::GardenState,
    data::vegetables::get_vegetable_by_id,
    logic::companion::{classify_pairs, highlights},
    models::{
        garden::PlacedVegetable,
        request::{
            link, links, ApiResponse, ErrorResponse, GardenResponse, Links, PersistResponse,
            PlaceRequest, PreviewQuery,
        },
    },
    storage::{load_layout, save_layout},
};

fn garden_links() -> Links {
    links([
        ("self", link("/api/garden", Method::GET)),
        ("place", link("/api/garden/placements", Method::POST)),
        ("relationships", link("/api/garden/relationships", Method::GET)),
        ("save", link("/api/garden/save", Method::POST)),
        ("load", link("/api/garden/load", Method::POST)),
    ])
}

fn garden_response(entries: Vec<PlacedVegetable>) -> HttpResponse {
    let relationships = classify_pairs(&entries);
    HttpResponse::Ok().json(ApiResponse::new(
        GardenResponse {
            placements: entries,
            relationships,
        },
        garden_links(),
    ))
}

/// GET /api/garden
/// Returns every placement, in placement order, with their relationships.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    responses((status = 200, description = "Current garden", body = crate::models::request::GardenApiResponse))
)]
#[get("/garden")]
pub async fn get_garden(state: web::Data<GardenState>) -> impl Responder {
    let entries = state.garden().snapshot();
    garden_response(entries)
}

/// PUT /api/garden
/// Replaces the whole garden with the given placements.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    request_body = Vec<PlacedVegetable>,
    responses(
        (status = 200, description = "Garden replaced", body = crate::models::request::GardenApiResponse),
        (status = 400, description = "Malformed placements", body = ErrorResponse),
    )
)]
#[put("/garden")]
pub async fn restore_garden(
    state: web::Data<GardenState>,
    body: web::Json<Vec<PlacedVegetable>>,
) -> impl Responder {
    let entries = body.into_inner();
    state.garden().restore(entries.clone());
    garden_response(entries)
}

/// DELETE /api/garden
/// Removes every placement.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    responses((status = 204, description = "Garden cleared"))
)]
#[delete("/garden")]
pub async fn clear_garden(state: web::Data<GardenState>) -> impl Responder {
    state.garden().clear();
    HttpResponse::NoContent().finish()
}

/// POST /api/garden/placements
/// Places a vegetable at a position. Overlaps and duplicates are allowed.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    request_body = PlaceRequest,
    responses(
        (status = 201, description = "Vegetable placed", body = crate::models::request::PlacementApiResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
    )
)]
#[post("/garden/placements")]
pub async fn place_vegetable(
    state: web::Data<GardenState>,
    body: web::Json<PlaceRequest>,
) -> impl Responder {
    let PlaceRequest { vegetable_id, x, y } = body.into_inner();
    if get_vegetable_by_id(&vegetable_id).is_none() {
        warn!("placing '{vegetable_id}', which is not in the catalog");
    }
    let placed = state.garden().place(vegetable_id, x, y);
    let self_href = format!("/api/garden/placements/{}", placed.id);
    HttpResponse::Created().json(ApiResponse::new(
        placed,
        links([
            ("self", link(self_href, Method::DELETE)),
            ("garden", link("/api/garden", Method::GET)),
        ]),
    ))
}

/// DELETE /api/garden/placements/{id}
/// Removes one placement. Unknown ids are a no-op.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    params(("id" = String, Path, description = "Placement instance id")),
    responses((status = 204, description = "Placement removed (or was already absent)"))
)]
#[delete("/garden/placements/{id}")]
pub async fn remove_placement(
    state: web::Data<GardenState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    state.garden().remove(&id);
    HttpResponse::NoContent().finish()
}

/// GET /api/garden/relationships
/// Good and bad pairs among the placed vegetables.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    responses((status = 200, description = "Pairwise relationships", body = crate::models::request::PairReportApiResponse))
)]
#[get("/garden/relationships")]
pub async fn get_relationships(state: web::Data<GardenState>) -> impl Responder {
    let report = classify_pairs(state.garden().entries());
    HttpResponse::Ok().json(ApiResponse::new(
        report,
        links([
            ("self", link("/api/garden/relationships", Method::GET)),
            ("garden", link("/api/garden", Method::GET)),
        ]),
    ))
}

/// GET /api/garden/preview?vegetableId={id}
/// Placements that would be good or bad neighbours of the selected vegetable.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    params(PreviewQuery),
    responses((status = 200, description = "Placements to highlight", body = crate::models::request::HighlightsApiResponse))
)]
#[get("/garden/preview")]
pub async fn preview_placement(
    state: web::Data<GardenState>,
    query: web::Query<PreviewQuery>,
) -> impl Responder {
    let PreviewQuery { vegetable_id } = query.into_inner();
    let marked = highlights(&vegetable_id, state.garden().entries());
    HttpResponse::Ok().json(ApiResponse::new(
        marked,
        links([
            ("place", link("/api/garden/placements", Method::POST)),
            ("garden", link("/api/garden", Method::GET)),
        ]),
    ))
}

/// POST /api/garden/save
/// Persists the current garden under the configured layout key.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    responses(
        (status = 200, description = "Garden saved", body = crate::models::request::PersistApiResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/garden/save")]
pub async fn save_garden(state: web::Data<GardenState>) -> impl Responder {
    let key = state.layout_key().to_string();
    let garden = state.garden();
    match save_layout(state.storage(), &key, garden.entries()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::new(
            PersistResponse {
                key,
                count: garden.len(),
                message: None,
            },
            links([("load", link("/api/garden/load", Method::POST))]),
        )),
        Err(e) => {
            error!("failed to save garden under '{key}': {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Failed to save garden: {e}"),
            })
        }
    }
}

/// POST /api/garden/load
/// Replaces the garden with the persisted layout. Missing or malformed data
/// yields an empty garden.
#[utoipa::path(
    context_path = "/api",
    tag = "garden",
    responses((status = 200, description = "Garden loaded", body = crate::models::request::PersistApiResponse))
)]
#[post("/garden/load")]
pub async fn load_garden(state: web::Data<GardenState>) -> impl Responder {
    let key = state.layout_key().to_string();
    let mut garden = state.garden();
    let entries = load_layout(state.storage(), &key);
    let count = entries.len();
    garden.restore(entries);
    info!("garden reloaded from '{key}' with {count} placement(s)");
    let message = (count == 0).then(|| "No saved placements; the garden is empty.".to_string());
    HttpResponse::Ok().json(ApiResponse::new(
        PersistResponse {
            key,
            count,
            message,
        },
        links([("garden", link("/api/garden", Method::GET))]),
    ))
}
