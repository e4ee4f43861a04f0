use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    data::vegetables::{get_all_vegetables, get_vegetable_by_id},
    logic::companion::{classify, companions_of},
    models::request::{
        link, links, ApiResponse, CompanionsResponse, ErrorResponse, Pagination,
        PaginatedResponse, RelationshipQuery, RelationshipResponse, VegetableResponse,
    },
};

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: format!("Vegetable '{id}' not found."),
    })
}

/// GET /api/vegetables
/// Returns the whole catalog.
#[utoipa::path(
    context_path = "/api",
    tag = "vegetables",
    responses((status = 200, description = "Vegetable catalog", body = crate::models::request::VegetableListResponse))
)]
#[get("/vegetables")]
pub async fn list_vegetables() -> impl Responder {
    let vegetables = get_all_vegetables();
    let total = vegetables.len();
    let items: Vec<ApiResponse<VegetableResponse>> = vegetables
        .iter()
        .map(|v| {
            let id = &v.id;
            ApiResponse::new(
                VegetableResponse {
                    vegetable: v.clone(),
                },
                links([
                    ("self", link(format!("/api/vegetables/{id}"), Method::GET)),
                    (
                        "companions",
                        link(format!("/api/vegetables/{id}/companions"), Method::GET),
                    ),
                ]),
            )
        })
        .collect();
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        links([("self", link("/api/vegetables", Method::GET))]),
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/vegetables/{id}
/// Returns a single vegetable by id.
#[utoipa::path(
    context_path = "/api",
    tag = "vegetables",
    params(("id" = String, Path, description = "Vegetable id")),
    responses(
        (status = 200, description = "Vegetable found", body = crate::models::request::VegetableApiResponse),
        (status = 404, description = "Unknown vegetable", body = ErrorResponse),
    )
)]
#[get("/vegetables/{id}")]
pub async fn get_vegetable(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match get_vegetable_by_id(&id) {
        None => not_found(&id),
        Some(vegetable) => HttpResponse::Ok().json(ApiResponse::new(
            VegetableResponse {
                vegetable: vegetable.clone(),
            },
            links([
                ("self", link(format!("/api/vegetables/{id}"), Method::GET)),
                (
                    "companions",
                    link(format!("/api/vegetables/{id}/companions"), Method::GET),
                ),
                ("collection", link("/api/vegetables", Method::GET)),
            ]),
        )),
    }
}

/// GET /api/vegetables/{id}/companions
/// Returns good and bad companions for a given vegetable.
#[utoipa::path(
    context_path = "/api",
    tag = "vegetables",
    params(("id" = String, Path, description = "Vegetable id")),
    responses(
        (status = 200, description = "Companions and antagonists", body = crate::models::request::CompanionsApiResponse),
        (status = 404, description = "Unknown vegetable", body = ErrorResponse),
    )
)]
#[get("/vegetables/{id}/companions")]
pub async fn get_companions(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let (Some(vegetable), Some((good, bad))) = (get_vegetable_by_id(&id), companions_of(&id))
    else {
        return not_found(&id);
    };
    HttpResponse::Ok().json(ApiResponse::new(
        CompanionsResponse {
            id: vegetable.id.clone(),
            name: vegetable.name.clone(),
            good,
            bad,
        },
        links([
            (
                "self",
                link(format!("/api/vegetables/{id}/companions"), Method::GET),
            ),
            ("vegetable", link(format!("/api/vegetables/{id}"), Method::GET)),
        ]),
    ))
}

/// GET /api/relationship?a={id}&b={id}
/// Classifies how `b` fares next to `a`. Unknown ids are neutral, never an error.
#[utoipa::path(
    context_path = "/api",
    tag = "vegetables",
    params(RelationshipQuery),
    responses((status = 200, description = "Relationship between the two vegetables", body = crate::models::request::RelationshipApiResponse))
)]
#[get("/relationship")]
pub async fn get_relationship(query: web::Query<RelationshipQuery>) -> impl Responder {
    let RelationshipQuery { a, b } = query.into_inner();
    let relationship = classify(&a, &b);
    HttpResponse::Ok().json(ApiResponse::new(
        RelationshipResponse { a, b, relationship },
        links([("vegetables", link("/api/vegetables", Method::GET))]),
    ))
}
