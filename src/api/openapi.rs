use utoipa::OpenApi;

use crate::models::{
    garden::{Asymmetry, Highlights, PairReport, Pairing, PlacedVegetable, Relationship},
    request::{
        CompanionInfo, CompanionsApiResponse, CompanionsResponse, ErrorResponse,
        GardenApiResponse, GardenResponse, HighlightsApiResponse, Link, Pagination,
        PairReportApiResponse, PersistApiResponse, PersistResponse, PlaceRequest,
        PlacementApiResponse, RelationshipApiResponse, RelationshipResponse,
        VegetableApiResponse, VegetableListResponse, VegetableResponse,
    },
    vegetable::Vegetable,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Friend Finder API",
        description = "Companion-planting garden planner: browse the vegetable catalog, place vegetables in a garden and see which neighbours help or harm each other.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::vegetables::list_vegetables,
        crate::api::handlers::vegetables::get_vegetable,
        crate::api::handlers::vegetables::get_companions,
        crate::api::handlers::vegetables::get_relationship,
        crate::api::handlers::garden::get_garden,
        crate::api::handlers::garden::restore_garden,
        crate::api::handlers::garden::clear_garden,
        crate::api::handlers::garden::place_vegetable,
        crate::api::handlers::garden::remove_placement,
        crate::api::handlers::garden::get_relationships,
        crate::api::handlers::garden::preview_placement,
        crate::api::handlers::garden::save_garden,
        crate::api::handlers::garden::load_garden,
    ),
    components(
        schemas(
            // Catalog
            Vegetable, VegetableResponse, CompanionInfo, CompanionsResponse,
            // Relationships
            Relationship, RelationshipResponse, Pairing, PairReport, Highlights, Asymmetry,
            // Garden
            PlacedVegetable, PlaceRequest, GardenResponse, PersistResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            VegetableApiResponse,
            VegetableListResponse,
            CompanionsApiResponse,
            RelationshipApiResponse,
            GardenApiResponse,
            PlacementApiResponse,
            PairReportApiResponse,
            HighlightsApiResponse,
            PersistApiResponse,
        )
    ),
    tags(
        (name = "vegetables", description = "Vegetable catalog: list, detail, companion lookup, pair classification"),
        (name = "garden",     description = "Garden session: place, remove, clear, restore, save and load placements"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/vegetables",
            "/api/vegetables/{id}",
            "/api/vegetables/{id}/companions",
            "/api/relationship",
            "/api/garden",
            "/api/garden/placements",
            "/api/garden/placements/{id}",
            "/api/garden/relationships",
            "/api/garden/preview",
            "/api/garden/save",
            "/api/garden/load",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
