use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::{
    garden::{Highlights, PairReport, PlacedVegetable, Relationship},
    vegetable::Vegetable,
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Builds a `Links` map from `(relation, link)` pairs.
pub fn links<const N: usize>(entries: [(&str, Link); N]) -> Links {
    entries
        .into_iter()
        .map(|(rel, l)| (rel.to_string(), l))
        .collect()
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    VegetableApiResponse = ApiResponse<VegetableResponse>,
    CompanionsApiResponse = ApiResponse<CompanionsResponse>,
    RelationshipApiResponse = ApiResponse<RelationshipResponse>,
    GardenApiResponse = ApiResponse<GardenResponse>,
    PlacementApiResponse = ApiResponse<PlacedVegetable>,
    PairReportApiResponse = ApiResponse<PairReport>,
    HighlightsApiResponse = ApiResponse<Highlights>,
    PersistApiResponse = ApiResponse<PersistResponse>,
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(VegetableListResponse = PaginatedResponse<VegetableApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Vegetable domain struct for use in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VegetableResponse {
    #[serde(flatten)]
    pub vegetable: Vegetable,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionsResponse {
    pub id: String,
    pub name: String,
    pub good: Vec<CompanionInfo>,
    pub bad: Vec<CompanionInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Query string of `GET /api/relationship`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelationshipQuery {
    /// Vegetable id whose companion lists are consulted.
    pub a: String,
    /// Vegetable id looked up in `a`'s lists.
    pub b: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelationshipResponse {
    pub a: String,
    pub b: String,
    pub relationship: Relationship,
}

/// Body of `POST /api/garden/placements`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub vegetable_id: String,
    pub x: f64,
    pub y: f64,
}

/// Query string of `GET /api/garden/preview`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PreviewQuery {
    /// Vegetable currently selected for placement.
    pub vegetable_id: String,
}

/// Current garden: placements in placement order and their relationships.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GardenResponse {
    pub placements: Vec<PlacedVegetable>,
    pub relationships: PairReport,
}

/// Result of a save or load against the key-value store.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersistResponse {
    pub key: String,
    pub count: usize,
    pub message: Option<String>,
}
