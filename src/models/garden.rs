use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One vegetable instance placed on the garden plane.
///
/// This is also the persisted shape: a saved layout is a JSON array of
/// `{ "id", "vegetableId", "x", "y" }` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedVegetable {
    /// Unique instance id (UUID v4).
    pub id: String,
    /// Catalog id. May reference a vegetable that no longer exists.
    pub vegetable_id: String,
    pub x: f64,
    pub y: f64,
}

/// Relationship between two vegetables, derived from catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Good,
    Bad,
    Neutral,
}

/// One classified, unordered pair of placed instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    /// Instance id of the earlier placement.
    pub first: String,
    /// Instance id of the later placement.
    pub second: String,
    pub first_vegetable: String,
    pub second_vegetable: String,
    pub relationship: Relationship,
}

/// Good and bad pairs among the placed vegetables. Neutral pairs are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PairReport {
    pub good: Vec<Pairing>,
    pub bad: Vec<Pairing>,
}

/// Placed instances to highlight while a vegetable is selected for placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Highlights {
    pub good: Vec<String>,
    pub bad: Vec<String>,
}

/// A catalog edge `from -> to` that has no matching `to -> from` edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Asymmetry {
    pub from: String,
    pub to: String,
    pub relationship: Relationship,
}
