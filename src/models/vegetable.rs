use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry. Companion and antagonist lists hold ids of other catalog
/// entries and are kept symmetric by the catalog data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vegetable {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Palette token used by the front-end to tint the vegetable.
    pub color: String,
    pub description: String,
    pub companions: Vec<String>,
    pub antagonists: Vec<String>,
}

impl Vegetable {
    pub fn is_companion_of(&self, other_id: &str) -> bool {
        self.companions.iter().any(|c| c == other_id)
    }

    pub fn is_antagonist_of(&self, other_id: &str) -> bool {
        self.antagonists.iter().any(|a| a == other_id)
    }
}
