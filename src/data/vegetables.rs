use std::sync::LazyLock;

use crate::models::vegetable::Vegetable;

static CATALOG: LazyLock<Vec<Vegetable>> = LazyLock::new(build_catalog);

/// Returns every vegetable of the in-memory catalog, in display order.
pub fn get_all_vegetables() -> &'static [Vegetable] {
    &CATALOG
}

/// Looks a vegetable up by id. Unknown ids yield `None`.
pub fn get_vegetable_by_id(id: &str) -> Option<&'static Vegetable> {
    CATALOG.iter().find(|v| v.id == id)
}

fn veg(
    id: &str,
    name: &str,
    icon: &str,
    color: &str,
    description: &str,
    companions: &[&str],
    antagonists: &[&str],
) -> Vegetable {
    Vegetable {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
        description: description.into(),
        companions: companions.iter().map(|c| c.to_string()).collect(),
        antagonists: antagonists.iter().map(|a| a.to_string()).collect(),
    }
}

// Every edge below must be listed on both ends: the resolver only reads the
// first vegetable's lists.
fn build_catalog() -> Vec<Vegetable> {
    vec![
        veg(
            "tomato",
            "Tomato",
            "🍅",
            "garden-tomato",
            "Versatile fruit often grown as a vegetable. Needs full sun and regular watering.",
            &["basil", "onion", "carrot", "marigold", "lettuce", "pepper"],
            &["potato", "fennel", "cabbage", "corn"],
        ),
        veg(
            "carrot",
            "Carrot",
            "🥕",
            "garden-carrot",
            "Root vegetable that prefers loose soil and cool weather.",
            &["tomato", "onion", "lettuce", "pea", "radish", "pepper"],
            &["dill", "parsnip"],
        ),
        veg(
            "lettuce",
            "Lettuce",
            "🥬",
            "garden-lettuce",
            "Leafy green that grows quickly. Prefers partial shade in hot weather.",
            &["carrot", "radish", "cucumber", "strawberry", "tomato"],
            &["broccoli"],
        ),
        veg(
            "cucumber",
            "Cucumber",
            "🥒",
            "garden-cucumber",
            "Vining plant that needs space to spread or a trellis to climb.",
            &["bean", "corn", "pea", "radish", "lettuce", "marigold"],
            &["potato"],
        ),
        veg(
            "pepper",
            "Pepper",
            "🌶️",
            "garden-pepper",
            "Warm-season crop that enjoys full sun and well-drained soil.",
            &["tomato", "basil", "onion", "carrot", "marigold"],
            &["fennel", "kohlrabi"],
        ),
        veg(
            "onion",
            "Onion",
            "🧅",
            "garden-onion",
            "Bulbous vegetable that keeps many pests away from the garden.",
            &["tomato", "carrot", "pepper", "strawberry"],
            &["bean", "pea"],
        ),
        veg(
            "bean",
            "Bean",
            "🫛",
            "garden-bean",
            "Nitrogen-fixing plant that improves soil quality.",
            &["cucumber", "corn", "radish", "potato"],
            &["onion", "garlic", "fennel"],
        ),
        veg(
            "corn",
            "Corn",
            "🌽",
            "garden-bean",
            "Tall grass that provides shade and support for other plants.",
            &["bean", "cucumber", "pumpkin", "squash"],
            &["tomato"],
        ),
        veg(
            "basil",
            "Basil",
            "🌿",
            "garden-foliage",
            "Aromatic herb that improves the flavor of tomatoes.",
            &["tomato", "pepper", "oregano"],
            &["rue"],
        ),
        veg(
            "marigold",
            "Marigold",
            "🌼",
            "accent",
            "Flowering plant that deters many garden pests.",
            &["tomato", "pepper", "squash", "cucumber"],
            &[],
        ),
        veg(
            "potato",
            "Potato",
            "🥔",
            "garden-soil",
            "Starchy tuber that shares blight with tomatoes and competes with cucumbers.",
            &["bean"],
            &["tomato", "cucumber"],
        ),
        veg(
            "fennel",
            "Fennel",
            "🌱",
            "garden-foliage",
            "Allelopathic herb that stunts most neighbours. Best grown on its own.",
            &[],
            &["tomato", "pepper", "bean", "dill"],
        ),
        veg(
            "cabbage",
            "Cabbage",
            "🥬",
            "garden-lettuce",
            "Heavy-feeding brassica that forms dense heads in cool weather.",
            &["dill"],
            &["tomato"],
        ),
        veg(
            "dill",
            "Dill",
            "🌾",
            "garden-foliage",
            "Feathery herb that attracts beneficial insects to brassicas.",
            &["cabbage", "broccoli"],
            &["carrot", "fennel"],
        ),
        veg(
            "parsnip",
            "Parsnip",
            "🥕",
            "garden-carrot",
            "Slow-growing root that sweetens after the first frost.",
            &[],
            &["carrot"],
        ),
        veg(
            "pea",
            "Pea",
            "🫛",
            "garden-bean",
            "Cool-season climber that fixes nitrogen early in spring.",
            &["carrot", "cucumber"],
            &["onion"],
        ),
        veg(
            "radish",
            "Radish",
            "🌱",
            "garden-tomato",
            "Fast root crop, handy for marking rows of slower seeds.",
            &["carrot", "lettuce", "cucumber", "bean"],
            &[],
        ),
        veg(
            "strawberry",
            "Strawberry",
            "🍓",
            "garden-tomato",
            "Low perennial fruit that spreads through runners.",
            &["lettuce", "onion", "garlic"],
            &[],
        ),
        veg(
            "broccoli",
            "Broccoli",
            "🥦",
            "garden-lettuce",
            "Brassica harvested for its flower heads. Likes rich, firm soil.",
            &["dill"],
            &["lettuce"],
        ),
        veg(
            "garlic",
            "Garlic",
            "🧄",
            "garden-onion",
            "Pungent bulb planted in autumn that repels aphids.",
            &["strawberry"],
            &["bean"],
        ),
        veg(
            "pumpkin",
            "Pumpkin",
            "🎃",
            "garden-carrot",
            "Sprawling squash whose large leaves shade out weeds.",
            &["corn"],
            &[],
        ),
        veg(
            "squash",
            "Squash",
            "🍠",
            "garden-carrot",
            "Vigorous vine that covers the ground beneath taller crops.",
            &["corn", "marigold"],
            &[],
        ),
        veg(
            "oregano",
            "Oregano",
            "🌿",
            "garden-foliage",
            "Hardy perennial herb that tolerates dry, poor soil.",
            &["basil"],
            &[],
        ),
        veg(
            "kohlrabi",
            "Kohlrabi",
            "🥬",
            "garden-lettuce",
            "Brassica grown for its swollen, crunchy stem.",
            &[],
            &["pepper"],
        ),
        veg(
            "rue",
            "Rue",
            "🌾",
            "garden-foliage",
            "Bitter ornamental herb that inhibits basil.",
            &[],
            &["basil"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for v in get_all_vegetables() {
            assert!(seen.insert(v.id.as_str()), "Duplicate id '{}'", v.id);
        }
    }

    #[test]
    fn test_every_reference_resolves() {
        for v in get_all_vegetables() {
            for other in v.companions.iter().chain(v.antagonists.iter()) {
                assert!(
                    get_vegetable_by_id(other).is_some(),
                    "'{}' references unknown vegetable '{}'",
                    v.id,
                    other
                );
            }
        }
    }

    #[test]
    fn test_no_self_relationship() {
        for v in get_all_vegetables() {
            assert!(!v.is_companion_of(&v.id), "{} is its own companion", v.id);
            assert!(!v.is_antagonist_of(&v.id), "{} is its own antagonist", v.id);
        }
    }

    #[test]
    fn test_companions_and_antagonists_are_disjoint_sets() {
        for v in get_all_vegetables() {
            let companions: HashSet<_> = v.companions.iter().collect();
            let antagonists: HashSet<_> = v.antagonists.iter().collect();
            assert_eq!(companions.len(), v.companions.len(), "{}: duplicate companion", v.id);
            assert_eq!(antagonists.len(), v.antagonists.len(), "{}: duplicate antagonist", v.id);
            assert!(
                companions.is_disjoint(&antagonists),
                "{}: an id is both companion and antagonist",
                v.id
            );
        }
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let tomato = get_vegetable_by_id("tomato").expect("tomato must exist");
        assert_eq!(tomato.name, "Tomato");
        assert!(tomato.is_companion_of("basil"));
        assert!(tomato.is_antagonist_of("potato"));
        assert!(get_vegetable_by_id("dragon-fruit").is_none());
        assert!(get_vegetable_by_id("").is_none());
    }

    #[test]
    fn test_display_order_starts_with_staples() {
        let ids: Vec<&str> = get_all_vegetables()
            .iter()
            .take(10)
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "tomato", "carrot", "lettuce", "cucumber", "pepper", "onion", "bean", "corn",
                "basil", "marigold"
            ]
        );
    }
}
