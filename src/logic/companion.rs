use crate::data::vegetables::{get_all_vegetables, get_vegetable_by_id};
use crate::models::{
    garden::{Asymmetry, Highlights, PairReport, Pairing, PlacedVegetable, Relationship},
    request::CompanionInfo,
    vegetable::Vegetable,
};

/// Classifies how `b` fares next to `a`.
///
/// Only `a`'s lists are consulted; the catalog keeps them symmetric.
/// Unknown ids on either side are neutral.
pub fn classify(a: &str, b: &str) -> Relationship {
    match (get_vegetable_by_id(a), get_vegetable_by_id(b)) {
        (Some(va), Some(vb)) => relationship_between(va, vb),
        _ => Relationship::Neutral,
    }
}

fn relationship_between(a: &Vegetable, b: &Vegetable) -> Relationship {
    if a.is_companion_of(&b.id) {
        Relationship::Good
    } else if a.is_antagonist_of(&b.id) {
        Relationship::Bad
    } else {
        Relationship::Neutral
    }
}

/// Classifies every unordered pair of placed vegetables exactly once, in
/// placement order. Placements whose vegetable is missing from the catalog
/// are skipped.
pub fn classify_pairs(placed: &[PlacedVegetable]) -> PairReport {
    let resolved: Vec<(&PlacedVegetable, &Vegetable)> = placed
        .iter()
        .filter_map(|p| get_vegetable_by_id(&p.vegetable_id).map(|v| (p, v)))
        .collect();

    let mut report = PairReport::default();
    for (i, (first, va)) in resolved.iter().enumerate() {
        for (second, vb) in &resolved[i + 1..] {
            let relationship = relationship_between(va, vb);
            let pairing = Pairing {
                first: first.id.clone(),
                second: second.id.clone(),
                first_vegetable: va.name.clone(),
                second_vegetable: vb.name.clone(),
                relationship,
            };
            match relationship {
                Relationship::Good => report.good.push(pairing),
                Relationship::Bad => report.bad.push(pairing),
                Relationship::Neutral => {}
            }
        }
    }
    report
}

/// Placed instances that would be good or bad neighbours of `vegetable_id`.
pub fn highlights(vegetable_id: &str, placed: &[PlacedVegetable]) -> Highlights {
    let mut out = Highlights::default();
    for p in placed {
        match classify(vegetable_id, &p.vegetable_id) {
            Relationship::Good => out.good.push(p.id.clone()),
            Relationship::Bad => out.bad.push(p.id.clone()),
            Relationship::Neutral => {}
        }
    }
    out
}

/// Resolved good and bad companions of a catalog vegetable.
/// Returns `None` when the id is unknown; dangling references are dropped.
pub fn companions_of(id: &str) -> Option<(Vec<CompanionInfo>, Vec<CompanionInfo>)> {
    let vegetable = get_vegetable_by_id(id)?;
    Some((
        resolve_infos(&vegetable.companions),
        resolve_infos(&vegetable.antagonists),
    ))
}

fn resolve_infos(ids: &[String]) -> Vec<CompanionInfo> {
    ids.iter()
        .filter_map(|cid| get_vegetable_by_id(cid))
        .map(|v| CompanionInfo {
            id: v.id.clone(),
            name: v.name.clone(),
            icon: v.icon.clone(),
        })
        .collect()
}

/// Lists every edge of `catalog` whose reverse edge is missing or differs.
/// Edges pointing outside the catalog are ignored.
pub fn find_asymmetries(catalog: &[Vegetable]) -> Vec<Asymmetry> {
    let lookup = |id: &str| catalog.iter().find(|v| v.id == id);
    let mut found = Vec::new();
    for v in catalog {
        let edges = v
            .companions
            .iter()
            .map(|id| (id, Relationship::Good))
            .chain(v.antagonists.iter().map(|id| (id, Relationship::Bad)));
        for (other_id, relationship) in edges {
            let Some(other) = lookup(other_id.as_str()) else {
                continue;
            };
            if relationship_between(other, v) != relationship {
                found.push(Asymmetry {
                    from: v.id.clone(),
                    to: other.id.clone(),
                    relationship,
                });
            }
        }
    }
    found
}

/// Asymmetries of the built-in catalog.
pub fn catalog_asymmetries() -> Vec<Asymmetry> {
    find_asymmetries(get_all_vegetables())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: &str, vegetable_id: &str) -> PlacedVegetable {
        PlacedVegetable {
            id: id.into(),
            vegetable_id: vegetable_id.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    #[test]
    fn test_good_companion() {
        // basil is a good companion of tomato
        assert_eq!(classify("tomato", "basil"), Relationship::Good);
    }

    #[test]
    fn test_bad_companion() {
        assert_eq!(classify("tomato", "potato"), Relationship::Bad);
        assert_eq!(classify("tomato", "fennel"), Relationship::Bad);
    }

    #[test]
    fn test_neutral_pair() {
        // lettuce and basil have no relationship either way
        assert_eq!(classify("lettuce", "basil"), Relationship::Neutral);
    }

    #[test]
    fn test_self_is_neutral() {
        for v in get_all_vegetables() {
            assert_eq!(
                classify(&v.id, &v.id),
                Relationship::Neutral,
                "{} must not relate to itself",
                v.id
            );
        }
    }

    #[test]
    fn test_unknown_ids_are_neutral() {
        assert_eq!(classify("tomato", "dragon"), Relationship::Neutral);
        assert_eq!(classify("dragon", "tomato"), Relationship::Neutral);
        assert_eq!(classify("dragon", "unicorn"), Relationship::Neutral);
    }

    #[test]
    fn test_classification_is_symmetric_over_catalog() {
        let all = get_all_vegetables();
        for a in all {
            for b in all {
                let ab = classify(&a.id, &b.id);
                assert_eq!(ab, classify(&b.id, &a.id), "{} / {} is asymmetric", a.id, b.id);
                if ab == Relationship::Good {
                    assert!(a.is_companion_of(&b.id));
                }
                if ab == Relationship::Bad {
                    assert!(a.is_antagonist_of(&b.id));
                }
            }
        }
    }

    #[test]
    fn test_catalog_has_no_asymmetry() {
        assert!(catalog_asymmetries().is_empty(), "{:?}", catalog_asymmetries());
    }

    #[test]
    fn test_find_asymmetries_flags_one_sided_edges() {
        fn mk(id: &str, companions: &[&str], antagonists: &[&str]) -> Vegetable {
            Vegetable {
                id: id.into(),
                name: id.into(),
                icon: String::new(),
                color: String::new(),
                description: String::new(),
                companions: companions.iter().map(|s| s.to_string()).collect(),
                antagonists: antagonists.iter().map(|s| s.to_string()).collect(),
            }
        }
        let catalog = vec![
            mk("corn", &[], &["tomato"]),
            mk("tomato", &["basil"], &[]),
            mk("basil", &["tomato"], &["ghost"]),
        ];
        let found = find_asymmetries(&catalog);
        assert_eq!(
            found,
            vec![Asymmetry {
                from: "corn".into(),
                to: "tomato".into(),
                relationship: Relationship::Bad,
            }]
        );
    }

    #[test]
    fn test_tomato_and_basil_make_one_good_pair() {
        let report = classify_pairs(&[placed("p1", "tomato"), placed("p2", "basil")]);
        assert_eq!(report.good.len(), 1);
        assert!(report.bad.is_empty());
        let pair = &report.good[0];
        assert_eq!(pair.first, "p1");
        assert_eq!(pair.second, "p2");
        assert_eq!(pair.first_vegetable, "Tomato");
        assert_eq!(pair.second_vegetable, "Basil");
        assert_eq!(pair.relationship, Relationship::Good);
    }

    #[test]
    fn test_tomato_and_potato_make_one_bad_pair() {
        let report = classify_pairs(&[placed("p1", "tomato"), placed("p2", "potato")]);
        assert!(report.good.is_empty());
        assert_eq!(report.bad.len(), 1);
    }

    #[test]
    fn test_each_unordered_pair_counted_once() {
        // tomato-basil good, tomato-potato bad, basil-potato neutral
        let report = classify_pairs(&[
            placed("a", "tomato"),
            placed("b", "basil"),
            placed("c", "potato"),
        ]);
        assert_eq!(report.good.len(), 1);
        assert_eq!(report.bad.len(), 1);
        assert_eq!((report.bad[0].first.as_str(), report.bad[0].second.as_str()), ("a", "c"));
    }

    #[test]
    fn test_duplicate_vegetables_are_neutral_to_each_other() {
        let report = classify_pairs(&[placed("a", "tomato"), placed("b", "tomato")]);
        assert_eq!(report, PairReport::default());
    }

    #[test]
    fn test_unknown_placements_are_skipped() {
        let report = classify_pairs(&[
            placed("a", "tomato"),
            placed("ghost", "mandrake"),
            placed("b", "basil"),
        ]);
        assert_eq!(report.good.len(), 1);
        assert!(report
            .good
            .iter()
            .all(|p| p.first != "ghost" && p.second != "ghost"));
    }

    #[test]
    fn test_empty_and_single_garden_have_no_pairs() {
        assert_eq!(classify_pairs(&[]), PairReport::default());
        assert_eq!(classify_pairs(&[placed("a", "tomato")]), PairReport::default());
    }

    #[test]
    fn test_highlights_for_selected_vegetable() {
        let garden = [
            placed("a", "basil"),
            placed("b", "potato"),
            placed("c", "lettuce"),
            placed("d", "oregano"),
        ];
        let h = highlights("tomato", &garden);
        assert_eq!(h.good, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(h.bad, vec!["b".to_string()]);
    }

    #[test]
    fn test_highlights_unknown_selection_is_empty() {
        let h = highlights("mandrake", &[placed("a", "basil")]);
        assert_eq!(h, Highlights::default());
    }

    #[test]
    fn test_companions_of_resolves_names() {
        let (good, bad) = companions_of("basil").expect("basil must exist");
        let good_ids: Vec<&str> = good.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(good_ids, ["tomato", "pepper", "oregano"]);
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].name, "Rue");
    }

    #[test]
    fn test_companions_of_unknown() {
        assert!(companions_of("legume-inexistant").is_none());
    }
}
