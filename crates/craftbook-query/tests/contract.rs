//! Behavioral contract of the query engine against the built-in dataset.

use std::sync::Arc;

use craftbook_catalog::{CatalogStore, InMemoryCatalog};
use craftbook_core::{CraftError, CraftItem, Difficulty, TimeEstimate};
use craftbook_query::QueryEngine;

fn engine() -> QueryEngine {
    QueryEngine::sample().unwrap()
}

fn names(items: &[&CraftItem]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

#[test]
fn get_round_trips_every_item() {
    let engine = engine();
    for item in engine.all() {
        assert_eq!(engine.get(&item.id).unwrap(), item);
    }
    assert_eq!(
        engine.get("fabricated_unused_id").unwrap_err(),
        CraftError::not_found("fabricated_unused_id")
    );
}

#[test]
fn category_search_ignores_case() {
    let engine = engine();
    let lower = engine.find_by_category("origami");
    assert_eq!(lower, engine.find_by_category("Origami"));
    assert_eq!(lower, engine.find_by_category("ORIGAMI"));
    assert_eq!(names(&lower), vec!["Origami Crane"]);
}

#[test]
fn category_search_never_errors() {
    assert!(engine().find_by_category("woodworking").is_empty());
    assert!(engine().find_by_category("").is_empty());
}

#[test]
fn difficulty_rejects_values_outside_vocabulary() {
    let err = engine().find_by_difficulty("extreme").unwrap_err();
    assert!(matches!(
        err,
        CraftError::InvalidArgument { ref field, ref value, .. }
            if field == "difficulty" && value == "extreme"
    ));
}

#[test]
fn difficulty_easy_returns_exactly_easy_items() {
    let engine = engine();
    let easy = engine.find_by_difficulty("easy").unwrap();
    assert_eq!(names(&easy), vec!["Paper Airplane", "Painted Rock"]);
    assert!(easy.iter().all(|i| i.difficulty == Difficulty::Easy));
    assert_eq!(easy, engine.find_by_difficulty("Easy").unwrap());
}

#[test]
fn materials_require_full_subset() {
    let engine = engine();

    let paper = engine.find_by_materials(["paper"]);
    assert_eq!(names(&paper), vec!["Paper Airplane"]);

    // Having scissors and tape is not enough without thread.
    assert!(engine.find_by_materials(["scissors", "tape"]).is_empty());

    let bracelet = engine.find_by_materials(["Embroidery Thread", "scissors", "tape", "paper"]);
    assert_eq!(names(&bracelet), vec!["Paper Airplane", "Friendship Bracelet"]);
}

#[test]
fn materials_with_no_match_is_empty_not_error() {
    assert!(engine().find_by_materials(["unicorn horn"]).is_empty());
}

#[test]
fn random_item_is_always_a_catalog_member() {
    let engine = engine();
    for _ in 0..200 {
        let item = engine.random_item().unwrap();
        assert!(engine.catalog().contains(&item.id));
    }
}

#[test]
fn random_item_on_empty_catalog_fails() {
    let engine = QueryEngine::new(Arc::new(InMemoryCatalog::empty()));
    assert_eq!(engine.random_item().unwrap_err(), CraftError::EmptyCatalog);
}

#[test]
fn estimate_single_fixed_item() {
    let total = engine().estimate_time(&["paper_airplane"]).unwrap();
    assert_eq!(total, TimeEstimate::fixed(5));
    assert_eq!(total.min(), total.max());
}

#[test]
fn estimate_sums_ranges_pairwise() {
    let total = engine()
        .estimate_time(&["origami_crane", "friendship_bracelet"])
        .unwrap();
    assert_eq!((total.min(), total.max()), (45, 65));
}

#[test]
fn estimate_counts_duplicates() {
    let total = engine()
        .estimate_time(&["paper_airplane", "paper_airplane"])
        .unwrap();
    assert_eq!(total, TimeEstimate::fixed(10));
}

#[test]
fn estimate_fails_on_unknown_id() {
    let err = engine().estimate_time(&["not_a_real_id"]).unwrap_err();
    assert_eq!(err, CraftError::not_found("not_a_real_id"));
}

#[test]
fn failed_call_does_not_affect_later_calls() {
    let engine = engine();
    let before = engine.estimate_time(&["origami_crane"]).unwrap();
    assert!(engine.estimate_time(&["origami_crane", "nope"]).is_err());
    assert!(engine.find_by_difficulty("impossible").is_err());
    assert_eq!(engine.estimate_time(&["origami_crane"]).unwrap(), before);
}

#[test]
fn repeated_calls_are_idempotent() {
    let engine = engine();
    assert_eq!(engine.list_crafts(), engine.list_crafts());
    assert_eq!(engine.find_by_category("jewelry"), engine.find_by_category("jewelry"));
    assert_eq!(
        engine.find_by_difficulty("medium").unwrap(),
        engine.find_by_difficulty("medium").unwrap()
    );
    assert_eq!(
        engine.find_by_materials(["paper"]),
        engine.find_by_materials(["paper"])
    );
    assert_eq!(
        engine.craft_details("painted_rock").unwrap(),
        engine.craft_details("painted_rock").unwrap()
    );
    assert_eq!(
        engine.estimate_breakdown(&["painted_rock"]).unwrap(),
        engine.estimate_breakdown(&["painted_rock"]).unwrap()
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = engine();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.estimate_time(&["origami_crane"]).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), TimeEstimate::Range { min: 15, max: 20 });
    }
}

#[test]
fn details_serialize_flat() {
    let engine = engine();
    let json = serde_json::to_value(engine.craft_details("origami_crane").unwrap()).unwrap();
    assert_eq!(json["id"], "origami_crane");
    assert_eq!(json["difficulty"], "medium");
    assert_eq!(json["time_required"], "15-20 minutes");
    assert_eq!(json["instructions"].as_array().unwrap().len(), 9);
}
