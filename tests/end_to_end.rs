// Full passes: snapshot host, wishlist sources and overlay markers

mod common;

use std::fs;
use std::sync::Arc;

use common::{gate_with, SwitchableWishlist, TestSettlement};
use tradewish::config::Config;
use tradewish::pass::run_pass;
use tradewish::wishlist::{DrawDecision, WishlistCache, WishlistGate, WishlistVerdict};
use tradewish::world::{
    FileWishlist, InlineWishlist, MarkerLog, SettlementId, SettlementRecord, WorldSnapshot,
};
use tempfile::tempdir;

#[test]
fn test_hostile_turn_clears_found_marker() {
    let source = SwitchableWishlist::new("Gold*,Jade");
    let gate = gate_with(source.clone());
    let mut town = TestSettlement::trading(1, "Ashford", &["Plasteel", "Gold Bar"]);

    assert_eq!(gate.evaluate(&town), DrawDecision::Draw);
    assert_eq!(
        gate.cache().get(SettlementId(1)),
        Some(WishlistVerdict::Found)
    );

    assert_eq!(gate.evaluate(&town), DrawDecision::Draw);
    assert_eq!(town.stock_reads(), 1);
    assert_eq!(source.reads(), 1);

    town.hostile = true;
    assert_eq!(gate.evaluate(&town), DrawDecision::Skip);
    assert!(gate.cache().get(SettlementId(1)).is_none());
}

#[test]
fn test_pass_draws_exactly_the_matches() {
    let gate = WishlistGate::new(
        Arc::new(WishlistCache::new()),
        Arc::new(InlineWishlist::new("Gold*,Jade")),
    );
    let mut hostile = SettlementRecord::trading(3, "Cinder", &["Jade"]);
    hostile.hostile_to_player = Some(true);
    let mut unknown = SettlementRecord::trading(4, "Drift", &["Jade"]);
    unknown.can_trade_now = None;
    let settlements = vec![
        SettlementRecord::trading(1, "Ashford", &["Plasteel", "Gold Bar"]),
        SettlementRecord::trading(2, "Brook", &["Wood", "Steel"]),
        hostile,
        unknown,
        SettlementRecord::trading(5, "Ember", &["jade"]),
    ];

    let mut markers = MarkerLog::new();
    let summary = run_pass(&gate, &settlements, &mut markers);
    assert_eq!(summary.evaluated, 5);
    assert_eq!(summary.drawn, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(markers.ids(), vec![SettlementId(1), SettlementId(5)]);
    assert_eq!(gate.cache().len(), 3);
    let stats = gate.metrics();
    assert_eq!(stats.ineligible, 1);
    assert_eq!(stats.probe_failures, 1);
    assert_eq!(stats.matches_found, 2);
    assert_eq!(stats.hit_ratio(), Some(0.0));

    markers.take();
    let again = run_pass(&gate, settlements.iter().rev(), &mut markers);
    assert_eq!(again, summary);
    assert_eq!(markers.ids(), vec![SettlementId(5), SettlementId(1)]);
    assert_eq!(gate.metrics().cache_hits, 3);
}

#[test]
fn test_snapshot_world_round() {
    let world = WorldSnapshot::from_json(
        r#"{
            "settlements": [
                { "id": 7, "name": "Ashford", "can_trade_now": true, "hostile_to_player": false,
                  "next_restock_tick": 912000, "stock": ["Plasteel", "Gold Bar"] },
                { "id": 8, "name": "Brook", "can_trade_now": true, "hostile_to_player": false,
                  "next_restock_tick": -1, "stock": [] }
            ]
        }"#,
    )
    .unwrap();
    let gate = WishlistGate::new(
        Arc::new(WishlistCache::new()),
        Arc::new(InlineWishlist::new("Gold*")),
    );
    let mut markers = MarkerLog::new();
    let summary = run_pass(&gate, &world.settlements, &mut markers);
    assert_eq!(summary.drawn, 1);
    assert_eq!(markers.marked()[0].1, "Ashford");
    assert!(!gate.cache().contains(SettlementId(8)));
}

#[test]
fn test_pattern_file_is_reread_on_each_miss() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishlist.txt");
    fs::write(&path, "Jade\n").unwrap();

    let gate = WishlistGate::new(
        Arc::new(WishlistCache::new()),
        Arc::new(FileWishlist::open(&path).unwrap()),
    );
    let first = SettlementRecord::trading(1, "Ashford", &["Gold Bar"]);
    let second = SettlementRecord::trading(2, "Brook", &["Gold Bar"]);

    assert_eq!(gate.evaluate(&first), DrawDecision::Skip);
    fs::write(&path, "Jade\nGold*\n").unwrap();
    assert_eq!(gate.evaluate(&second), DrawDecision::Draw);

    // A vanished file degrades to no patterns without caching.
    fs::remove_file(&path).unwrap();
    let third = SettlementRecord::trading(3, "Cinder", &["Gold Bar"]);
    assert_eq!(gate.evaluate(&third), DrawDecision::Skip);
    assert!(!gate.cache().contains(SettlementId(3)));
    assert_eq!(gate.metrics().source_failures, 1);
}

#[tokio::test]
async fn test_configured_gate_from_toml() {
    let dir = tempdir().unwrap();
    let patterns = dir.path().join("wishlist.txt");
    fs::write(&patterns, "?ade").unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[wishlist]\nsource = \"file\"\npatterns_file = {:?}\n",
            patterns.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::load(config_path.to_str().unwrap()).await.unwrap();
    let source = config.wishlist.resolve_source().unwrap();
    let gate = WishlistGate::new(Arc::new(WishlistCache::new()), source)
        .with_pattern_options(config.wishlist.pattern_options());

    let world_path = dir.path().join("world.json");
    fs::write(
        &world_path,
        r#"{"settlements":[{"id":1,"name":"Ashford","can_trade_now":true,"hostile_to_player":false,"next_restock_tick":0,"stock":["Jade"]}]}"#,
    )
    .unwrap();
    let world = WorldSnapshot::load(&world_path).await.unwrap();
    let mut markers = MarkerLog::new();
    assert_eq!(run_pass(&gate, &world.settlements, &mut markers).drawn, 1);
}
