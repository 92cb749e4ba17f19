//! Integration test: classic still lifes, oscillators and spaceships.
//!
//! Each pattern is loaded from `cgol_test_utils::fixtures` and stepped
//! through at least one full period, checking the exact grid after every
//! generation that has a known shape.

use cgol_core::{Cell, Generation};
use cgol_engine::{EngineConfig, LifeEngine, LifeRule, StepMetrics};
use cgol_space::EdgeBehavior;
use cgol_test_utils::fixtures::{
    BEEHIVE, BLINKER_H, BLINKER_V, BLOCK, GLIDER, GLIDER_CELLS, TOAD_A, TOAD_B,
};
use cgol_test_utils::{engine_ascii, engine_from_ascii, engine_from_ascii_with};

fn torus() -> EngineConfig {
    EngineConfig::default().with_edge(EdgeBehavior::Wrap)
}

// ── Still lifes ────────────────────────────────────────────────

#[test]
fn block_is_still() {
    let mut engine = engine_from_ascii(BLOCK);
    for _ in 0..5 {
        let m = engine.step();
        assert!(m.is_stable());
        assert_eq!(engine_ascii(&engine), BLOCK);
    }
    assert_eq!(engine.generation(), Generation(5));
}

#[test]
fn beehive_is_still() {
    let mut engine = engine_from_ascii(BEEHIVE);
    engine.step_n(3);
    assert_eq!(engine_ascii(&engine), BEEHIVE);
}

#[test]
fn block_in_corner_survives_absorbing_edges() {
    let mut engine = engine_from_ascii(&["##", "##"]);
    engine.step();
    assert_eq!(engine.population(), 4);
}

// ── Oscillators ────────────────────────────────────────────────

#[test]
fn blinker_alternates() {
    let mut engine = engine_from_ascii(BLINKER_H);
    let m = engine.step();
    assert_eq!(engine_ascii(&engine), BLINKER_V);
    assert_eq!(
        m,
        StepMetrics {
            births: 2,
            deaths: 2,
            population: 3
        }
    );
    engine.step();
    assert_eq!(engine_ascii(&engine), BLINKER_H);
}

#[test]
fn blinker_on_three_by_three_grid() {
    let mut engine = LifeEngine::with_size(3, 3).unwrap();
    for x in 0..3 {
        engine.set_cell(x, 1, Cell::Alive).unwrap();
    }
    engine.step();
    for y in 0..3 {
        assert_eq!(engine.get_cell(1, y), Cell::Alive);
        assert_eq!(engine.get_cell(0, y), Cell::Dead);
        assert_eq!(engine.get_cell(2, y), Cell::Dead);
    }
}

#[test]
fn toad_has_period_two() {
    let mut engine = engine_from_ascii(TOAD_A);
    engine.step();
    assert_eq!(engine_ascii(&engine), TOAD_B);
    engine.step();
    assert_eq!(engine_ascii(&engine), TOAD_A);
}

#[test]
fn lone_cell_and_pair_die() {
    let mut engine = engine_from_ascii(&["....", ".#..", "..#.", "...."]);
    let m = engine.step();
    assert_eq!(engine.population(), 0);
    assert_eq!(m.deaths, 2);
}

// ── Spaceships ─────────────────────────────────────────────────

#[test]
fn glider_translates_diagonally() {
    let mut engine = engine_from_ascii_with(torus(), GLIDER);
    engine.step_n(4);
    assert_eq!(engine.population(), 5);
    for (x, y) in GLIDER_CELLS {
        assert_eq!(engine.get_cell(x + 1, y + 1), Cell::Alive);
    }
}

#[test]
fn glider_circumnavigates_torus() {
    let mut engine = engine_from_ascii_with(torus(), GLIDER);
    let start = engine.fingerprint();
    // 8 cells of travel at c/4.
    engine.step_n(32);
    assert_eq!(engine.fingerprint(), start);
    assert_eq!(engine_ascii(&engine), GLIDER);
}

#[test]
fn glider_stops_at_absorbing_wall() {
    let mut engine = engine_from_ascii(GLIDER);
    engine.step_n(64);
    // Crashes into the corner and settles into a block.
    assert_eq!(engine.population(), 4);
    let before = engine.fingerprint();
    assert!(engine.step().is_stable());
    assert_eq!(engine.fingerprint(), before);
}

// ── Rules ──────────────────────────────────────────────────────

#[test]
fn highlife_replicator_differs_from_conway() {
    // Six neighbours: HighLife births, Conway does not.
    let rows = ["###", "#.#", "#.."];
    let mut conway = engine_from_ascii(&rows);
    let mut high = engine_from_ascii_with(
        EngineConfig {
            rule: LifeRule::HIGH_LIFE,
            ..EngineConfig::default()
        },
        &rows,
    );
    conway.step();
    high.step();
    assert_eq!(conway.get_cell(1, 1), Cell::Dead);
    assert_eq!(high.get_cell(1, 1), Cell::Alive);
}
