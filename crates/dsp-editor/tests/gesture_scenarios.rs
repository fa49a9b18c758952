//! Integration tests: pointer gestures through the playground (dsp-editor ↔ dsp-render).
//!
//! Drives raw pointer events into `Playground`, so hit testing, the gesture
//! classifier and the instance store are exercised together.

use dsp_core::{InstanceId, Position, StructureKind};
use dsp_editor::Playground;
use dsp_editor::gesture::{GestureState, ResolvedMode};
use dsp_render::layout::HEADER_HEIGHT;
use kurbo::Vec2;
use pretty_assertions::assert_eq;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Place an instance via click + confirm at a quiet time far from other taps.
fn place(pg: &mut Playground, kind: StructureKind, x: f64, y: f64) -> InstanceId {
    pg.set_kind_to_place(kind);
    pg.pointer_down(x, y, 0.0);
    pg.pointer_up(x, y, 10.0);
    pg.confirm_placement().expect("placement should be pending")
}

// ─── Click vs pan ───────────────────────────────────────────────────────

#[test]
fn still_tap_on_empty_space_resolves_to_click() {
    init_logs();
    let mut pg = Playground::default();

    pg.pointer_down(120.0, 90.0, 1_000.0);
    pg.pointer_up(120.0, 90.0, 1_050.0);

    assert_eq!(pg.gestures().resolved(), ResolvedMode::Click);
    assert!(!pg.is_panning());
    assert_eq!(pg.pending_placement(), Some(Position::new(120.0, 90.0)));
}

#[test]
fn hold_then_move_resolves_to_pan() {
    init_logs();
    let mut pg = Playground::default();

    pg.pointer_down(100.0, 100.0, 0.0);
    pg.pointer_move(110.0, 100.0, 250.0);

    assert!(pg.is_panning());
    assert_eq!(pg.gestures().resolved(), ResolvedMode::Pan);
    assert_eq!(pg.offset(), Vec2::new(10.0, 0.0));

    pg.pointer_up(110.0, 100.0, 300.0);
    assert!(!pg.is_panning());
    assert_eq!(pg.pending_placement(), None);
    // Pan stops where it was left.
    assert_eq!(pg.offset(), Vec2::new(10.0, 0.0));
}

#[test]
fn pressing_empty_space_clears_selection() {
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Stack, 0.0, 0.0);
    pg.pointer_down(50.0, 80.0, 100.0);
    pg.pointer_up(50.0, 80.0, 110.0);
    assert_eq!(pg.selected().map(|i| i.id), Some(id));

    pg.pointer_down(700.0, 700.0, 200.0);
    assert_eq!(pg.selected(), None);
}

// ─── Instance selection & drag ──────────────────────────────────────────

#[test]
fn body_press_selects_instance() {
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Queue, 100.0, 100.0);

    pg.pointer_down(150.0, 100.0 + HEADER_HEIGHT + 20.0, 500.0);
    assert_eq!(pg.selected().map(|i| i.id), Some(id));
    assert_eq!(pg.gestures().state(), GestureState::Idle);

    // Moving afterwards neither drags nor pans.
    pg.pointer_move(400.0, 400.0, 900.0);
    assert_eq!(
        pg.instance(id).unwrap().position,
        Position::new(100.0, 100.0)
    );
    assert!(!pg.is_panning());
}

#[test]
fn handle_press_drags_on_any_movement() {
    init_logs();
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Array, 100.0, 100.0);

    pg.pointer_down(120.0, 110.0, 5_000.0);
    assert!(matches!(
        pg.gestures().state(),
        GestureState::ArmedOnInstance { .. }
    ));

    // One unit, long after the press: still a drag, never a pan.
    pg.pointer_move(121.0, 110.0, 9_000.0);
    assert!(pg.gestures().is_dragging());
    assert_eq!(pg.gestures().resolved(), ResolvedMode::Drag);
    assert_eq!(pg.instance(id).unwrap().position, Position::new(101.0, 100.0));
    assert_eq!(pg.offset(), Vec2::ZERO);
}

#[test]
fn drag_past_origin_clamps_to_zero() {
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Stack, 50.0, 50.0);

    pg.pointer_down(60.0, 60.0, 100.0);
    pg.pointer_move(-40.0, -40.0, 116.0);
    pg.pointer_up(-40.0, -40.0, 130.0);

    assert_eq!(pg.instance(id).unwrap().position, Position::ORIGIN);
    assert_eq!(pg.pending_placement(), None);
}

#[test]
fn leaving_the_canvas_before_release_places_nothing() {
    let mut pg = Playground::default();

    pg.pointer_down(250.0, 250.0, 0.0);
    pg.pointer_leave(20.0);
    pg.pointer_up(250.0, 250.0, 30.0);

    assert_eq!(pg.pending_placement(), None);
    assert_eq!(pg.gestures().resolved(), ResolvedMode::None);
}

#[test]
fn leaving_the_canvas_stops_a_drag() {
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Deque, 0.0, 0.0);

    pg.pointer_down(10.0, 10.0, 100.0);
    pg.pointer_move(30.0, 30.0, 110.0);
    pg.pointer_leave(120.0);
    pg.pointer_move(300.0, 300.0, 130.0);

    assert_eq!(pg.instance(id).unwrap().position, Position::new(20.0, 20.0));
    assert_eq!(pg.gestures().state(), GestureState::Idle);
}

// ─── Pan offset & coordinates ───────────────────────────────────────────

#[test]
fn hit_testing_and_placement_follow_the_pan_offset() {
    let mut pg = Playground::default();
    let id = place(&mut pg, StructureKind::Array, 0.0, 0.0);

    // Pan the canvas 300 right, 200 down.
    pg.pointer_down(400.0, 400.0, 1_000.0);
    pg.pointer_move(700.0, 600.0, 1_300.0);
    pg.pointer_up(700.0, 600.0, 1_310.0);
    assert_eq!(pg.offset(), Vec2::new(300.0, 200.0));

    // The instance now shows at surface (300, 200).
    pg.pointer_down(310.0, 280.0, 2_000.0);
    assert_eq!(pg.selected().map(|i| i.id), Some(id));
    pg.pointer_up(310.0, 280.0, 2_010.0);

    // A click at surface (900, 500) places at canvas (600, 300).
    pg.pointer_down(900.0, 500.0, 3_000.0);
    pg.pointer_up(900.0, 500.0, 3_020.0);
    assert_eq!(pg.pending_placement(), Some(Position::new(600.0, 300.0)));
}
