//! Pointer gesture classifier.
//!
//! Turns raw pointer events on the canvas surface into [`GestureAction`]s:
//! select an instance, move a dragged instance, pan the canvas, or open the
//! placement confirmation. One pointer-down → pointer-up/leave cycle is one
//! session; the whole session lives in a single [`GestureState`] value that
//! each event replaces.
//!
//! # State machine
//!
//! ```text
//! Idle ─down on canvas──▶ ArmedOnEmptySpace ─moved && held──▶ Panning ─up/leave─▶ Idle
//!                               │
//!                               └─up, !moved, quick─▶ (click: open placement) ─▶ Idle
//!
//! Idle ─down on handle──▶ ArmedOnInstance ─any move─▶ Dragging ─up/leave─▶ Idle
//!
//! Idle ─down on body────▶ (select) ─▶ Idle
//! ```
//!
//! "Moved" means the pointer strayed more than `move_threshold` from where it
//! went down; "held" means more than `long_press` elapsed since then. Both are
//! required before a press on empty space becomes a pan, so a quick tap is
//! never read as one. Drags start on the first move with no threshold.
//!
//! Time is read from event timestamps only; nothing is scheduled.

use crate::config::{as_millis_f64, millis};
use crate::input::InputEvent;
use dsp_core::{InstanceId, Position};
use dsp_render::Hit;
use kurbo::{Point, Vec2};
use serde::Deserialize;
use std::time::Duration;

// ─── Configuration ───────────────────────────────────────────────────────

/// Thresholds for telling clicks, pans and drags apart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Euclidean distance (surface units) a press must travel to count as
    /// moved (default: 5).
    pub move_threshold: f64,
    /// Hold time before a moved press on empty space becomes a pan
    /// (default: 200ms).
    #[serde(rename = "long_press_ms", deserialize_with = "millis")]
    pub long_press: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: 5.0,
            long_press: Duration::from_millis(200),
        }
    }
}

// ─── State ───────────────────────────────────────────────────────────────

/// The current gesture session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No pointer is down.
    Idle,
    /// Pressed on empty canvas; could still become a click or a pan.
    ArmedOnEmptySpace {
        down_time: f64,
        down_pos: Point,
        last_pos: Point,
        moved: bool,
    },
    /// Pressed on an instance's drag handle; the first move starts the drag.
    ArmedOnInstance {
        id: InstanceId,
        grab: Vec2,
        down_time: f64,
        down_pos: Point,
    },
    /// Translating the canvas offset with the pointer.
    Panning { last_pos: Point },
    /// Repositioning an instance under the pointer.
    Dragging { id: InstanceId, grab: Vec2 },
}

/// What the most recent session turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedMode {
    #[default]
    None,
    Click,
    Pan,
    Drag,
}

/// Side effects requested by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureAction {
    /// Replace the selection (`None` clears it).
    Select(Option<InstanceId>),
    /// Put an instance at a new, already clamped, canvas position.
    Move { id: InstanceId, to: Position },
    /// The canvas offset moved by this surface delta.
    Pan { dx: f64, dy: f64 },
    /// Ask the user whether to place a new instance here (canvas coordinates).
    OpenPlacement { at: Position },
}

// ─── Classifier ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    state: GestureState,
    resolved: ResolvedMode,
    /// Canvas pan offset: surface = canvas + offset.
    offset: Vec2,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            resolved: ResolvedMode::None,
            offset: Vec2::ZERO,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Resolution of the current or most recently finished session.
    /// Reset on every pointer-down.
    pub fn resolved(&self) -> ResolvedMode {
        self.resolved
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, GestureState::Panning { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Convert a surface point to canvas coordinates.
    pub fn to_canvas(&self, p: Point) -> Point {
        p - self.offset
    }

    /// Drop the current session without emitting anything.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Feed one event. `hit` is what lies under the pointer on pointer-down
    /// and is ignored for every other event.
    pub fn handle(&mut self, event: &InputEvent, hit: Hit) -> Vec<GestureAction> {
        let mut out = Vec::new();
        let prev = self.state;
        self.state = self.step(prev, event, hit, &mut out);
        if prev != self.state {
            log::trace!("gesture: {prev:?} -> {:?}", self.state);
        }
        out
    }

    fn step(
        &mut self,
        state: GestureState,
        event: &InputEvent,
        hit: Hit,
        out: &mut Vec<GestureAction>,
    ) -> GestureState {
        match *event {
            InputEvent::PointerDown { x, y, time_ms } => {
                if state != GestureState::Idle {
                    log::trace!("gesture: pointer-down during {state:?}, restarting session");
                }
                self.on_down(Point::new(x, y), time_ms, hit, out)
            }
            InputEvent::PointerMove { x, y, time_ms } => {
                self.on_move(state, Point::new(x, y), time_ms, out)
            }
            InputEvent::PointerUp { time_ms, .. } => self.on_up(state, time_ms, out),
            InputEvent::PointerLeave { .. } => GestureState::Idle,
            InputEvent::Key { .. } => state,
        }
    }

    fn on_down(
        &mut self,
        p: Point,
        time_ms: f64,
        hit: Hit,
        out: &mut Vec<GestureAction>,
    ) -> GestureState {
        self.resolved = ResolvedMode::None;
        match hit {
            Hit::Canvas => {
                out.push(GestureAction::Select(None));
                GestureState::ArmedOnEmptySpace {
                    down_time: time_ms,
                    down_pos: p,
                    last_pos: p,
                    moved: false,
                }
            }
            Hit::Handle { id, grab } => {
                out.push(GestureAction::Select(Some(id)));
                GestureState::ArmedOnInstance {
                    id,
                    grab,
                    down_time: time_ms,
                    down_pos: p,
                }
            }
            Hit::Body { id } => {
                out.push(GestureAction::Select(Some(id)));
                GestureState::Idle
            }
        }
    }

    fn on_move(
        &mut self,
        state: GestureState,
        p: Point,
        time_ms: f64,
        out: &mut Vec<GestureAction>,
    ) -> GestureState {
        match state {
            GestureState::Idle => GestureState::Idle,
            GestureState::ArmedOnEmptySpace {
                down_time,
                down_pos,
                last_pos,
                moved,
            } => {
                let moved = moved || down_pos.distance(p) > self.config.move_threshold;
                if moved && self.held_since(down_time, time_ms) {
                    self.resolved = ResolvedMode::Pan;
                    self.pan(p - last_pos, out);
                    GestureState::Panning { last_pos: p }
                } else {
                    GestureState::ArmedOnEmptySpace {
                        down_time,
                        down_pos,
                        last_pos: p,
                        moved,
                    }
                }
            }
            GestureState::ArmedOnInstance { id, grab, .. } | GestureState::Dragging { id, grab } => {
                self.resolved = ResolvedMode::Drag;
                let target = self.to_canvas(p) - grab;
                out.push(GestureAction::Move {
                    id,
                    to: Position::new(target.x, target.y).clamped(),
                });
                GestureState::Dragging { id, grab }
            }
            GestureState::Panning { last_pos } => {
                self.pan(p - last_pos, out);
                GestureState::Panning { last_pos: p }
            }
        }
    }

    fn on_up(
        &mut self,
        state: GestureState,
        time_ms: f64,
        out: &mut Vec<GestureAction>,
    ) -> GestureState {
        if let GestureState::ArmedOnEmptySpace {
            down_time,
            down_pos,
            moved: false,
            ..
        } = state
            && !self.held_since(down_time, time_ms)
        {
            self.resolved = ResolvedMode::Click;
            let at = self.to_canvas(down_pos);
            out.push(GestureAction::OpenPlacement {
                at: Position::new(at.x, at.y),
            });
        }
        GestureState::Idle
    }

    fn held_since(&self, down_time: f64, now: f64) -> bool {
        (now - down_time).max(0.0) > as_millis_f64(self.config.long_press)
    }

    fn pan(&mut self, delta: Vec2, out: &mut Vec<GestureAction>) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta;
        out.push(GestureAction::Pan {
            dx: delta.x,
            dy: delta.y,
        });
    }
}
