//! WASM bridge for DSP: exposes the playground controller to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns drawing and
//! DOM events; every call here forwards to [`Playground`] and answers with a
//! bool ("re-render needed") or a JSON string.

mod console;

use dsp_core::{InstanceId, Operand, Rejection, StructureKind};
use dsp_editor::input::InputEvent;
use dsp_editor::{Playground, PlaygroundConfig};
use dsp_render::layout::footprint_size;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// The main WASM-facing playground controller.
#[wasm_bindgen]
pub struct DspCanvas {
    playground: Playground,
}

#[wasm_bindgen]
impl DspCanvas {
    /// Create a controller. `config_json` may override any subset of the
    /// defaults, e.g. `{"gesture":{"long_press_ms":300}}`. Invalid JSON
    /// falls back to the defaults with a warning.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        console::panic_hook_setup();

        let config = match config_json.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                serde_json::from_str(text).unwrap_or_else(|err| {
                    log::warn!("dsp-wasm: ignoring invalid config: {err}");
                    PlaygroundConfig::default()
                })
            }
            _ => PlaygroundConfig::default(),
        };

        Self {
            playground: Playground::new(config),
        }
    }

    // ─── Pointer & keyboard ─────────────────────────────────────────────

    /// Pointer coordinates are surface-relative; `time_ms` is the DOM
    /// event's `timeStamp`. Each returns `true` if a re-render is needed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.playground.pointer_down(x, y, time_ms)
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.playground.pointer_move(x, y, time_ms)
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.playground.pointer_up(x, y, time_ms)
    }

    pub fn handle_pointer_leave(&mut self, time_ms: f64) -> bool {
        self.playground.pointer_leave(time_ms)
    }

    /// Route a keyboard event through the shortcut map.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.playground.handle_input(&InputEvent::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    // ─── Snapshots ──────────────────────────────────────────────────────

    /// All instances in creation order, with their footprint size.
    pub fn get_instances_json(&self) -> String {
        let selected = self.playground.store().selected_id();
        let items: Vec<serde_json::Value> = self
            .playground
            .instances()
            .iter()
            .map(|inst| {
                let size = footprint_size(inst.kind);
                json!({
                    "id": inst.id,
                    "type": inst.kind,
                    "name": inst.name,
                    "position": inst.position,
                    "data": inst.data,
                    "width": size.width,
                    "height": size.height,
                    "selected": selected == Some(inst.id),
                })
            })
            .collect();
        serde_json::Value::Array(items).to_string()
    }

    /// Pan offset, drag/pan flags and the pending placement, if any.
    pub fn get_canvas_json(&self) -> String {
        let offset = self.playground.offset();
        let gestures = self.playground.gestures();
        json!({
            "offset": { "x": offset.x, "y": offset.y },
            "isPanning": gestures.is_panning(),
            "isDragging": gestures.is_dragging(),
            "pendingPlacement": self.playground.pending_placement(),
            "kindToPlace": self.playground.kind_to_place(),
        })
        .to_string()
    }

    pub fn get_selected_id(&self) -> String {
        self.playground
            .store()
            .selected_id()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn get_toolbar_json(&self) -> String {
        serde_json::to_string(&self.playground.toolbar()).unwrap_or_else(|_| "{}".to_string())
    }

    /// The visible feedback message, or `null` once it has expired.
    pub fn get_feedback_json(&mut self, time_ms: f64) -> String {
        match self.playground.feedback(time_ms) {
            Some(fb) => serde_json::to_string(fb).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    // ─── Placement ──────────────────────────────────────────────────────

    /// Returns the new instance's ID, or an empty string if nothing was pending.
    pub fn confirm_placement(&mut self) -> String {
        self.playground
            .confirm_placement()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn decline_placement(&mut self) -> bool {
        self.playground.decline_placement()
    }

    /// Pick the kind for the next placement by name (`"queue"`, `"Linked List"`, ...).
    pub fn set_kind_to_place(&mut self, name: &str) -> bool {
        match StructureKind::from_name(name) {
            Some(kind) => {
                self.playground.set_kind_to_place(kind);
                true
            }
            None => {
                log::warn!("dsp-wasm: unknown structure kind {name:?}");
                false
            }
        }
    }

    // ─── Operations ─────────────────────────────────────────────────────

    /// Run a toolbar operation on the selected instance.
    ///
    /// Answers `{"status":"success"|"failure"|"ignored", "code", "message"}`.
    pub fn perform_operation(
        &mut self,
        label: &str,
        index: Option<u32>,
        value: Option<String>,
        time_ms: f64,
    ) -> String {
        let operand = Operand {
            index: index.map(|i| i as usize),
            value,
        };
        let response = match self.playground.perform_label(label, &operand, time_ms) {
            Some(Ok(outcome)) => json!({
                "status": "success",
                "code": null,
                "message": outcome.to_string(),
            }),
            Some(Err(rejection)) => rejection_json(&rejection),
            None => json!({ "status": "ignored", "code": null, "message": "" }),
        };
        response.to_string()
    }

    // ─── Render-surface callbacks ───────────────────────────────────────

    // Host tokens are resolved with `InstanceId::lookup`, so unknown ones are
    // treated as stale without being recorded.

    /// Select by ID. An empty or unknown ID clears the selection.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        self.playground.select(InstanceId::lookup(id))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        InstanceId::lookup(id).is_some_and(|id| self.playground.rename(id, name))
    }

    /// Replace one element. Answers like [`perform_operation`](Self::perform_operation).
    pub fn edit_element(&mut self, id: &str, index: u32, value: &str, time_ms: f64) -> String {
        let result = match InstanceId::lookup(id) {
            Some(id) => self
                .playground
                .edit_element(id, index as usize, value, time_ms),
            None => Ok(false),
        };
        let response = match result {
            Ok(true) => json!({ "status": "success", "code": null, "message": "" }),
            Ok(false) => json!({ "status": "ignored", "code": null, "message": "" }),
            Err(rejection) => rejection_json(&rejection),
        };
        response.to_string()
    }

    pub fn request_delete(&mut self, id: &str) -> bool {
        InstanceId::lookup(id).is_some_and(|id| self.playground.request_delete(id))
    }

    pub fn request_drag_by(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        InstanceId::lookup(id).is_some_and(|id| self.playground.request_drag_by(id, dx, dy))
    }

    // ─── Variables ──────────────────────────────────────────────────────

    /// Returns the new variable's ID, or `undefined` for a blank name.
    pub fn add_variable(&mut self, name: &str) -> Option<u32> {
        self.playground.variables.add(name)
    }

    pub fn set_variable(&mut self, id: u32, value: &str) -> bool {
        self.playground.variables.set_value(id, value)
    }

    pub fn remove_variable(&mut self, id: u32) -> bool {
        self.playground.variables.remove(id)
    }

    pub fn get_variables_json(&self) -> String {
        serde_json::to_string(self.playground.variables.entries())
            .unwrap_or_else(|_| "[]".to_string())
    }

    // ─── Code panel ─────────────────────────────────────────────────────

    pub fn get_code(&self) -> String {
        self.playground.code.text().to_string()
    }

    pub fn set_code(&mut self, text: &str) {
        self.playground.code.set_text(text);
    }

    pub fn reset_code(&mut self) {
        self.playground.code.reset();
    }

    pub fn is_code_expanded(&self) -> bool {
        self.playground.code.is_expanded()
    }

    pub fn toggle_code_panel(&mut self) -> bool {
        self.playground.code.toggle_expanded()
    }
}

fn rejection_json(rejection: &Rejection) -> serde_json::Value {
    json!({
        "status": "failure",
        "code": rejection.code(),
        "message": rejection.to_string(),
    })
}

/// Install the browser console as the `log` backend.
/// `level` is a name such as `"info"` or `"debug"`.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console::init_logger(console::parse_level(level));
}

/// The structure kinds, in picker order: `[{"type":"array","label":"Array"}, ...]`.
#[wasm_bindgen]
pub fn structure_kinds_json() -> String {
    let kinds: Vec<serde_json::Value> = StructureKind::ALL
        .iter()
        .map(|kind| json!({ "type": kind, "label": kind.label() }))
        .collect();
    serde_json::Value::Array(kinds).to_string()
}
