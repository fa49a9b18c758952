//! Playground controller: the single owner of all interactive state.
//!
//! Raw input goes through the gesture classifier; the actions it resolves
//! are applied to the instance store here. Toolbar commands run through the
//! operation engine and write the new sequence back through the store.
//! Every method leaves the store consistent before returning.
//!
//! Creating an instance always takes two steps: a resolved click only opens
//! a placement request, and [`Playground::confirm_placement`] creates it.
//! While a request is pending the canvas ignores pointer input.

use crate::code::CodeBuffer;
use crate::config::PlaygroundConfig;
use crate::feedback::{Feedback, FeedbackChannel};
use crate::gesture::{GestureAction, GestureClassifier};
use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::toolbar::ToolbarView;
use crate::variables::Variables;
use dsp_core::ops;
use dsp_core::{
    Instance, InstanceId, InstancePatch, InstanceStore, Operand, Operation, Outcome, Position,
    Rejection, StructureKind,
};
use dsp_render::{Hit, hit_test};
use kurbo::Vec2;

pub struct Playground {
    store: InstanceStore,
    gestures: GestureClassifier,
    /// Canvas position awaiting confirmation.
    pending_placement: Option<Position>,
    kind_to_place: StructureKind,
    feedback: FeedbackChannel,
    pub variables: Variables,
    pub code: CodeBuffer,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(PlaygroundConfig::default())
    }
}

impl Playground {
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            store: InstanceStore::new(),
            gestures: GestureClassifier::new(config.gesture),
            pending_placement: None,
            kind_to_place: config.default_kind,
            feedback: FeedbackChannel::new(config.feedback),
            variables: Variables::new(),
            code: CodeBuffer::new(),
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    pub fn store(&self) -> &InstanceStore {
        &self.store
    }

    pub fn instances(&self) -> &[Instance] {
        self.store.instances()
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.store.get(id)
    }

    pub fn selected(&self) -> Option<&Instance> {
        self.store.selected()
    }

    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }

    /// Canvas pan offset (surface = canvas + offset).
    pub fn offset(&self) -> Vec2 {
        self.gestures.offset()
    }

    pub fn is_panning(&self) -> bool {
        self.gestures.is_panning()
    }

    pub fn pending_placement(&self) -> Option<Position> {
        self.pending_placement
    }

    pub fn kind_to_place(&self) -> StructureKind {
        self.kind_to_place
    }

    pub fn set_kind_to_place(&mut self, kind: StructureKind) {
        self.kind_to_place = kind;
    }

    pub fn toolbar(&self) -> ToolbarView {
        ToolbarView::build(&self.store, self.kind_to_place)
    }

    /// Visible feedback at `now_ms`; expired messages are dropped here.
    pub fn feedback(&mut self, now_ms: f64) -> Option<&Feedback> {
        self.feedback.current(now_ms)
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Feed one input event. Returns `true` if anything visible changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key {
            key,
            ctrl,
            shift,
            alt,
            meta,
        } = event
        {
            return match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(action) => self.dispatch_shortcut(action),
                None => false,
            };
        }

        if self.pending_placement.is_some() {
            // The confirmation overlays the canvas.
            self.gestures.reset();
            return false;
        }

        let hit = match (event, event.position()) {
            (InputEvent::PointerDown { .. }, Some(p)) => {
                hit_test(self.store.instances(), self.gestures.to_canvas(p))
            }
            _ => Hit::Canvas,
        };
        let actions = self.gestures.handle(event, hit);
        self.apply_gesture_actions(actions)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.handle_input(&InputEvent::from_pointer_down(x, y, time_ms))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.handle_input(&InputEvent::from_pointer_move(x, y, time_ms))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, time_ms: f64) -> bool {
        self.handle_input(&InputEvent::from_pointer_up(x, y, time_ms))
    }

    pub fn pointer_leave(&mut self, time_ms: f64) -> bool {
        self.handle_input(&InputEvent::from_pointer_leave(time_ms))
    }

    fn apply_gesture_actions(&mut self, actions: Vec<GestureAction>) -> bool {
        let changed = !actions.is_empty();
        for action in actions {
            match action {
                GestureAction::Select(id) => {
                    self.store.select(id);
                }
                GestureAction::Move { id, to } => {
                    self.store.update(id, InstancePatch::position(to));
                }
                // The classifier owns the offset.
                GestureAction::Pan { .. } => {}
                GestureAction::OpenPlacement { at } => {
                    log::debug!("playground: placement requested at {at:?}");
                    self.pending_placement = Some(at);
                }
            }
        }
        changed
    }

    fn dispatch_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Confirm => self.confirm_placement().is_some(),
            ShortcutAction::Cancel => {
                if self.pending_placement.is_some() {
                    self.decline_placement()
                } else {
                    let had = self.store.selected_id().is_some();
                    self.store.select(None);
                    had
                }
            }
            ShortcutAction::DeleteSelected => match self.store.selected_id() {
                Some(id) if self.pending_placement.is_none() => self.request_delete(id),
                _ => false,
            },
            ShortcutAction::PickKind(kind) => {
                let changed = self.kind_to_place != kind;
                self.kind_to_place = kind;
                changed
            }
        }
    }

    // ─── Placement confirmation ──────────────────────────────────────────

    /// Create an instance of the current kind at the pending position.
    pub fn confirm_placement(&mut self) -> Option<InstanceId> {
        let at = self.pending_placement.take()?;
        Some(self.store.create(self.kind_to_place, at))
    }

    /// Discard the pending position. Returns `false` if none was pending.
    pub fn decline_placement(&mut self) -> bool {
        self.pending_placement.take().is_some()
    }

    // ─── Toolbar operations ──────────────────────────────────────────────

    /// Run `op` on the selected instance and post the result as feedback.
    ///
    /// Returns `None` when nothing is selected (the toolbar is disabled).
    pub fn perform(
        &mut self,
        op: Operation,
        operand: &Operand,
        now_ms: f64,
    ) -> Option<Result<Outcome, Rejection>> {
        let inst = self.store.selected()?;
        let (id, kind) = (inst.id, inst.kind);
        let result = ops::apply(kind, &inst.data, op, operand);

        match &result {
            Ok(outcome) => {
                if let Some(data) = &outcome.data {
                    self.store.update(id, InstancePatch::data(data.clone()));
                }
                self.feedback.post(Feedback::success(outcome, now_ms));
            }
            Err(rejection) => self.feedback.post(Feedback::failure(rejection, now_ms)),
        }
        Some(result)
    }

    /// [`perform`](Self::perform) by toolbar label. Unknown labels are ignored.
    pub fn perform_label(
        &mut self,
        label: &str,
        operand: &Operand,
        now_ms: f64,
    ) -> Option<Result<Outcome, Rejection>> {
        let Some(op) = Operation::from_label(label) else {
            log::warn!("playground: unknown operation label {label:?}");
            return None;
        };
        self.perform(op, operand, now_ms)
    }

    // ─── Render-surface callbacks ────────────────────────────────────────

    /// Rename an instance. Blank names are ignored.
    pub fn rename(&mut self, id: InstanceId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.store.update(id, InstancePatch::name(name))
    }

    /// Replace one element. Returns `Ok(false)` for a stale ID.
    pub fn edit_element(
        &mut self,
        id: InstanceId,
        index: usize,
        value: &str,
        now_ms: f64,
    ) -> Result<bool, Rejection> {
        let Some(inst) = self.store.get(id) else {
            return Ok(false);
        };
        match ops::edit_element(&inst.data, index, value) {
            Ok(data) => Ok(self.store.update(id, InstancePatch::data(data))),
            Err(rejection) => {
                self.feedback.post(Feedback::failure(&rejection, now_ms));
                Err(rejection)
            }
        }
    }

    /// Select an instance from outside the canvas (e.g. a list panel).
    pub fn select(&mut self, id: Option<InstanceId>) -> bool {
        self.store.select(id)
    }

    pub fn request_delete(&mut self, id: InstanceId) -> bool {
        self.store.remove(id)
    }

    /// Move an instance by a delta, clamping at the canvas origin.
    pub fn request_drag_by(&mut self, id: InstanceId, dx: f64, dy: f64) -> bool {
        let Some(inst) = self.store.get(id) else {
            return false;
        };
        let to = inst.position.moved_by(dx, dy);
        self.store.update(id, InstancePatch::position(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn place(pg: &mut Playground, kind: StructureKind, x: f64, y: f64) -> InstanceId {
        pg.set_kind_to_place(kind);
        pg.pointer_down(x, y, 0.0);
        pg.pointer_up(x, y, 40.0);
        pg.confirm_placement().unwrap()
    }

    #[test]
    fn click_then_confirm_creates_instance() {
        let mut pg = Playground::default();
        pg.pointer_down(300.0, 200.0, 0.0);
        assert!(pg.instances().is_empty());
        pg.pointer_up(300.0, 200.0, 50.0);

        assert_eq!(pg.pending_placement(), Some(Position::new(300.0, 200.0)));
        let id = pg.confirm_placement().unwrap();
        let inst = pg.instance(id).unwrap();
        assert_eq!(inst.kind, StructureKind::Array);
        assert_eq!(inst.name, "array_1");
        assert_eq!(inst.position, Position::new(300.0, 200.0));
        assert_eq!(pg.pending_placement(), None);
    }

    #[test]
    fn decline_discards_position() {
        let mut pg = Playground::default();
        pg.pointer_down(10.0, 10.0, 0.0);
        pg.pointer_up(10.0, 10.0, 10.0);

        assert!(pg.decline_placement());
        assert_eq!(pg.confirm_placement(), None);
        assert!(pg.instances().is_empty());
    }

    #[test]
    fn pointer_input_is_ignored_while_confirming() {
        let mut pg = Playground::default();
        pg.pointer_down(10.0, 10.0, 0.0);
        pg.pointer_up(10.0, 10.0, 10.0);

        assert!(!pg.pointer_down(500.0, 500.0, 100.0));
        assert!(!pg.pointer_up(500.0, 500.0, 120.0));
        assert_eq!(pg.pending_placement(), Some(Position::new(10.0, 10.0)));
    }

    #[test]
    fn stack_pop_reports_value() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Stack, 0.0, 0.0);
        pg.store.update(id, InstancePatch::data(strings(&["3", "1", "4"])));
        pg.store.select(Some(id));

        let outcome = pg.perform(Operation::Pop, &Operand::none(), 1_000.0);
        assert!(matches!(outcome, Some(Ok(_))));
        assert_eq!(pg.selected().unwrap().data, strings(&["3", "1"]));
        let fb = pg.feedback(1_000.0).unwrap();
        assert_eq!(fb.message, "Pop: removed \"4\" from index 2");
    }

    #[test]
    fn perform_without_selection_is_a_noop() {
        let mut pg = Playground::default();
        place(&mut pg, StructureKind::Queue, 0.0, 0.0);
        assert_eq!(pg.perform(Operation::Enqueue, &Operand::none(), 0.0), None);
        assert!(pg.feedback(0.0).is_none());
    }

    #[test]
    fn unknown_label_is_ignored() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Queue, 0.0, 0.0);
        pg.store.select(Some(id));
        assert_eq!(pg.perform_label("Shuffle", &Operand::none(), 0.0), None);
    }

    #[test]
    fn rename_ignores_blank() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Deque, 0.0, 0.0);
        assert!(!pg.rename(id, "   "));
        assert!(pg.rename(id, " buffer "));
        assert_eq!(pg.instance(id).unwrap().name, "buffer");
    }

    #[test]
    fn edit_element_out_of_range_posts_feedback() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Array, 0.0, 0.0);
        let err = pg.edit_element(id, 0, "9", 5.0).unwrap_err();
        assert_eq!(err, Rejection::InvalidIndex { index: 0, len: 0 });
        assert!(pg.feedback(5.0).is_some_and(|fb| fb.is_failure()));

        pg.request_delete(id);
        assert_eq!(pg.edit_element(id, 0, "9", 6.0), Ok(false));
    }

    #[test]
    fn drag_by_clamps() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Array, 50.0, 50.0);
        assert!(pg.request_drag_by(id, -100.0, -100.0));
        assert_eq!(pg.instance(id).unwrap().position, Position::ORIGIN);
    }

    #[test]
    fn escape_declines_then_deselects() {
        let mut pg = Playground::default();
        let id = place(&mut pg, StructureKind::Stack, 0.0, 0.0);
        pg.store.select(Some(id));
        pg.pointer_down(600.0, 600.0, 0.0);
        pg.pointer_up(600.0, 600.0, 20.0);
        assert!(pg.pending_placement().is_some());

        assert!(pg.handle_input(&InputEvent::key("Escape")));
        assert_eq!(pg.pending_placement(), None);

        pg.store.select(Some(id));
        assert!(pg.handle_input(&InputEvent::key("Escape")));
        assert_eq!(pg.selected(), None);
        assert!(!pg.handle_input(&InputEvent::key("Escape")));
    }
}
