//! Instance store: the live set of placed instances plus the current selection.
//!
//! Insertion order is preserved and doubles as z-order (last = topmost).
//! The selection is only an ID; reading it always goes through the live set,
//! so a selected instance can never show stale fields.
//!
//! Stale IDs are tolerated everywhere: updating, removing or selecting an
//! instance that no longer exists is a silent no-op.

use crate::id::InstanceId;
use crate::model::{Instance, InstancePatch, Position, StructureKind};

#[derive(Debug, Clone, Default)]
pub struct InstanceStore {
    instances: Vec<Instance>,
    selected: Option<InstanceId>,
}

impl InstanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new, empty instance and return its fresh ID.
    ///
    /// The default name is `{kind}_{count + 1}`, counting live instances.
    pub fn create(&mut self, kind: StructureKind, position: Position) -> InstanceId {
        let id = InstanceId::fresh();
        let name = format!("{}_{}", kind.as_str(), self.instances.len() + 1);
        log::debug!("store: create {id} ({name}) at {position:?}");
        self.instances.push(Instance::new(id, kind, name, position));
        id
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|inst| inst.id == id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// All live instances in insertion (z-) order.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Merge `patch` into the instance. Returns `false` if `id` is stale.
    pub fn update(&mut self, id: InstanceId, patch: InstancePatch) -> bool {
        match self.instances.iter_mut().find(|inst| inst.id == id) {
            Some(inst) => {
                patch.apply_to(inst);
                true
            }
            None => {
                log::debug!("store: update of stale id {id} ignored");
                false
            }
        }
    }

    /// Delete the instance, clearing the selection if it pointed at it.
    /// Returns `false` if `id` is stale.
    pub fn remove(&mut self, id: InstanceId) -> bool {
        let Some(pos) = self.instances.iter().position(|inst| inst.id == id) else {
            log::debug!("store: remove of stale id {id} ignored");
            return false;
        };
        self.instances.remove(pos);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("store: removed {id}");
        true
    }

    /// Set the selection. Selecting an unknown ID is the same as selecting
    /// nothing. Returns whether an instance is now selected.
    pub fn select(&mut self, id: Option<InstanceId>) -> bool {
        self.selected = id.filter(|id| self.contains(*id));
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<InstanceId> {
        self.selected
    }

    /// The selected instance, looked up in the live set.
    pub fn selected(&self) -> Option<&Instance> {
        self.selected.and_then(|id| self.get(id))
    }
}
