//! Toolbar model.
//!
//! The toolbar shows the kind of the selected instance (or, with nothing
//! selected, the kind that will be placed next) and that kind's operations.
//! Operations are only enabled while an instance is selected.

use dsp_core::ops::operations_for;
use dsp_core::{InstanceStore, Operation, StructureKind};
use serde::Serialize;

const NO_SELECTION_HINT: &str = "Select a data structure instance first";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarAction {
    #[serde(skip)]
    pub op: Operation,
    pub label: &'static str,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarView {
    pub kind: StructureKind,
    pub kind_label: &'static str,
    /// `true` while an instance is selected: its kind can't be changed here.
    pub kind_locked: bool,
    /// Name of the selected instance.
    pub working_with: Option<String>,
    pub actions: Vec<ToolbarAction>,
}

impl ToolbarView {
    pub fn build(store: &InstanceStore, kind_to_place: StructureKind) -> Self {
        let selected = store.selected();
        let kind = selected.map_or(kind_to_place, |inst| inst.kind);
        let enabled = selected.is_some();

        let actions = operations_for(kind)
            .iter()
            .map(|&op| ToolbarAction {
                op,
                label: op.label(),
                enabled,
                hint: (!enabled).then_some(NO_SELECTION_HINT),
            })
            .collect();

        Self {
            kind,
            kind_label: kind.label(),
            kind_locked: selected.is_some(),
            working_with: selected.map(|inst| inst.name.clone()),
            actions,
        }
    }

    pub fn action(&self, label: &str) -> Option<&ToolbarAction> {
        self.actions.iter().find(|a| a.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsp_core::Position;
    use pretty_assertions::assert_eq;

    #[test]
    fn shows_kind_to_place_disabled_without_selection() {
        let store = InstanceStore::new();
        let view = ToolbarView::build(&store, StructureKind::Queue);

        assert_eq!(view.kind, StructureKind::Queue);
        assert!(!view.kind_locked);
        let labels: Vec<_> = view.actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Enqueue", "Dequeue", "Front"]);
        assert!(view.actions.iter().all(|a| !a.enabled && a.hint.is_some()));
    }

    #[test]
    fn follows_selected_instance_kind() {
        let mut store = InstanceStore::new();
        let id = store.create(StructureKind::DoublyLinkedList, Position::ORIGIN);
        store.select(Some(id));

        let view = ToolbarView::build(&store, StructureKind::Array);
        assert_eq!(view.kind, StructureKind::DoublyLinkedList);
        assert!(view.kind_locked);
        assert_eq!(view.working_with.as_deref(), Some("doublylinkedlist_1"));
        assert!(view.action("Reverse").is_some_and(|a| a.enabled));
        assert!(view.action("Pop").is_none());
    }

    #[test]
    fn serializes_for_hosts() {
        let store = InstanceStore::new();
        let view = ToolbarView::build(&store, StructureKind::Stack);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "stack");
        assert_eq!(json["actions"][0]["label"], "Push");
        assert_eq!(json["actions"][0]["enabled"], false);
    }
}
