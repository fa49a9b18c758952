//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. Combos with
//! Ctrl/⌘ are left unbound so host (browser) shortcuts keep working.

use dsp_core::StructureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Accept the pending placement.
    Confirm,
    /// Decline the pending placement, or clear the selection.
    Cancel,
    /// Delete the selected instance.
    DeleteSelected,
    /// Choose the kind placed next (digits 1–6, in `StructureKind::ALL` order).
    PickKind(StructureKind),
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"Enter"`, `"3"`).
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if ctrl || meta || alt {
            return None;
        }

        match key {
            "Enter" => Some(ShortcutAction::Confirm),
            "Escape" => Some(ShortcutAction::Cancel),
            "Delete" | "Backspace" => Some(ShortcutAction::DeleteSelected),
            _ => Self::digit_kind(key).map(ShortcutAction::PickKind),
        }
    }

    fn digit_kind(key: &str) -> Option<StructureKind> {
        let n: usize = key.parse().ok()?;
        StructureKind::ALL.get(n.checked_sub(1)?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_modal_keys() {
        assert_eq!(
            ShortcutMap::resolve("Enter", false, false, false, false),
            Some(ShortcutAction::Confirm)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::Cancel)
        );
    }

    #[test]
    fn resolve_delete() {
        assert_eq!(
            ShortcutMap::resolve("Delete", false, false, false, false),
            Some(ShortcutAction::DeleteSelected)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, false, false),
            Some(ShortcutAction::DeleteSelected)
        );
    }

    #[test]
    fn resolve_kind_digits() {
        assert_eq!(
            ShortcutMap::resolve("1", false, false, false, false),
            Some(ShortcutAction::PickKind(StructureKind::Array))
        );
        assert_eq!(
            ShortcutMap::resolve("6", false, false, false, false),
            Some(ShortcutAction::PickKind(StructureKind::DoublyLinkedList))
        );
        assert_eq!(ShortcutMap::resolve("0", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("7", false, false, false, false), None);
    }

    #[test]
    fn host_combos_are_unbound() {
        assert_eq!(ShortcutMap::resolve("Delete", false, false, false, true), None);
        assert_eq!(ShortcutMap::resolve("1", true, false, false, false), None);
    }
}
