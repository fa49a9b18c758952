//! Core data model for the playground.
//!
//! An [`Instance`] is one placed data structure: a kind, a display name, a
//! canvas position and an ordered sequence of string-encoded elements. The
//! element order carries the structure's meaning (front/back, top/bottom),
//! so `data` is the only representation kept and renderers read it directly.

use crate::id::InstanceId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Kinds ───────────────────────────────────────────────────────────────

/// The closed set of structures that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Array,
    Stack,
    Queue,
    Deque,
    LinkedList,
    DoublyLinkedList,
}

impl StructureKind {
    pub const ALL: [StructureKind; 6] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::Deque,
        StructureKind::LinkedList,
        StructureKind::DoublyLinkedList,
    ];

    /// Wire name, also used as the prefix of default instance names.
    pub fn as_str(self) -> &'static str {
        match self {
            StructureKind::Array => "array",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::Deque => "deque",
            StructureKind::LinkedList => "linkedlist",
            StructureKind::DoublyLinkedList => "doublylinkedlist",
        }
    }

    /// Human-readable label for pickers and headers.
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::Deque => "Deque",
            StructureKind::LinkedList => "Linked List",
            StructureKind::DoublyLinkedList => "Doubly Linked List",
        }
    }

    /// Parse a wire name or label. Case-insensitive; returns `None` for
    /// unknown kinds.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| {
            kind.as_str().eq_ignore_ascii_case(name) || kind.label().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to be non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    /// Translate by a delta, then clamp.
    #[must_use]
    pub fn moved_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy).clamped()
    }
}

// ─── Instances ───────────────────────────────────────────────────────────

/// Default value of every newly inserted element.
pub const DEFAULT_ELEMENT: &str = "0";

/// One placed data structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: InstanceId,
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub name: String,
    pub position: Position,
    pub data: Vec<String>,
}

impl Instance {
    pub fn new(id: InstanceId, kind: StructureKind, name: String, position: Position) -> Self {
        Self {
            id,
            kind,
            name,
            position: position.clamped(),
            data: Vec::new(),
        }
    }
}

/// A partial update merged into an instance by the store.
///
/// `None` fields are left untouched. The ID and kind are never patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstancePatch {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub data: Option<Vec<String>>,
}

impl InstancePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn data(data: Vec<String>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Merge into `instance`. Positions are clamped on the way in.
    pub fn apply_to(self, instance: &mut Instance) {
        if let Some(name) = self.name {
            instance.name = name;
        }
        if let Some(position) = self.position {
            instance.position = position.clamped();
        }
        if let Some(data) = self.data {
            instance.data = data;
        }
    }
}
