//! Structure operation engine.
//!
//! Every toolbar operation maps to one primitive [`Effect`] on the element
//! sequence, and each kind exposes a fixed subset of operations through a
//! static table. Behaviour is selected by looking the kind up in that table,
//! so the empty-structure guard, index defaulting and default-fill value
//! live in exactly one place ([`apply`]).
//!
//! | Kind | Operations |
//! |------|------------|
//! | array | Append, Pop, Insert At, Find |
//! | stack | Push, Pop, Peek |
//! | queue | Enqueue, Dequeue, Front |
//! | deque | Push Right, Push Left, Pop Right, Pop Left |
//! | linkedlist | Append, Prepend, Insert At, Delete At, Find |
//! | doublylinkedlist | Append, Prepend, Insert At, Delete At, Find, Reverse |
//!
//! The engine is stateless: it reads a sequence and returns either a new
//! sequence plus a report, or a [`Rejection`]. Rejections never touch data.

use crate::model::{DEFAULT_ELEMENT, StructureKind};
use std::fmt;
use thiserror::Error;

// ─── Operations ──────────────────────────────────────────────────────────

/// A named toolbar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Append,
    Prepend,
    Push,
    Enqueue,
    PushRight,
    PushLeft,
    Pop,
    Dequeue,
    PopRight,
    PopLeft,
    Peek,
    Front,
    InsertAt,
    DeleteAt,
    Find,
    Reverse,
}

/// The primitive each operation performs on the element sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    InsertBack,
    InsertFront,
    InsertAt,
    RemoveBack,
    RemoveFront,
    RemoveAt,
    PeekBack,
    PeekFront,
    Find,
    Reverse,
}

impl Operation {
    pub const ALL: [Operation; 16] = [
        Operation::Append,
        Operation::Prepend,
        Operation::Push,
        Operation::Enqueue,
        Operation::PushRight,
        Operation::PushLeft,
        Operation::Pop,
        Operation::Dequeue,
        Operation::PopRight,
        Operation::PopLeft,
        Operation::Peek,
        Operation::Front,
        Operation::InsertAt,
        Operation::DeleteAt,
        Operation::Find,
        Operation::Reverse,
    ];

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Append => "Append",
            Operation::Prepend => "Prepend",
            Operation::Push => "Push",
            Operation::Enqueue => "Enqueue",
            Operation::PushRight => "Push Right",
            Operation::PushLeft => "Push Left",
            Operation::Pop => "Pop",
            Operation::Dequeue => "Dequeue",
            Operation::PopRight => "Pop Right",
            Operation::PopLeft => "Pop Left",
            Operation::Peek => "Peek",
            Operation::Front => "Front",
            Operation::InsertAt => "Insert At",
            Operation::DeleteAt => "Delete At",
            Operation::Find => "Find",
            Operation::Reverse => "Reverse",
        }
    }

    /// Parse a toolbar label. Exact match after trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    pub fn effect(self) -> Effect {
        match self {
            Operation::Append | Operation::Push | Operation::Enqueue | Operation::PushRight => {
                Effect::InsertBack
            }
            Operation::Prepend | Operation::PushLeft => Effect::InsertFront,
            Operation::Pop | Operation::PopRight => Effect::RemoveBack,
            Operation::Dequeue | Operation::PopLeft => Effect::RemoveFront,
            Operation::Peek => Effect::PeekBack,
            Operation::Front => Effect::PeekFront,
            Operation::InsertAt => Effect::InsertAt,
            Operation::DeleteAt => Effect::RemoveAt,
            Operation::Find => Effect::Find,
            Operation::Reverse => Effect::Reverse,
        }
    }

    /// Whether a successful run changes the sequence.
    pub fn mutates(self) -> bool {
        !matches!(
            self.effect(),
            Effect::PeekBack | Effect::PeekFront | Effect::Find
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Per-kind table ──────────────────────────────────────────────────────

const OPERATION_TABLE: [(StructureKind, &[Operation]); 6] = [
    (
        StructureKind::Array,
        &[
            Operation::Append,
            Operation::Pop,
            Operation::InsertAt,
            Operation::Find,
        ],
    ),
    (
        StructureKind::Stack,
        &[Operation::Push, Operation::Pop, Operation::Peek],
    ),
    (
        StructureKind::Queue,
        &[Operation::Enqueue, Operation::Dequeue, Operation::Front],
    ),
    (
        StructureKind::Deque,
        &[
            Operation::PushRight,
            Operation::PushLeft,
            Operation::PopRight,
            Operation::PopLeft,
        ],
    ),
    (
        StructureKind::LinkedList,
        &[
            Operation::Append,
            Operation::Prepend,
            Operation::InsertAt,
            Operation::DeleteAt,
            Operation::Find,
        ],
    ),
    (
        StructureKind::DoublyLinkedList,
        &[
            Operation::Append,
            Operation::Prepend,
            Operation::InsertAt,
            Operation::DeleteAt,
            Operation::Find,
            Operation::Reverse,
        ],
    ),
];

/// The operations `kind` offers, in toolbar order.
pub fn operations_for(kind: StructureKind) -> &'static [Operation] {
    OPERATION_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, ops)| *ops)
        .unwrap_or(&[])
}

pub fn supports(kind: StructureKind, op: Operation) -> bool {
    operations_for(kind).contains(&op)
}

// ─── Inputs & results ────────────────────────────────────────────────────

/// Optional argument supplied with an operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operand {
    /// Target index for Insert At / Delete At. Defaults to `len / 2`.
    pub index: Option<usize>,
    /// Search value for Find.
    pub value: Option<String>,
}

impl Operand {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn index(index: usize) -> Self {
        Self {
            index: Some(index),
            value: None,
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self {
            index: None,
            value: Some(value.into()),
        }
    }
}

/// What a successful operation did, for the feedback channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Inserted { index: usize },
    Removed { index: usize, value: String },
    Peeked { index: usize, value: String },
    Found { index: usize, value: String },
    Reversed { len: usize },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Inserted { index } => {
                write!(f, "inserted \"{DEFAULT_ELEMENT}\" at index {index}")
            }
            Report::Removed { index, value } => {
                write!(f, "removed \"{value}\" from index {index}")
            }
            Report::Peeked { index, value } => write!(f, "\"{value}\" at index {index}"),
            Report::Found { index, value } => write!(f, "\"{value}\" found at index {index}"),
            Report::Reversed { len } => write!(f, "reversed {len} elements"),
        }
    }
}

/// A successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub op: Operation,
    /// The new sequence, or `None` for read-only queries.
    pub data: Option<Vec<String>>,
    pub report: Report,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.op, self.report)
    }
}

/// A user-facing refusal. Data is always left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{kind} is empty")]
    EmptyStructure { kind: StructureKind },

    #[error("value \"{value}\" not found")]
    NotFound { value: String },

    #[error("index {index} is out of bounds (length {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("{op} is not available for {kind}")]
    InvalidOperation { op: Operation, kind: StructureKind },

    #[error("{op} needs a value")]
    MissingValue { op: Operation },
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::EmptyStructure { .. } => "EmptyStructure",
            Rejection::NotFound { .. } => "NotFound",
            Rejection::InvalidIndex { .. } => "InvalidIndex",
            Rejection::InvalidOperation { .. } => "InvalidOperation",
            Rejection::MissingValue { .. } => "MissingValue",
        }
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────

/// Run `op` against `data` as an instance of `kind`.
pub fn apply(
    kind: StructureKind,
    data: &[String],
    op: Operation,
    operand: &Operand,
) -> Result<Outcome, Rejection> {
    if !supports(kind, op) {
        return Err(Rejection::InvalidOperation { op, kind });
    }

    let len = data.len();
    let empty = || Rejection::EmptyStructure { kind };
    let mut next = data.to_vec();

    let report = match op.effect() {
        Effect::InsertBack => {
            next.push(DEFAULT_ELEMENT.to_string());
            Report::Inserted { index: len }
        }
        Effect::InsertFront => {
            next.insert(0, DEFAULT_ELEMENT.to_string());
            Report::Inserted { index: 0 }
        }
        Effect::InsertAt => {
            let index = operand.index.unwrap_or(len / 2).min(len);
            next.insert(index, DEFAULT_ELEMENT.to_string());
            Report::Inserted { index }
        }
        Effect::RemoveBack => {
            let value = next.pop().ok_or_else(empty)?;
            Report::Removed {
                index: len - 1,
                value,
            }
        }
        Effect::RemoveFront => {
            if next.is_empty() {
                return Err(empty());
            }
            let value = next.remove(0);
            Report::Removed { index: 0, value }
        }
        Effect::RemoveAt => {
            if next.is_empty() {
                return Err(empty());
            }
            let index = operand.index.unwrap_or(len / 2).min(len - 1);
            let value = next.remove(index);
            Report::Removed { index, value }
        }
        Effect::PeekBack => {
            let value = data.last().ok_or_else(empty)?.clone();
            Report::Peeked {
                index: len - 1,
                value,
            }
        }
        Effect::PeekFront => {
            let value = data.first().ok_or_else(empty)?.clone();
            Report::Peeked { index: 0, value }
        }
        Effect::Find => {
            let needle = operand
                .value
                .as_deref()
                .map(str::trim)
                .ok_or(Rejection::MissingValue { op })?;
            let index = data
                .iter()
                .position(|item| item == needle)
                .ok_or_else(|| Rejection::NotFound {
                    value: needle.to_string(),
                })?;
            Report::Found {
                index,
                value: needle.to_string(),
            }
        }
        Effect::Reverse => {
            next.reverse();
            Report::Reversed { len }
        }
    };

    log::debug!("ops: {kind} {op} -> {report}");
    Ok(Outcome {
        op,
        data: op.mutates().then_some(next),
        report,
    })
}

/// Replace a single element. Blank values fall back to the default element.
pub fn edit_element(data: &[String], index: usize, value: &str) -> Result<Vec<String>, Rejection> {
    if index >= data.len() {
        return Err(Rejection::InvalidIndex {
            index,
            len: data.len(),
        });
    }
    let value = value.trim();
    let mut next = data.to_vec();
    next[index] = if value.is_empty() {
        DEFAULT_ELEMENT.to_string()
    } else {
        value.to_string()
    };
    Ok(next)
}
