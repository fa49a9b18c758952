//! Instance footprints on the canvas.
//!
//! Every instance occupies a fixed-size card anchored at its position. The
//! top band of the card is the header, which doubles as the drag handle.

use dsp_core::{Instance, Position, StructureKind};
use kurbo::{Point, Rect, Size};

/// Card width for the linear kinds (array, stack, queue, deque).
pub const CARD_WIDTH: f64 = 200.0;
/// Linked lists draw node boxes with arrows between them.
pub const LINKED_LIST_WIDTH: f64 = 400.0;
pub const DOUBLY_LINKED_LIST_WIDTH: f64 = 500.0;
pub const CARD_HEIGHT: f64 = 120.0;
/// Height of the header band (name + delete button) used as the drag handle.
pub const HEADER_HEIGHT: f64 = 40.0;

pub fn footprint_size(kind: StructureKind) -> Size {
    let width = match kind {
        StructureKind::LinkedList => LINKED_LIST_WIDTH,
        StructureKind::DoublyLinkedList => DOUBLY_LINKED_LIST_WIDTH,
        StructureKind::Array | StructureKind::Stack | StructureKind::Queue | StructureKind::Deque => {
            CARD_WIDTH
        }
    };
    Size::new(width, CARD_HEIGHT)
}

pub fn to_point(position: Position) -> Point {
    Point::new(position.x, position.y)
}

/// The whole card.
pub fn card_rect(instance: &Instance) -> Rect {
    Rect::from_origin_size(to_point(instance.position), footprint_size(instance.kind))
}

/// The header band at the top of the card.
pub fn header_rect(instance: &Instance) -> Rect {
    let card = card_rect(instance);
    Rect::new(card.x0, card.y0, card.x1, card.y0 + HEADER_HEIGHT.min(card.height()))
}

/// Edge-inclusive containment: a point on the border counts as inside.
pub fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
