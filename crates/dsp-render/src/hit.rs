//! Hit testing: canvas point → instance lookup.
//!
//! Walks instances back-to-front (last placed = topmost) and reports whether
//! the point landed on a card's drag handle, on its body, or on empty canvas.

use crate::layout::{card_rect, contains_inclusive, header_rect, to_point};
use dsp_core::{Instance, InstanceId};
use kurbo::{Point, Vec2};

/// What a canvas point is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Empty canvas space.
    Canvas,
    /// The header band of an instance. `grab` is the point's offset from
    /// the instance origin, kept so a drag doesn't jump.
    Handle { id: InstanceId, grab: Vec2 },
    /// Anywhere else on an instance card.
    Body { id: InstanceId },
}

impl Hit {
    pub fn instance(&self) -> Option<InstanceId> {
        match self {
            Hit::Canvas => None,
            Hit::Handle { id, .. } | Hit::Body { id } => Some(*id),
        }
    }
}

/// Classify the topmost thing under `p` (canvas coordinates).
pub fn hit_test(instances: &[Instance], p: Point) -> Hit {
    let Some(inst) = instances
        .iter()
        .rev()
        .find(|inst| contains_inclusive(card_rect(inst), p))
    else {
        return Hit::Canvas;
    };

    if contains_inclusive(header_rect(inst), p) {
        Hit::Handle {
            id: inst.id,
            grab: p - to_point(inst.position),
        }
    } else {
        Hit::Body { id: inst.id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsp_core::{Position, StructureKind};
    use pretty_assertions::assert_eq;

    fn card(name: &str, kind: StructureKind, x: f64, y: f64) -> Instance {
        Instance::new(InstanceId::intern(name), kind, name.into(), Position::new(x, y))
    }

    #[test]
    fn hit_test_basic() {
        let instances = vec![card("hit_a", StructureKind::Array, 10.0, 10.0)];

        assert_eq!(
            hit_test(&instances, Point::new(15.0, 20.0)),
            Hit::Handle {
                id: InstanceId::intern("hit_a"),
                grab: Vec2::new(5.0, 10.0),
            }
        );
        assert_eq!(
            hit_test(&instances, Point::new(15.0, 100.0)),
            Hit::Body {
                id: InstanceId::intern("hit_a")
            }
        );
        assert_eq!(hit_test(&instances, Point::new(500.0, 500.0)), Hit::Canvas);
    }

    #[test]
    fn topmost_instance_wins() {
        let instances = vec![
            card("hit_under", StructureKind::Array, 0.0, 0.0),
            card("hit_over", StructureKind::Stack, 50.0, 50.0),
        ];
        let hit = hit_test(&instances, Point::new(60.0, 60.0));
        assert_eq!(hit.instance(), Some(InstanceId::intern("hit_over")));
    }

    #[test]
    fn width_depends_on_kind() {
        let instances = vec![card("hit_dll", StructureKind::DoublyLinkedList, 0.0, 0.0)];
        assert_eq!(
            hit_test(&instances, Point::new(450.0, 80.0)).instance(),
            Some(InstanceId::intern("hit_dll"))
        );

        let instances = vec![card("hit_arr", StructureKind::Array, 0.0, 0.0)];
        assert_eq!(hit_test(&instances, Point::new(450.0, 80.0)), Hit::Canvas);
    }
}
