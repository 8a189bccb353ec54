#![forbid(unsafe_code)]

//! Empty-container detection.
//!
//! When the pointer is over no registered container's item area, a nearby
//! *empty* container may still attract the drop: any container with no
//! draggable items whose configured threshold distance covers the pointer.
//! The nearest such container wins; ties resolve to the earliest
//! registration so repeated runs pick the same target.

use ahash::AHashMap;
use sortkit_core::geometry::Point;

use crate::sorter::{Container, ContainerId};
use crate::tree::VisualTree;

pub(crate) fn nearest_empty_container<T: VisualTree>(
    containers: &AHashMap<ContainerId, Container>,
    tree: &T,
    pointer: Point,
) -> Option<ContainerId> {
    let mut best: Option<(f64, ContainerId)> = None;
    for (&id, container) in containers {
        let threshold = container.options.empty_insert_threshold;
        if threshold <= 0.0 || !container.items(tree).is_empty() {
            continue;
        }
        let Some(rect) = tree.rect(container.root) else {
            continue;
        };
        let distance = rect.distance_to(pointer);
        if distance > threshold {
            continue;
        }
        let closer = match best {
            None => true,
            Some((best_distance, best_id)) => {
                distance < best_distance || (distance == best_distance && id.0 < best_id.0)
            }
        };
        if closer {
            best = Some((distance, id));
        }
    }
    best.map(|(_, id)| id)
}
