// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard avoidance and first-responder resignation.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::host::{PresentationHost, ViewId};

/// How far the keyboard overlaps the bottom of `frame`.
///
/// The keyboard rises `keyboard_height` points from the bottom of
/// `container`. The surface is lifted by this amount so its bottom edge rides
/// on top of the keyboard; the lift never pushes the surface above the top of
/// the container.
#[must_use]
pub fn keyboard_offset(keyboard_height: f64, container: Rect, frame: Rect) -> f64 {
    if keyboard_height.is_nan() || keyboard_height <= 0.0 {
        return 0.0;
    }
    let keyboard_top = container.y1 - keyboard_height;
    let overlap = (frame.y1 - keyboard_top).max(0.0);
    overlap.min((frame.y0 - container.y0).max(0.0))
}

/// Finds the first responder under `root`, breadth first.
pub fn find_first_responder(host: &dyn PresentationHost, root: ViewId) -> Option<ViewId> {
    let mut queue = VecDeque::from([root]);
    let mut children = Vec::new();
    while let Some(view) = queue.pop_front() {
        if host.is_first_responder(view) {
            return Some(view);
        }
        children.clear();
        host.children(view, &mut children);
        queue.extend(children.iter().copied());
    }
    None
}

/// Result of asking the presented hierarchy to dismiss the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resignation {
    /// No view under the root owns the keyboard.
    NotFound,
    /// The first responder gave up the keyboard.
    Resigned(ViewId),
    /// The first responder refused; it still owns the keyboard.
    Refused(ViewId),
}

impl Resignation {
    /// Returns `true` unless a first responder refused to resign.
    #[must_use]
    pub fn allows_dismissal(self) -> bool {
        !matches!(self, Self::Refused(_))
    }
}

/// Asks the first responder under `root` to resign.
pub fn resign_first_responder(host: &mut dyn PresentationHost, root: ViewId) -> Resignation {
    let Some(view) = find_first_responder(host, root) else {
        return Resignation::NotFound;
    };
    if host.resign_first_responder(view) {
        log::debug!("resigned first responder {view:?}");
        Resignation::Resigned(view)
    } else {
        log::debug!("first responder {view:?} refused to resign");
        Resignation::Refused(view)
    }
}
