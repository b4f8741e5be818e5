// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wrap-content measurement pass.

use kurbo::Size;
use smallvec::SmallVec;

use crate::Constraint;

/// Per-child measurement delegate, implemented by the host.
///
/// `measure_child` takes `&mut self` so hosts may maintain their own layout
/// caches during the pass; this crate never caches results itself.
pub trait MeasureChildren {
    /// Number of currently attached children.
    fn child_count(&self) -> usize;

    /// Natural height of child `index` under the given constraints.
    ///
    /// The constraints are the ones the container itself inherited from its
    /// parent, forwarded unchanged. Implementations delegate to the host
    /// framework's own per-child measurement step and return the height that
    /// step produced.
    fn measure_child(&mut self, index: usize, width: Constraint, height: Constraint) -> f64;
}

/// Result of one wrap-content measurement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurePass {
    /// Measured natural height of each child, in attachment order.
    ///
    /// Pagers keep the current page plus a neighbor or two attached, so this
    /// stays inline for typical child counts.
    pub child_heights: SmallVec<[f64; 4]>,
    /// Tallest child height, or `0.0` when there are no children.
    pub content_height: f64,
}

/// Measures every attached child once and aggregates the tallest height.
///
/// Non-finite child heights are caught by a debug assertion and treated as
/// zero; negative heights are clamped to zero, matching the extent
/// conventions used across this workspace.
pub fn measure_pass<C: MeasureChildren + ?Sized>(
    children: &mut C,
    width: Constraint,
    height: Constraint,
) -> MeasurePass {
    let count = children.child_count();
    let mut child_heights = SmallVec::with_capacity(count);
    let mut content_height = 0.0;
    for index in 0..count {
        let measured = children.measure_child(index, width, height);
        debug_assert!(
            measured.is_finite(),
            "child heights must be finite; got {measured:?} for child {index}"
        );
        let measured = if measured.is_finite() {
            measured.max(0.0)
        } else {
            0.0
        };
        if measured > content_height {
            content_height = measured;
        }
        child_heights.push(measured);
    }
    MeasurePass {
        child_heights,
        content_height,
    }
}

/// Tallest natural height across all attached children; `0.0` when empty.
pub fn wrap_content_height<C: MeasureChildren + ?Sized>(
    children: &mut C,
    width: Constraint,
    height: Constraint,
) -> f64 {
    measure_pass(children, width, height).content_height
}

/// Measures the container itself.
///
/// The width the container already reports passes through unchanged; only
/// the height is overridden, with the wrap-content height of the current
/// children. One-shot by design — call it on every layout pass.
pub fn measure_container<C: MeasureChildren + ?Sized>(
    children: &mut C,
    container_width: f64,
    width: Constraint,
    height: Constraint,
) -> Size {
    Size::new(
        container_width,
        wrap_content_height(children, width, height),
    )
}
