// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagecurl Transform: per-page visual mapping for a card-flip page effect.
//!
//! As a horizontal pager scrolls, each partially-visible page reports a
//! normalized offset: `0.0` when centered in the viewport, `±1.0` when one
//! full page-width away, larger magnitudes for pages scrolled further out.
//! [`PageTransform`] maps that offset (plus the page size) to a
//! [`VisualState`] — opacity, rotation, and the pivot the rotation is applied
//! about — so the page fades and turns around its trailing bottom corner as
//! it leaves the viewport.
//!
//! Every evaluation is an independent pure function of the current offset:
//! no state is carried between ticks, and evaluations for different pages
//! within one tick are order-independent.
//!
//! ## Mapping
//!
//! With configuration `min_alpha` and `max_rotate` (degrees):
//!
//! - `|offset| <= 1`: opacity interpolates linearly from `1.0` at the center
//!   down to `min_alpha` a full page away; rotation is
//!   `max_rotate * offset` (so it passes through zero at the center); the
//!   pivot slides from the bottom-center at `offset == 0` toward the bottom
//!   trailing edge as the page exits.
//! - `offset < -1` and `offset > 1`: held at the boundary values of the near
//!   region, so the mapping is continuous at `-1`, `0`, and `+1`. Typical
//!   pagers rarely report offsets past `±1` for transformed pages; the far
//!   regions exist so hosts that do never see a jump.
//!
//! ## Example
//! ```
//! use kurbo::Size;
//! use pagecurl_transform::PageTransform;
//!
//! let transform = PageTransform::default(); // min_alpha 0.3, max_rotate 15°
//! let page = Size::new(320.0, 480.0);
//!
//! // A centered page is fully opaque and unrotated.
//! let state = transform.transform(0.0, page);
//! assert_eq!(state.alpha, 1.0);
//! assert_eq!(state.rotation, 0.0);
//!
//! // Halfway out to the right: dimmed, tilted, pivot past the midpoint.
//! let state = transform.transform(0.5, page);
//! assert!((state.alpha - 0.65).abs() < 1e-12);
//! assert_eq!(state.rotation, 7.5);
//! assert_eq!(state.pivot.x, 80.0);
//! assert_eq!(state.pivot.y, 480.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Size};

/// Default minimum opacity for a fully scrolled-away page.
pub const DEFAULT_MIN_ALPHA: f64 = 0.3;

/// Default maximum rotation, in degrees.
pub const DEFAULT_MAX_ROTATE: f64 = 15.0;

/// Configuration for the page-turn visual mapping.
///
/// Both knobs are explicit constructor parameters so the mapping stays a
/// pure, testable function; there is no global configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageTransform {
    min_alpha: f64,
    max_rotate: f64,
}

impl Default for PageTransform {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ALPHA, DEFAULT_MAX_ROTATE)
    }
}

impl PageTransform {
    /// Creates a mapping with the given minimum opacity and maximum rotation
    /// in degrees.
    ///
    /// `min_alpha` is clamped into `[0, 1]` and `max_rotate_degrees` to be
    /// non-negative; non-finite inputs are caught by debug assertions.
    #[must_use]
    pub fn new(min_alpha: f64, max_rotate_degrees: f64) -> Self {
        debug_assert!(
            min_alpha.is_finite(),
            "min_alpha must be finite; got {min_alpha:?}"
        );
        debug_assert!(
            max_rotate_degrees.is_finite(),
            "max_rotate_degrees must be finite; got {max_rotate_degrees:?}"
        );
        Self {
            min_alpha: min_alpha.clamp(0.0, 1.0),
            max_rotate: max_rotate_degrees.max(0.0),
        }
    }

    /// Minimum opacity applied to fully scrolled-away pages.
    #[must_use]
    pub const fn min_alpha(&self) -> f64 {
        self.min_alpha
    }

    /// Maximum rotation magnitude, in degrees.
    #[must_use]
    pub const fn max_rotate_degrees(&self) -> f64 {
        self.max_rotate
    }

    /// Maps a page's normalized offset and size to its visual state.
    ///
    /// `offset` is the page's position relative to the viewport center in
    /// page-width units; see the crate docs for the region breakdown.
    #[must_use]
    pub fn transform(&self, offset: f64, page: Size) -> VisualState {
        let Size { width, height } = page;
        if offset < -1.0 {
            // Fully off to the left: hold the near-region boundary values so
            // the mapping stays continuous at -1.
            VisualState {
                alpha: self.min_alpha,
                rotation: -self.max_rotate,
                pivot: Point::new(width, height),
            }
        } else if offset <= 1.0 {
            // 1 - |offset| runs from 1.0 at the center down to 0.0 a full
            // page away, on both sides.
            VisualState {
                alpha: self.min_alpha + (1.0 - self.min_alpha) * (1.0 - offset.abs()),
                rotation: self.max_rotate * offset,
                // Bottom-center when centered, sliding to the trailing
                // bottom corner as the page exits.
                pivot: Point::new(width * 0.5 * (1.0 - offset), height),
            }
        } else {
            VisualState {
                alpha: self.min_alpha,
                rotation: self.max_rotate,
                pivot: Point::new(0.0, height),
            }
        }
    }
}

/// Derived per-page, per-tick visual properties.
///
/// Holds no identity or lifecycle; recompute it from the current offset on
/// every scroll tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisualState {
    /// Opacity, in `[min_alpha, 1]`.
    pub alpha: f64,
    /// Rotation in degrees, in `[-max_rotate, max_rotate]`.
    pub rotation: f64,
    /// Point the rotation is applied about, in page-local coordinates.
    pub pivot: Point,
}

impl VisualState {
    /// The rotation as an affine transform about [`pivot`](Self::pivot).
    ///
    /// Opacity is not representable in an affine; it stays a separate
    /// property for the host to apply.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::rotate_about(self.rotation.to_radians(), self.pivot)
    }
}
