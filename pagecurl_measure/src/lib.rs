// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagecurl Measure: wrap-content height measurement for paging containers.
//!
//! Paging containers typically size themselves to a fixed height, which clips
//! or stretches pages whose content varies. This crate provides the
//! wrap-content policy as a host-agnostic measurement pass: ask the host to
//! measure each attached child under the constraints the container itself
//! inherited, take the tallest natural height as the container's content
//! height, and pass the container width through untouched.
//!
//! The host implements [`MeasureChildren`] over whatever its children are;
//! [`measure_pass`], [`wrap_content_height`], and [`measure_container`] do
//! the aggregation. The pass is deliberately not memoized: child content and
//! visibility may change between layout passes, so hosts re-run it on every
//! pass.
//!
//! This crate does not perform any measurement itself. The host framework's
//! own per-child measurement step stays authoritative; this crate only
//! decides what the container reports upward.
//!
//! ## Example
//! ```
//! use pagecurl_measure::{Constraint, MeasureChildren, wrap_content_height};
//!
//! struct FixedChildren(Vec<f64>);
//!
//! impl MeasureChildren for FixedChildren {
//!     fn child_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn measure_child(&mut self, index: usize, _width: Constraint, height: Constraint) -> f64 {
//!         height.resolve(self.0[index])
//!     }
//! }
//!
//! let mut children = FixedChildren(vec![40.0, 120.0, 75.0]);
//! let height = wrap_content_height(
//!     &mut children,
//!     Constraint::Exactly(320.0),
//!     Constraint::Unconstrained,
//! );
//! assert_eq!(height, 120.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod constraint;
mod pass;

pub use constraint::Constraint;
pub use pass::{MeasureChildren, MeasurePass, measure_container, measure_pass, wrap_content_height};
