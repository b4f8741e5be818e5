// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagecurl Cycle: an infinite-looping page source over a finite item ring.
//!
//! Horizontal pagers usually number their pages `0..count` and have no native
//! cyclic mode. This crate provides the classic workaround as an explicit,
//! host-agnostic mapping: a [`CyclicPageSource`] owns a fixed, non-empty ring
//! of [`PageItem`]s and resolves *any* signed page index onto it with
//! non-negative modulo, so scrolling indefinitely in either direction cycles
//! through the same N items.
//!
//! The source also carries the attachment bookkeeping a pager adapter
//! contract needs: [`CyclicPageSource::render`] records an attachment and
//! returns a generational [`PageBinding`] handle plus the data the host needs
//! to build its real view, and [`CyclicPageSource::release`] detaches it
//! again. Handle equality is identity of one attachment: once an attachment
//! is released, a reused slot produces a handle that compares unequal to the
//! old one, so stale handles never alias live renderings.
//!
//! This crate does **not** know about views, widgets, or any UI framework.
//! Hosts are responsible for:
//!
//! - inflating/recycling the actual page views from a [`RenderedPage`],
//! - reporting a page count to their pager (see
//!   [`CyclicPageSource::REPORTED_COUNT`]),
//! - pairing every `render` with exactly one `release` for the same
//!   container when the pager discards a page.
//!
//! ## Example
//! ```
//! use pagecurl_cycle::{ContainerId, CyclicPageSource};
//!
//! // Three backing resources (say, drawable references).
//! let mut source = CyclicPageSource::new([0xAA0000_u32, 0x00AA00, 0x0000AA]).unwrap();
//!
//! // Any signed index resolves into the ring.
//! assert_eq!(source.resolve(4).index(), 1);
//! assert_eq!(source.resolve(-1).index(), 2);
//!
//! // Attach a page, then detach it again.
//! let container = ContainerId::new(1);
//! let rendered = source.render(4, container);
//! let binding = rendered.binding();
//! assert_eq!(rendered.label(), "1");
//! source.release(binding, container).unwrap();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod source;
mod types;

pub use source::{CyclicPageSource, EmptySourceError, ReleaseError};
pub use types::{ContainerId, PageBinding, PageItem, RenderedPage};
