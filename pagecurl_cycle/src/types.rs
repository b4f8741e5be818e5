// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: items, container identities, and attachment handles.

use alloc::string::String;

/// One entry in the backing ring: an opaque visual resource plus its display
/// index.
///
/// Items are created by [`CyclicPageSource`](crate::CyclicPageSource) at
/// construction and never change afterwards. Rendered views borrow the item
/// they were resolved to; they do not copy it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageItem<R> {
    pub(crate) resource: R,
    pub(crate) index: usize,
}

impl<R> PageItem<R> {
    /// The opaque visual resource backing this page (for example a color or
    /// drawable reference).
    #[must_use]
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Position of this item within the backing ring, in `[0, len)`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Opaque identity of a host container that pages are attached to.
///
/// The host picks the value; the source only ever compares it, to verify
/// that renders and releases are paired against the same container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Creates a container identity from a host-chosen value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Generational handle for one attachment produced by
/// [`CyclicPageSource::render`](crate::CyclicPageSource::render).
///
/// Equality is identity: two bindings compare equal only if they refer to the
/// same attachment. A slot that is released and later reused hands out a
/// binding with a bumped generation, so a stale handle never compares equal
/// to the live one occupying its slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageBinding(pub(crate) u32, pub(crate) u32);

impl PageBinding {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Everything the host needs to build the real view for one attachment.
///
/// Borrows the resolved [`PageItem`] from the source for the lifetime of the
/// call; the [`PageBinding`] is `Copy` and outlives it.
#[derive(Debug)]
pub struct RenderedPage<'a, R> {
    pub(crate) binding: PageBinding,
    pub(crate) label: String,
    pub(crate) item: &'a PageItem<R>,
}

impl<'a, R> RenderedPage<'a, R> {
    /// Handle identifying this attachment for a later release.
    #[must_use]
    pub const fn binding(&self) -> PageBinding {
        self.binding
    }

    /// Display label for the page: the decimal form of the effective index.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The backing item this page was resolved to.
    #[must_use]
    pub const fn item(&self) -> &'a PageItem<R> {
        self.item
    }
}
