// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cyclic source: modulo index resolution plus attachment bookkeeping.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::types::{ContainerId, PageBinding, PageItem, RenderedPage};

/// Error returned when constructing a source with no backing items.
///
/// An empty ring would make index resolution divide by zero, so the N ≥ 1
/// invariant is enforced once at construction and never rechecked on the
/// resolve path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cyclic page source requires at least one backing item")]
pub struct EmptySourceError;

/// Error returned when releasing a handle this source cannot match.
///
/// Every variant is a host contract violation — a release that was never
/// rendered, already released, or rendered into a different container — not a
/// transient condition. There is nothing to retry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReleaseError {
    /// The handle was never produced by this source.
    #[error("binding was never produced by this source")]
    UnknownBinding,
    /// The handle's attachment has already been released.
    #[error("binding has already been released")]
    StaleBinding,
    /// The handle is live but attached to a different container.
    #[error("binding is attached to a different container")]
    ContainerMismatch,
}

#[derive(Copy, Clone, Debug)]
struct Attachment {
    container: ContainerId,
    effective_index: usize,
}

/// An infinite-looping page source over a fixed, non-empty ring of items.
///
/// See the [crate docs](crate) for the overall contract. The attachment
/// registry is a slot vector with per-slot generations, so handles stay cheap
/// (`Copy`) while released ones remain distinguishable after slot reuse.
#[derive(Debug)]
pub struct CyclicPageSource<R> {
    items: Vec<PageItem<R>>,
    /// slots
    attachments: Vec<Option<Attachment>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<R> CyclicPageSource<R> {
    /// Page count to advertise to hosts that require a finite count.
    ///
    /// Pagers without a native cyclic mode are told the strip is effectively
    /// unbounded; every position they hand back is folded onto the ring by
    /// [`Self::resolve`].
    pub const REPORTED_COUNT: usize = usize::MAX;

    /// Creates a source over `resources`, in order.
    ///
    /// Each resource becomes a [`PageItem`] whose
    /// [`index`](PageItem::index) is its position in the ring. The ring size
    /// is fixed for the lifetime of the source.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySourceError`] if `resources` yields no items.
    pub fn new(resources: impl IntoIterator<Item = R>) -> Result<Self, EmptySourceError> {
        let items: Vec<PageItem<R>> = resources
            .into_iter()
            .enumerate()
            .map(|(index, resource)| PageItem { resource, index })
            .collect();
        if items.is_empty() {
            return Err(EmptySourceError);
        }
        Ok(Self {
            items,
            attachments: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        })
    }

    /// Number of backing items (N). Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: the ring is non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Effective ring position for a raw pager index, in `[0, len())`.
    ///
    /// Non-negative modulo: `-1` maps to the last item and `len()` wraps back
    /// to the first, regardless of the sign conventions of the host's `%`.
    #[must_use]
    pub fn effective_index(&self, raw_index: i64) -> usize {
        // len() >= 1 is a construction invariant, so rem_euclid cannot
        // divide by zero.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "rem_euclid result is non-negative and below len(), which fits usize"
        )]
        let idx = raw_index.rem_euclid(self.items.len() as i64) as usize;
        idx
    }

    /// Resolves any signed page index to its backing item.
    ///
    /// Total over the whole `i64` domain; see [`Self::effective_index`].
    #[must_use]
    pub fn resolve(&self, raw_index: i64) -> &PageItem<R> {
        &self.items[self.effective_index(raw_index)]
    }

    /// Renders the page at `raw_index` into `container`.
    ///
    /// Resolves the index, records the attachment, and returns a
    /// [`RenderedPage`] carrying the new [`PageBinding`], the decimal label
    /// of the effective index, and a borrow of the backing item. The host
    /// builds its real view from this and must later hand the binding back to
    /// [`Self::release`] for the same container.
    pub fn render(&mut self, raw_index: i64, container: ContainerId) -> RenderedPage<'_, R> {
        let effective_index = self.effective_index(raw_index);
        let attachment = Attachment {
            container,
            effective_index,
        };

        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.attachments[idx] = Some(attachment);
            (idx, generation)
        } else {
            self.attachments.push(Some(attachment));
            self.generations.push(1);
            (self.attachments.len() - 1, 1)
        };

        #[allow(
            clippy::cast_possible_truncation,
            reason = "attachment slots are intentionally 32-bit; a pager keeps a handful live"
        )]
        let binding = PageBinding::new(idx as u32, generation);
        RenderedPage {
            binding,
            label: effective_index.to_string(),
            item: &self.items[effective_index],
        }
    }

    /// Releases an attachment previously produced by [`Self::render`].
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::UnknownBinding`] if the handle never came from this
    ///   source,
    /// - [`ReleaseError::StaleBinding`] if its attachment was already
    ///   released (whether or not the slot has been reused since),
    /// - [`ReleaseError::ContainerMismatch`] if it is live but attached to a
    ///   different container.
    ///
    /// All three indicate a recycling bug in the host, and none of them
    /// change any state.
    pub fn release(
        &mut self,
        binding: PageBinding,
        container: ContainerId,
    ) -> Result<(), ReleaseError> {
        let idx = binding.idx();
        let Some(generation) = self.generations.get(idx).copied() else {
            return Err(ReleaseError::UnknownBinding);
        };
        if binding.generation() == 0 || binding.generation() > generation {
            // Generations start at 1 and only this source increments them.
            return Err(ReleaseError::UnknownBinding);
        }
        if binding.generation() < generation {
            // The slot has been reused since this handle was made.
            return Err(ReleaseError::StaleBinding);
        }
        let Some(attachment) = self.attachments[idx] else {
            return Err(ReleaseError::StaleBinding);
        };
        if attachment.container != container {
            return Err(ReleaseError::ContainerMismatch);
        }
        self.attachments[idx] = None;
        self.free_list.push(idx);
        Ok(())
    }

    /// Returns `true` if `binding` still identifies a live attachment.
    ///
    /// This is the adapter-side identity check: a handle stops backing its
    /// rendering the moment it is released, even if its slot is later reused
    /// for another page.
    #[must_use]
    pub fn is_bound(&self, binding: PageBinding) -> bool {
        let idx = binding.idx();
        self.attachments.get(idx).is_some_and(Option::is_some)
            && self.generations[idx] == binding.generation()
    }

    /// Number of currently live attachments.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.attachments.iter().filter(|a| a.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{CyclicPageSource, EmptySourceError, ReleaseError};
    use crate::types::{ContainerId, PageBinding};

    fn rgb_source() -> CyclicPageSource<&'static str> {
        CyclicPageSource::new(["red", "green", "blue"]).unwrap()
    }

    #[test]
    fn empty_backing_fails_at_construction() {
        let result = CyclicPageSource::<u32>::new([]);
        assert_eq!(result.unwrap_err(), EmptySourceError);
    }

    #[test]
    fn resolve_wraps_in_both_directions() {
        let source = rgb_source();
        assert_eq!(*source.resolve(0).resource(), "red");
        assert_eq!(*source.resolve(2).resource(), "blue");
        assert_eq!(*source.resolve(3).resource(), "red");
        assert_eq!(*source.resolve(-1).resource(), "blue");
        assert_eq!(*source.resolve(-3).resource(), "red");
    }

    #[test]
    fn effective_index_is_non_negative_modulo() {
        let source = rgb_source();
        for raw in -12_i64..=12 {
            let effective = source.effective_index(raw);
            assert!(effective < source.len(), "effective index out of range");
            assert_eq!(effective as i64, raw.rem_euclid(3), "wrong fold for {raw}");
            assert_eq!(source.resolve(raw).index(), effective);
        }
        // Total at the extremes of the domain too.
        assert!(source.effective_index(i64::MAX) < 3, "overflow at i64::MAX");
        assert!(source.effective_index(i64::MIN) < 3, "overflow at i64::MIN");
    }

    #[test]
    fn single_item_ring_always_resolves_to_it() {
        let source = CyclicPageSource::new(["only"]).unwrap();
        for raw in [-5_i64, -1, 0, 1, 99] {
            assert_eq!(source.resolve(raw).index(), 0);
        }
    }

    #[test]
    fn reported_count_is_effectively_unbounded() {
        assert_eq!(CyclicPageSource::<u32>::REPORTED_COUNT, usize::MAX);
    }

    #[test]
    fn render_labels_and_binds_the_effective_page() {
        let mut source = rgb_source();
        let container = ContainerId::new(7);

        let rendered = source.render(4, container);
        assert_eq!(rendered.label(), "1");
        assert_eq!(rendered.item().index(), 1);
        assert_eq!(*rendered.item().resource(), "green");
        let binding = rendered.binding();

        assert!(source.is_bound(binding), "fresh binding should be live");
        assert_eq!(source.bound_count(), 1);

        source.release(binding, container).unwrap();
        assert!(!source.is_bound(binding), "released binding should be dead");
        assert_eq!(source.bound_count(), 0);
    }

    #[test]
    fn double_release_is_reported_stale() {
        let mut source = rgb_source();
        let container = ContainerId::new(1);
        let binding = source.render(0, container).binding();

        source.release(binding, container).unwrap();
        assert_eq!(
            source.release(binding, container),
            Err(ReleaseError::StaleBinding)
        );
    }

    #[test]
    fn release_with_wrong_container_is_a_mismatch() {
        let mut source = rgb_source();
        let ours = ContainerId::new(1);
        let theirs = ContainerId::new(2);
        let binding = source.render(0, ours).binding();

        assert_eq!(
            source.release(binding, theirs),
            Err(ReleaseError::ContainerMismatch)
        );
        // The mismatch must not have consumed the attachment.
        assert!(source.is_bound(binding), "mismatch should not release");
        source.release(binding, ours).unwrap();
    }

    #[test]
    fn fabricated_bindings_are_unknown() {
        let mut source = rgb_source();
        let container = ContainerId::new(1);
        let live = source.render(0, container).binding();

        // Slot that never existed.
        let bogus_slot = PageBinding::new(99, 1);
        assert_eq!(
            source.release(bogus_slot, container),
            Err(ReleaseError::UnknownBinding)
        );

        // Valid slot, generation from the future.
        let bogus_generation = PageBinding::new(live.0, live.1 + 1);
        assert_eq!(
            source.release(bogus_generation, container),
            Err(ReleaseError::UnknownBinding)
        );
    }

    #[test]
    fn slot_reuse_does_not_resurrect_released_bindings() {
        let mut source = rgb_source();
        let container = ContainerId::new(1);

        let first = source.render(0, container).binding();
        source.release(first, container).unwrap();

        // Reuses the freed slot with a bumped generation.
        let second = source.render(1, container).binding();
        assert_eq!(first.0, second.0, "slot should be reused");
        assert_ne!(first, second, "handles must not alias across reuse");

        assert!(!source.is_bound(first), "old handle stays dead");
        assert!(source.is_bound(second), "new handle is live");
        assert_eq!(
            source.release(first, container),
            Err(ReleaseError::StaleBinding)
        );
        source.release(second, container).unwrap();
    }

    #[test]
    fn interleaved_attachments_are_tracked_independently() {
        let mut source = rgb_source();
        let container = ContainerId::new(3);

        // A pager keeping the current page and both neighbors attached.
        let left = source.render(5, container).binding();
        let center = source.render(6, container).binding();
        let right = source.render(7, container).binding();
        assert_eq!(source.bound_count(), 3);

        // Scroll forward: the left neighbor is recycled.
        source.release(left, container).unwrap();
        assert_eq!(source.bound_count(), 2);
        assert!(source.is_bound(center) && source.is_bound(right));

        let next = source.render(8, container).binding();
        assert_eq!(source.bound_count(), 3);
        assert!(source.is_bound(next));
    }
}
