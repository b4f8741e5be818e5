// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated swipe through an infinite three-page carousel.
//!
//! This example plays the host framework: it attaches the current page and
//! its neighbors through `pagecurl_cycle`, runs a wrap-content measurement
//! pass with `pagecurl_measure`, and evaluates the page-turn transform from
//! `pagecurl_transform` across a sweep of scroll offsets.
//!
//! Run:
//! - `cargo run -p pagecurl_demos --example pager_swipe`

use kurbo::Size;
use pagecurl_cycle::{ContainerId, CyclicPageSource, PageBinding};
use pagecurl_measure::{Constraint, MeasureChildren, measure_container};
use pagecurl_transform::PageTransform;

/// Fake host container: three attached pages with differing content heights.
struct HostPages {
    natural_heights: Vec<f64>,
}

impl MeasureChildren for HostPages {
    fn child_count(&self) -> usize {
        self.natural_heights.len()
    }

    fn measure_child(&mut self, index: usize, _width: Constraint, height: Constraint) -> f64 {
        height.resolve(self.natural_heights[index])
    }
}

fn main() {
    // Backing resources: three ARGB colors, cycled forever.
    let mut source = CyclicPageSource::new([0xFF_CC4444_u32, 0xFF_44CC44, 0xFF_4444CC])
        .expect("backing sequence is non-empty");
    let container = ContainerId::new(1);

    // The pager keeps the current page and one neighbor on each side attached.
    let current: i64 = 7;
    let mut bindings: Vec<PageBinding> = Vec::new();
    for raw in (current - 1)..=(current + 1) {
        let rendered = source.render(raw, container);
        println!(
            "attached raw {:>2} -> effective {} (label {:?}, resource #{:08X})",
            raw,
            rendered.item().index(),
            rendered.label(),
            rendered.item().resource(),
        );
        bindings.push(rendered.binding());
    }

    // Wrap-content measurement across the attached pages.
    let mut host = HostPages {
        natural_heights: vec![40.0, 120.0, 75.0],
    };
    let size = measure_container(
        &mut host,
        320.0,
        Constraint::Exactly(320.0),
        Constraint::Unconstrained,
    );
    println!("measured container: {} x {}", size.width, size.height);

    // One scroll tick: every partially-visible page reports its offset from
    // the viewport center and gets fresh visual properties.
    let transform = PageTransform::default();
    let page = Size::new(size.width, size.height);
    println!("\nswipe (offset -> alpha / rotation / pivot):");
    let mut offset = -2.0;
    while offset <= 2.0 + 1e-9 {
        let state = transform.transform(offset, page);
        println!(
            "  {:+.2} -> {:.3} / {:+6.2} deg / ({:6.1}, {:5.1})",
            offset, state.alpha, state.rotation, state.pivot.x, state.pivot.y,
        );
        offset += 0.25;
    }

    // The pager scrolled forward: recycle the page that left the window.
    let released = bindings.remove(0);
    source.release(released, container).expect("binding is live");
    println!("\nlive attachments after recycle: {}", source.bound_count());
}
