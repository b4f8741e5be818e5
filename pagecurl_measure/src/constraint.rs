// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing constraints inherited from the container's parent.

/// A 1D sizing constraint passed down from a parent during measurement.
///
/// This mirrors the measurement conventions of retained-mode UI toolkits: a
/// parent either dictates a size, caps it, or leaves the child to its natural
/// preference. Containers forward the constraints they inherited to each
/// child unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Constraint {
    /// The measured party must be exactly this size.
    Exactly(f64),
    /// The measured party may choose any size up to this bound.
    AtMost(f64),
    /// The measured party may choose its natural size.
    Unconstrained,
}

impl Constraint {
    /// Resolves a natural size against this constraint.
    ///
    /// [`Exactly`](Self::Exactly) wins outright, [`AtMost`](Self::AtMost)
    /// caps, and [`Unconstrained`](Self::Unconstrained) returns the natural
    /// size unchanged. Negative sizes are clamped to zero on both sides.
    #[must_use]
    pub fn resolve(self, natural: f64) -> f64 {
        // Sizes are expected to be finite. Catch NaNs (and infinities) in
        // debug builds so misuse does not go unnoticed.
        debug_assert!(
            natural.is_finite(),
            "natural sizes must be finite; got {natural:?}"
        );
        let natural = natural.max(0.0);
        match self {
            Self::Exactly(size) => size.max(0.0),
            Self::AtMost(limit) => natural.min(limit.max(0.0)),
            Self::Unconstrained => natural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Constraint;

    #[test]
    fn exactly_overrides_the_natural_size() {
        assert_eq!(Constraint::Exactly(50.0).resolve(120.0), 50.0);
        assert_eq!(Constraint::Exactly(50.0).resolve(10.0), 50.0);
    }

    #[test]
    fn at_most_caps_the_natural_size() {
        assert_eq!(Constraint::AtMost(100.0).resolve(120.0), 100.0);
        assert_eq!(Constraint::AtMost(100.0).resolve(75.0), 75.0);
    }

    #[test]
    fn unconstrained_passes_the_natural_size_through() {
        assert_eq!(Constraint::Unconstrained.resolve(0.0), 0.0);
        assert_eq!(Constraint::Unconstrained.resolve(333.5), 333.5);
    }

    #[test]
    fn negative_sizes_are_clamped_to_zero() {
        assert_eq!(Constraint::Unconstrained.resolve(-40.0), 0.0);
        assert_eq!(Constraint::Exactly(-50.0).resolve(10.0), 0.0);
        assert_eq!(Constraint::AtMost(-5.0).resolve(10.0), 0.0);
    }
}
