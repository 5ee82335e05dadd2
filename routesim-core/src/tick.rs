use std::fmt;

/// the simulated tick
///
/// Counts how many ticks of the traffic profile have been processed.
/// The [`Display`](fmt::Display) implementation is 1-based so it can be
/// printed directly as the tick ordinal in reports.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(C)]
pub struct Tick(u64);

impl Tick {
    pub const ZERO: Self = Tick(0);

    /// get a new [`Tick`].
    ///
    /// ```
    /// # use routesim_core::Tick;
    /// # let _tick =
    /// Tick::new()
    /// # ;
    /// ```
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// get the next tick.
    ///
    /// # Example
    ///
    /// ```
    /// # use routesim_core::Tick;
    /// # let prev = Tick::new();
    /// let next = prev.next();
    /// # assert_ne!(prev, next);
    /// assert!(prev < next);
    /// ```
    #[inline(always)]
    #[must_use = "function does not modify the current value"]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// index of the tick in the traffic profile
    ///
    /// Saturates at `usize::MAX` on targets where `usize` is narrower
    /// than `u64`, so the index never wraps back into the profile.
    #[inline(always)]
    pub fn index(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    #[inline(always)]
    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.saturating_add(1).fmt(f)
    }
}
