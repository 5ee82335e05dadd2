use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a [`Channel`] within a [`Simulation`].
///
/// Identifiers follow the order in which the channels were registered,
/// which is also the order the allocator scans them in.
///
/// [`Channel`]: crate::channel::Channel
/// [`Simulation`]: crate::simulation::Simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct ChannelId(usize);

impl ChannelId {
    pub const FIRST: Self = ChannelId::new(0);

    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// position of the channel in the scan order
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl str::FromStr for ChannelId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        assert_eq!(format!("{}", ChannelId(42)), "42")
    }

    #[test]
    fn parse() {
        assert_eq!("42".parse::<ChannelId>().unwrap(), ChannelId(42));
    }

    #[test]
    fn parse_negative_fails() {
        assert!("-1".parse::<ChannelId>().is_err());
    }

    #[test]
    fn ordering_follows_index() {
        assert!(ChannelId::FIRST < ChannelId::new(1));
        assert_eq!(ChannelId::new(3).index(), 3);
    }
}
