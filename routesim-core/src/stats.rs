//! Run statistics and observability types.
//!
//! [`RoutingStats`] accumulates the outcome of every tick of a run.
//! Obtain it from [`Simulation::run`](crate::simulation::Simulation::run)
//! or [`Simulation::stats`](crate::simulation::Simulation::stats).

use crate::{
    allocator::Allocation,
    channel::{Channel, ChannelId},
};

/// Run level accumulator.
///
/// `total_traffic == routed_traffic + dropped_traffic` holds after every
/// tick folded in with [`RoutingStats::record`]. The traffic sums are
/// `u128` so that summing `u64` tick volumes cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoutingStats {
    /// Sum of the volumes of all the processed ticks.
    pub total_traffic: u128,
    /// Sum of the volumes placed on a channel.
    pub routed_traffic: u128,
    /// Sum of the volumes that could not be placed.
    pub dropped_traffic: u128,
    /// Number of channels carrying any load.
    pub used_channels: usize,
    /// Number of channels with the overloaded flag set.
    pub overloaded_channels: usize,
}

impl RoutingStats {
    /// Fold the outcome of one tick into the statistics.
    pub fn record(&mut self, volume: u64, allocation: Allocation) {
        debug_assert_eq!(volume, allocation.volume());

        self.total_traffic += u128::from(volume);
        self.routed_traffic += u128::from(allocation.routed);
        self.dropped_traffic += u128::from(allocation.dropped);
    }

    /// Count the used and overloaded channels.
    ///
    /// The counts are recomputed from scratch, calling this more than once
    /// on the same channels gives the same result.
    pub fn tally(&mut self, channels: &[Channel]) {
        self.used_channels = channels
            .iter()
            .filter(|channel| channel.current_load() > 0)
            .count();
        self.overloaded_channels = channels
            .iter()
            .filter(|channel| channel.is_overloaded())
            .count();
    }
}

/// Snapshot of a single channel at the end of (or during) a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    /// The channel's identifier.
    pub id: ChannelId,
    /// Display name of the channel.
    pub name: String,
    /// Load carried by the channel.
    pub current_load: u64,
    /// Maximum load of the channel.
    pub capacity: u64,
    /// Whether the load was ever pushed past the capacity.
    pub overloaded: bool,
}

impl ChannelStats {
    pub(crate) fn new(id: ChannelId, channel: &Channel) -> Self {
        Self {
            id,
            name: channel.name().to_owned(),
            current_load: channel.current_load(),
            capacity: channel.capacity(),
            overloaded: channel.is_overloaded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_conservation() {
        let mut stats = RoutingStats::default();

        stats.record(
            10,
            Allocation {
                routed: 7,
                dropped: 3,
            },
        );
        stats.record(
            5,
            Allocation {
                routed: 5,
                dropped: 0,
            },
        );

        assert_eq!(stats.total_traffic, 15);
        assert_eq!(stats.routed_traffic, 12);
        assert_eq!(stats.dropped_traffic, 3);
        assert_eq!(
            stats.total_traffic,
            stats.routed_traffic + stats.dropped_traffic
        );
    }

    #[test]
    fn record_beyond_u64_keeps_conservation() {
        let mut stats = RoutingStats::default();

        for _ in 0..2 {
            stats.record(
                u64::MAX,
                Allocation {
                    routed: 5,
                    dropped: u64::MAX - 5,
                },
            );
        }

        assert_eq!(stats.total_traffic, 2 * u128::from(u64::MAX));
        assert_eq!(stats.routed_traffic, 10);
        assert_eq!(
            stats.total_traffic,
            stats.routed_traffic + stats.dropped_traffic
        );
    }

    #[test]
    fn tally_is_idempotent() {
        let mut used = Channel::new("used", 10);
        used.assign(4);
        let mut overloaded = Channel::new("overloaded", 10);
        overloaded.assign(11);
        let channels = vec![used, Channel::new("idle", 10), overloaded];

        let mut stats = RoutingStats::default();
        stats.tally(&channels);
        stats.tally(&channels);

        assert_eq!(stats.used_channels, 2);
        assert_eq!(stats.overloaded_channels, 1);
    }

    #[test]
    fn tally_empty() {
        let mut stats = RoutingStats::default();
        stats.tally(&[]);

        assert_eq!(stats, RoutingStats::default());
    }
}
