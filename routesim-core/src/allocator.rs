//! Per-tick distribution of traffic across the channels.
//!
//! The allocator uses a _fill the fullest first_ policy: among the
//! channels that still have room, the one carrying the **highest** load
//! receives traffic first. Ties go to the channel that comes first in
//! scan order. This concentrates load on as few channels as possible
//! instead of spreading it like a least-loaded balancer would.
//!
//! ```
//! use routesim_core::{allocator::allocate, channel::Channel};
//!
//! let mut channels = vec![
//!     Channel::new("Main", 1_000),
//!     Channel::new("Backup", 600),
//! ];
//!
//! let allocation = allocate(1_200, &mut channels);
//! assert_eq!(allocation.routed, 1_200);
//! assert_eq!(allocation.dropped, 0);
//! assert_eq!(channels[0].current_load(), 1_000);
//! assert_eq!(channels[1].current_load(), 200);
//! ```

use crate::channel::Channel;
use std::cmp;
use tracing::{debug, trace};

/// Outcome of a single [`allocate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// volume assigned to some channel within its remaining capacity
    pub routed: u64,
    /// volume that could not be placed on any channel
    pub dropped: u64,
}

impl Allocation {
    /// the volume that was presented to the allocator
    ///
    /// every unit is either routed or dropped, nothing is lost.
    #[inline]
    pub fn volume(&self) -> u64 {
        self.routed + self.dropped
    }
}

/// Distribute `volume` across `channels`, mutating their load in place.
///
/// While there is traffic left, the eligible channel (i.e. not yet
/// [full](Channel::is_full)) with the highest load is selected and takes
/// as much of the remaining traffic as its free capacity allows. When no
/// channel is eligible anymore the rest of the volume is dropped.
///
/// Only the channels that are selected are touched. A zero `volume`
/// returns an empty [`Allocation`] without looking at the channels.
pub fn allocate(volume: u64, channels: &mut [Channel]) -> Allocation {
    let mut remaining = volume;
    let mut allocation = Allocation::default();

    while remaining > 0 {
        let Some(index) = select_fullest(channels) else {
            debug!(dropped = remaining, "no eligible channel, dropping traffic");
            allocation.dropped += remaining;
            break;
        };

        let channel = &mut channels[index];
        let take = cmp::min(remaining, channel.free_capacity());
        channel.assign(take);

        remaining -= take;
        allocation.routed += take;

        debug!(
            channel = channel.name(),
            take,
            load = channel.current_load(),
            capacity = channel.capacity(),
            "traffic placed"
        );
    }

    allocation
}

/// linear scan for the non-full channel with the highest load.
///
/// Only a strictly higher load replaces the current candidate so the
/// first channel found at the maximum wins.
fn select_fullest(channels: &[Channel]) -> Option<usize> {
    let mut selected: Option<usize> = None;

    for (index, channel) in channels.iter().enumerate() {
        if channel.is_full() {
            continue;
        }

        match selected {
            Some(best) if channels[best].current_load() >= channel.current_load() => {}
            _ => selected = Some(index),
        }
    }

    trace!(?selected, "channel selection");
    selected
}
