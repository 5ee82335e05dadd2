use crate::{
    Tick, TrafficProfile,
    allocator::{Allocation, allocate},
    channel::{Channel, ChannelId, ChannelSpec},
    stats::{ChannelStats, RoutingStats},
};
use std::fmt;
use thiserror::Error;
use tracing::info;

/// This is the entry point of a routing run.
///
/// The [`Simulation`] owns the channels and the [`TrafficProfile`] for the
/// duration of the run. Every call to [`Simulation::step`] hands the next
/// tick's volume to the [allocator](crate::allocator::allocate) together
/// with the channels. The load carried by the channels is never reset so
/// each tick sees what the previous ones left behind.
///
/// # Example
///
/// ```
/// use routesim_core::{Simulation, TrafficProfile};
///
/// let mut simulation = Simulation::new(TrafficProfile::new(vec![500, 800]));
/// let main = simulation.new_channel("Main").set_capacity(1_000).build()?;
/// let backup = simulation.new_channel("Backup").set_capacity(600).build()?;
///
/// let stats = simulation.run();
///
/// assert_eq!(stats.routed_traffic, 1_300);
/// assert_eq!(simulation.channel(main).unwrap().current_load(), 1_000);
/// assert_eq!(simulation.channel(backup).unwrap().current_load(), 300);
/// # Ok::<(), routesim_core::SimulationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    channels: Vec<Channel>,

    profile: TrafficProfile,

    /// the next tick to process
    tick: Tick,

    stats: RoutingStats,
}

/// Builder for configuring a new channel before registering it with the
/// simulation.
///
/// Obtained via [`Simulation::new_channel`]. The capacity defaults to `0`
/// (a channel that never receives traffic).
pub struct ChannelBuilder<'a> {
    name: String,
    capacity: u64,

    simulation: &'a mut Simulation,
}

/// What happened during one tick of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub tick: Tick,
    /// the incoming traffic of the tick
    pub volume: u64,
    pub allocation: Allocation,
}

impl fmt::Display for TickOutcome {
    /// Two lines: the incoming traffic of the tick, then its allocation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tick {} incoming traffic: {}", self.tick, self.volume)?;
        write!(
            f,
            "Routed: {} Dropped: {}",
            self.allocation.routed, self.allocation.dropped
        )
    }
}

/// Error returned when configuring a [`Simulation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The channel topology is fixed once the first tick has been processed.
    #[error("Cannot add channel `{name}': simulation already started (next tick {tick})")]
    AlreadyStarted { name: String, tick: Tick },
}

impl ChannelBuilder<'_> {
    /// Set the maximum load the channel can carry.
    pub fn set_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Finalise the channel and register it with the simulation.
    ///
    /// Returns the [`ChannelId`] assigned to this channel.
    pub fn build(self) -> Result<ChannelId, SimulationError> {
        let Self {
            name,
            capacity,
            simulation,
        } = self;

        if simulation.tick != Tick::ZERO {
            return Err(SimulationError::AlreadyStarted {
                name,
                tick: simulation.tick,
            });
        }

        let id = ChannelId::new(simulation.channels.len());
        simulation.channels.push(Channel::new(name, capacity));

        Ok(id)
    }
}

impl Simulation {
    /// Create a new simulation with no channel.
    ///
    /// Add channels with [`new_channel`](Simulation::new_channel) before
    /// running it. Without any channel all the traffic is dropped.
    pub fn new(profile: TrafficProfile) -> Self {
        Self {
            channels: Vec::new(),
            profile,
            tick: Tick::ZERO,
            stats: RoutingStats::default(),
        }
    }

    /// Create a simulation with the given channels, in order.
    pub fn from_specs<I>(profile: TrafficProfile, specs: I) -> Self
    where
        I: IntoIterator<Item = ChannelSpec>,
    {
        let mut simulation = Self::new(profile);
        simulation.channels = specs.into_iter().map(Channel::from).collect();
        simulation
    }

    /// Create a new channel and return a builder to configure it.
    pub fn new_channel(&mut self, name: impl Into<String>) -> ChannelBuilder<'_> {
        ChannelBuilder {
            name: name.into(),
            capacity: 0,
            simulation: self,
        }
    }

    /// The traffic profile driving the run.
    pub fn profile(&self) -> &TrafficProfile {
        &self.profile
    }

    /// the next tick to be processed
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `true` once every tick of the profile has been processed.
    pub fn is_finished(&self) -> bool {
        self.tick.index() >= self.profile.len()
    }

    /// The channels in registration order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.get(id.index())
    }

    /// Snapshot of every channel, in registration order.
    pub fn channel_stats(&self) -> Vec<ChannelStats> {
        self.channels
            .iter()
            .enumerate()
            .map(|(index, channel)| ChannelStats::new(ChannelId::new(index), channel))
            .collect()
    }

    /// Statistics of the ticks processed so far.
    ///
    /// The used and overloaded channel counts reflect the current state of
    /// the channels.
    pub fn stats(&self) -> RoutingStats {
        let mut stats = self.stats;
        stats.tally(&self.channels);
        stats
    }

    /// Process the next tick of the profile.
    ///
    /// Returns `None` once the profile is exhausted.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let volume = *self.profile.get(self.tick.index())?;

        let allocation = allocate(volume, &mut self.channels);
        self.stats.record(volume, allocation);

        let outcome = TickOutcome {
            tick: self.tick,
            volume,
            allocation,
        };

        info!(
            tick = %outcome.tick,
            volume,
            routed = allocation.routed,
            dropped = allocation.dropped,
            "tick processed"
        );

        self.tick = self.tick.next();

        Some(outcome)
    }

    /// Process every remaining tick and return the final statistics.
    pub fn run(&mut self) -> RoutingStats {
        self.run_with(|_| {})
    }

    /// Same as [`Simulation::run`] but calls `on_tick` after every tick.
    pub fn run_with<F>(&mut self, mut on_tick: F) -> RoutingStats
    where
        F: FnMut(&TickOutcome),
    {
        info!(
            ticks = self.profile.len(),
            channels = self.channels.len(),
            "starting traffic routing simulation"
        );

        while let Some(outcome) = self.step() {
            on_tick(&outcome);
        }

        let stats = self.stats();

        info!(
            total = stats.total_traffic,
            routed = stats.routed_traffic,
            dropped = stats.dropped_traffic,
            used_channels = stats.used_channels,
            overloaded_channels = stats.overloaded_channels,
            "simulation finished"
        );

        stats
    }
}

/// Run the whole `profile` over `channels`, in order.
///
/// The channels keep their load across ticks and are left in their final
/// state for the caller to inspect.
///
/// ```
/// use routesim_core::{Channel, run};
///
/// let mut channels = vec![Channel::new("Main", 100)];
/// let stats = run(&[60, 60], &mut channels);
///
/// assert_eq!(stats.total_traffic, 120);
/// assert_eq!(stats.routed_traffic, 100);
/// assert_eq!(stats.dropped_traffic, 20);
/// assert_eq!(stats.used_channels, 1);
/// ```
pub fn run(profile: &[u64], channels: &mut [Channel]) -> RoutingStats {
    let mut stats = RoutingStats::default();

    for &volume in profile {
        let allocation = allocate(volume, channels);
        stats.record(volume, allocation);
    }

    stats.tally(channels);
    stats
}
