/*!
# Traffic Routing Simulator

Runs a [`Simulation`] and renders its outcome as a human readable
[`Report`](report::Report).
*/

pub mod report;

// convenient re-export of `routesim_core` core objects
pub use routesim_core::{
    Allocation, Channel, ChannelId, ChannelSpec, ChannelSpecError, ChannelStats, RoutingStats,
    Simulation, SimulationError, Tick, TickOutcome, TrafficProfile, defaults,
};

pub use self::report::{Report, Verdict};
