/*!
# Traffic routing simulation core

Deterministic, tick based simulation of incoming traffic distributed
over a small, fixed set of capacity bounded [`Channel`]s.

Every tick of a [`TrafficProfile`] is handed to the
[allocator](allocator::allocate), which places the volume on the channels
(fullest eligible channel first) and reports how much was routed and
how much had to be dropped. The [`Simulation`] drives the ticks in order
and folds the outcomes into [`RoutingStats`].

```
use routesim_core::{Simulation, TrafficProfile, defaults};

let profile = TrafficProfile::from(defaults::DEFAULT_TRAFFIC_PROFILE.as_slice());
let mut simulation = Simulation::from_specs(profile, defaults::default_channels());

let stats = simulation.run();

assert_eq!(stats.total_traffic, 4_100);
assert_eq!(stats.routed_traffic, 2_000);
assert_eq!(stats.dropped_traffic, 2_100);
```
*/

pub mod allocator;
pub mod channel;
pub mod defaults;
mod profile;
pub mod simulation;
pub mod stats;
mod tick;

pub use self::{
    allocator::Allocation,
    channel::{Channel, ChannelId, ChannelSpec, ChannelSpecError},
    profile::TrafficProfile,
    simulation::{ChannelBuilder, Simulation, SimulationError, TickOutcome, run},
    stats::{ChannelStats, RoutingStats},
    tick::Tick,
};
