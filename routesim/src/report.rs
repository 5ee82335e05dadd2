//! Human readable summary of a finished run.

use routesim_core::{Channel, RoutingStats};
use std::fmt;

/// Overall assessment of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Nothing dropped and no channel overloaded.
    Balanced,
    /// Some traffic dropped but the channels stayed within capacity.
    Protected,
    /// At least one channel was overloaded.
    NeedsReview,
}

impl Verdict {
    pub fn from_stats(stats: &RoutingStats) -> Self {
        if stats.overloaded_channels > 0 {
            Self::NeedsReview
        } else if stats.dropped_traffic > 0 {
            Self::Protected
        } else {
            Self::Balanced
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("all traffic routed, no channel overloaded."),
            Self::Protected => f.write_str(
                "the balancer protected the channels, but part of the traffic was dropped.",
            ),
            Self::NeedsReview => f.write_str(
                "overloaded channels detected, the routing algorithm needs to be reviewed.",
            ),
        }
    }
}

/// The end of run report: statistics, channel states and [`Verdict`].
///
/// ```
/// use routesim::{Channel, RoutingStats, report::Report};
///
/// let channels = vec![Channel::new("Main", 1_000)];
/// let report = Report::new(RoutingStats::default(), &channels);
///
/// assert!(report.to_string().contains("- Main load: 0 capacity: 1000 overloaded: false"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    stats: RoutingStats,
    channels: &'a [Channel],
}

impl<'a> Report<'a> {
    pub fn new(stats: RoutingStats, channels: &'a [Channel]) -> Self {
        Self { stats, channels }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_stats(&self.stats)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;

        writeln!(f, "=== Traffic routing report ===")?;
        writeln!(f, "Total traffic: {}", stats.total_traffic)?;
        writeln!(f, "Routed traffic: {}", stats.routed_traffic)?;
        writeln!(f, "Dropped traffic: {}", stats.dropped_traffic)?;
        writeln!(f, "Used channels: {}", stats.used_channels)?;
        writeln!(f, "Overloaded channels: {}", stats.overloaded_channels)?;

        writeln!(f)?;
        writeln!(f, "Channel states:")?;
        for channel in self.channels {
            writeln!(
                f,
                "- {} load: {} capacity: {} overloaded: {}",
                channel.name(),
                channel.current_load(),
                channel.capacity(),
                channel.is_overloaded(),
            )?;
        }

        write!(f, "Conclusion: {}", self.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routesim_core::{Simulation, TrafficProfile, defaults};

    #[test]
    fn verdict() {
        // nothing dropped and nothing overloaded is a clean run: it must
        // not fall through to `NeedsReview`
        let balanced = RoutingStats {
            total_traffic: 10,
            routed_traffic: 10,
            used_channels: 1,
            ..RoutingStats::default()
        };
        assert_eq!(Verdict::from_stats(&balanced), Verdict::Balanced);

        let protected = RoutingStats {
            dropped_traffic: 1,
            ..balanced
        };
        assert_eq!(Verdict::from_stats(&protected), Verdict::Protected);

        let overloaded = RoutingStats {
            overloaded_channels: 1,
            ..balanced
        };
        assert_eq!(Verdict::from_stats(&overloaded), Verdict::NeedsReview);

        let both = RoutingStats {
            overloaded_channels: 1,
            ..protected
        };
        assert_eq!(Verdict::from_stats(&both), Verdict::NeedsReview);
    }

    #[test]
    fn default_scenario_report() {
        let profile = TrafficProfile::from(defaults::DEFAULT_TRAFFIC_PROFILE.as_slice());
        let mut simulation = Simulation::from_specs(profile, defaults::default_channels());
        let stats = simulation.run();

        let report = Report::new(stats, simulation.channels());

        assert_eq!(report.verdict(), Verdict::Protected);
        assert_eq!(
            report.to_string(),
            "\
=== Traffic routing report ===
Total traffic: 4100
Routed traffic: 2000
Dropped traffic: 2100
Used channels: 3
Overloaded channels: 0

Channel states:
- Main load: 1000 capacity: 1000 overloaded: false
- Backup1 load: 600 capacity: 600 overloaded: false
- Backup2 load: 400 capacity: 400 overloaded: false
Conclusion: the balancer protected the channels, but part of the traffic was dropped."
        );
    }
}
