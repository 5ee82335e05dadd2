//! Traffic routing simulator CLI
//!
//! Distributes a traffic profile over capacity bounded channels, tick by
//! tick, and prints the routing report.
//!
//! # Example
//!
//! ```bash
//! # default channels (Main, Backup1, Backup2) and default profile
//! routesim
//!
//! # custom channels and profile
//! routesim --channel Main:1000,Backup:600 --traffic "500, 800, 300"
//!
//! # reproducible random profile
//! RUST_LOG=routesim_core=debug routesim --random-ticks 20 --max-volume 800 --seed 42
//! ```

use anyhow::Result;
use clap::Parser;
use routesim::{ChannelSpec, Report, Simulation, TrafficProfile, defaults};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Traffic routing simulator
///
/// Single-threaded and deterministic: the same channels and profile
/// (or the same seed) always produce the same report.
#[derive(Parser, Debug)]
#[command(name = "routesim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Channel as `NAME:CAPACITY`, repeat or separate with commas.
    /// Defaults to Main:1000, Backup1:600, Backup2:400.
    #[arg(short = 'c', long = "channel", value_delimiter = ',')]
    channels: Vec<ChannelSpec>,

    /// Traffic volume per tick, separated by commas or spaces
    #[arg(short = 't', long, conflicts_with = "random_ticks")]
    traffic: Option<TrafficProfile>,

    /// Generate a random traffic profile with this many ticks
    #[arg(long)]
    random_ticks: Option<usize>,

    /// Upper bound of a generated tick volume [default: 1000]
    #[arg(long, requires = "random_ticks")]
    max_volume: Option<u64>,

    /// Seed of the generated traffic profile [default: 0]
    #[arg(long, requires = "random_ticks")]
    seed: Option<u64>,
}

const DEFAULT_MAX_VOLUME: u64 = 1_000;
const DEFAULT_SEED: u64 = 0;

impl Args {
    fn channels(&self) -> Vec<ChannelSpec> {
        if self.channels.is_empty() {
            defaults::default_channels()
        } else {
            self.channels.clone()
        }
    }

    fn profile(&self) -> TrafficProfile {
        match (&self.traffic, self.random_ticks) {
            (Some(traffic), _) => traffic.clone(),
            (None, Some(ticks)) => TrafficProfile::seeded(
                self.seed.unwrap_or(DEFAULT_SEED),
                ticks,
                self.max_volume.unwrap_or(DEFAULT_MAX_VOLUME),
            ),
            (None, None) => TrafficProfile::from(defaults::DEFAULT_TRAFFIC_PROFILE.as_slice()),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let profile = args.profile();
    let channels = args.channels();

    info!(%profile, channels = channels.len(), "configuration");

    println!("Simulating network traffic distribution...");
    println!("Ticks: {} Channels: {}", profile.len(), channels.len());

    let mut simulation = Simulation::from_specs(profile, channels);
    let stats = simulation.run_with(|outcome| {
        println!();
        println!("{outcome}");
    });

    println!();
    println!("{}", Report::new(stats, simulation.channels()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["routesim"]).unwrap();

        assert_eq!(args.channels(), defaults::default_channels());
        assert_eq!(args.profile().as_slice(), &defaults::DEFAULT_TRAFFIC_PROFILE);
    }

    #[test]
    fn explicit_channels_and_traffic() {
        let args = Args::try_parse_from([
            "routesim",
            "--channel",
            "A:10,B:20",
            "-c",
            "C:0",
            "--traffic",
            "5, 6 7",
        ])
        .unwrap();

        assert_eq!(
            args.channels(),
            vec![
                ChannelSpec::new("A", 10),
                ChannelSpec::new("B", 20),
                ChannelSpec::new("C", 0),
            ]
        );
        assert_eq!(args.profile().as_slice(), &[5, 6, 7]);
    }

    #[test]
    fn random_profile() {
        let args = Args::try_parse_from([
            "routesim",
            "--random-ticks",
            "12",
            "--max-volume",
            "50",
            "--seed",
            "9",
        ])
        .unwrap();

        assert_eq!(args.profile(), TrafficProfile::seeded(9, 12, 50));
    }

    #[test]
    fn random_profile_defaults() {
        let args = Args::try_parse_from(["routesim", "--random-ticks", "3"]).unwrap();

        assert_eq!(
            args.profile(),
            TrafficProfile::seeded(DEFAULT_SEED, 3, DEFAULT_MAX_VOLUME)
        );
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(Args::try_parse_from(["routesim", "--channel", "Main:-1"]).is_err());
        assert!(Args::try_parse_from(["routesim", "--traffic", "1,-2"]).is_err());
        assert!(
            Args::try_parse_from(["routesim", "--traffic", "1", "--random-ticks", "3"]).is_err()
        );
        assert!(Args::try_parse_from(["routesim", "--seed", "3"]).is_err());
    }
}
