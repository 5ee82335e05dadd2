use anyhow::{anyhow, ensure};
use logos::{Lexer, Logos};
use rand_chacha::ChaChaRng;
use rand_core::{Rng, SeedableRng as _};
use std::{fmt, ops::Deref, str::FromStr};

/// The incoming demand, one volume per simulated tick.
///
/// The order of the volumes models time: a [`Simulation`] processes them
/// front to back and the load left behind by one tick is still there for
/// the next one.
///
/// # Example
///
/// ```
/// # use routesim_core::TrafficProfile;
/// let profile: TrafficProfile = "500, 800 300".parse().unwrap();
///
/// assert_eq!(profile.as_slice(), &[500, 800, 300]);
/// assert_eq!(profile.total(), 1_600);
/// assert_eq!(profile.to_string(), "500, 800, 300");
/// ```
///
/// [`Simulation`]: crate::simulation::Simulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TrafficProfile(Vec<u64>);

impl TrafficProfile {
    pub fn new(volumes: Vec<u64>) -> Self {
        Self(volumes)
    }

    /// Generate a random profile of `ticks` volumes, each in
    /// `0..=max_volume`.
    ///
    /// The caller provides `rng` so the randomness of a run comes from a
    /// single source it controls. See [`TrafficProfile::seeded`] for a
    /// reproducible profile.
    pub fn generate<R: Rng>(rng: &mut R, ticks: usize, max_volume: u64) -> Self {
        let volumes = (0..ticks)
            .map(|_| {
                let bits = rng.next_u64();
                match max_volume.checked_add(1) {
                    Some(bound) => bits % bound,
                    None => bits,
                }
            })
            .collect();

        Self(volumes)
    }

    /// Generate a random profile from a [`ChaChaRng`] seeded with `seed`.
    ///
    /// The same `seed` always yields the same profile.
    ///
    /// ```
    /// # use routesim_core::TrafficProfile;
    /// let a = TrafficProfile::seeded(42, 10, 1_000);
    /// let b = TrafficProfile::seeded(42, 10, 1_000);
    ///
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 10);
    /// assert!(a.iter().all(|volume| *volume <= 1_000));
    /// ```
    pub fn seeded(seed: u64, ticks: usize, max_volume: u64) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        Self::generate(&mut rng, ticks, max_volume)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// sum of all the volumes of the profile
    pub fn total(&self) -> u128 {
        self.0.iter().map(|volume| u128::from(*volume)).sum()
    }
}

impl Deref for TrafficProfile {
    type Target = [u64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u64>> for TrafficProfile {
    fn from(volumes: Vec<u64>) -> Self {
        Self(volumes)
    }
}

impl From<&[u64]> for TrafficProfile {
    fn from(volumes: &[u64]) -> Self {
        Self(volumes.to_vec())
    }
}

impl FromIterator<u64> for TrafficProfile {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TrafficProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut volumes = self.0.iter();
        if let Some(first) = volumes.next() {
            write!(f, "{first}")?;
        }
        for volume in volumes {
            write!(f, ", {volume}")?;
        }
        Ok(())
    }
}

impl FromStr for TrafficProfile {
    type Err = anyhow::Error;

    /// Parses volumes separated by commas and/or whitespace.
    ///
    /// An empty string is an empty profile.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, Token>::new(s);

        let mut volumes = Vec::new();
        let mut expect_value = true;

        while let Some(next) = lex.next() {
            let token = next.map_err(|()| {
                anyhow!("Failed to parse `{s}': unexpected `{}'", lex.slice())
            })?;

            match token {
                Token::Value => {
                    let volume: u64 = lex.slice().parse()?;
                    volumes.push(volume);
                    expect_value = false;
                }
                Token::Separator => {
                    ensure!(
                        !expect_value,
                        "Failed to parse `{s}', expecting a volume before `,'"
                    );
                    expect_value = true;
                }
            }
        }

        ensure!(
            volumes.is_empty() || !expect_value,
            "Failed to parse `{s}', trailing `,'"
        );

        Ok(Self(volumes))
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token(",")]
    Separator,

    #[regex("[0-9]+")]
    Value,
}
