use std::{fmt, num::ParseIntError, str::FromStr};

/// The `(name, capacity)` pair describing a channel before the run starts.
///
/// # Example
///
/// ```
/// use routesim_core::channel::ChannelSpec;
///
/// let spec: ChannelSpec = "Main:1000".parse().unwrap();
/// assert_eq!(spec.name(), "Main");
/// assert_eq!(spec.capacity(), 1_000);
/// assert_eq!(spec.to_string(), "Main:1000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelSpec {
    name: String,
    capacity: u64,
}

/// Error returned when parsing a [`ChannelSpec`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelSpecError {
    #[error("expected `NAME:CAPACITY`, missing the `:` separator")]
    MissingSeparator,
    #[error("the channel name cannot be empty")]
    EmptyName,
    #[error("invalid capacity `{capacity}': {source}")]
    InvalidCapacity {
        capacity: String,
        #[source]
        source: ParseIntError,
    },
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>, capacity: u64) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub(crate) fn into_parts(self) -> (String, u64) {
        (self.name, self.capacity)
    }
}

impl fmt::Display for ChannelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.capacity)
    }
}

impl FromStr for ChannelSpec {
    type Err = ChannelSpecError;

    /// Parses `NAME:CAPACITY`, e.g. `"Backup1:600"`.
    ///
    /// The capacity is whatever follows the last `:` so the name may
    /// itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((name, capacity)) = s.rsplit_once(':') else {
            return Err(ChannelSpecError::MissingSeparator);
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ChannelSpecError::EmptyName);
        }

        let capacity = capacity.trim();
        let value = capacity
            .parse::<u64>()
            .map_err(|source| ChannelSpecError::InvalidCapacity {
                capacity: capacity.to_owned(),
                source,
            })?;

        Ok(Self::new(name, value))
    }
}
