use crate::channel::ChannelSpec;

/// Default traffic profile
///
/// Six ticks of demand that first fit comfortably in the default
/// channels and then exceed what they can carry.
///
/// ```
/// # use routesim_core::defaults::*;
/// assert_eq!(DEFAULT_TRAFFIC_PROFILE.iter().sum::<u64>(), 4_100);
/// ```
pub const DEFAULT_TRAFFIC_PROFILE: [u64; 6] = [500, 800, 300, 1_200, 900, 400];

/// Default capacity of the primary channel
pub const DEFAULT_MAIN_CAPACITY: u64 = 1_000;

/// Default capacity of the first backup channel
pub const DEFAULT_BACKUP1_CAPACITY: u64 = 600;

/// Default capacity of the second backup channel
pub const DEFAULT_BACKUP2_CAPACITY: u64 = 400;

/// Default channel set: one primary link and two backups.
///
/// ```
/// # use routesim_core::defaults::*;
/// let channels = default_channels();
///
/// assert_eq!(channels.len(), 3);
/// assert_eq!(channels[0].to_string(), "Main:1000");
/// ```
pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec::new("Main", DEFAULT_MAIN_CAPACITY),
        ChannelSpec::new("Backup1", DEFAULT_BACKUP1_CAPACITY),
        ChannelSpec::new("Backup2", DEFAULT_BACKUP2_CAPACITY),
    ]
}
