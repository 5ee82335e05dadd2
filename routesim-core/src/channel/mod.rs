mod id;
mod spec;

pub use self::{
    id::ChannelId,
    spec::{ChannelSpec, ChannelSpecError},
};

/// A capacity bounded outbound link.
///
/// A `Channel` accumulates load over the whole run: load is only ever
/// added (by the [`allocate`] routine), never drained. Once a channel is
/// full it stops being eligible for new traffic for the rest of the run.
///
/// The `overloaded` flag is a one-way latch: it is set the first time
/// the load is pushed past the capacity and is never cleared.
///
/// # Example
///
/// ```
/// # use routesim_core::channel::Channel;
/// let channel = Channel::new("Main", 1_000);
///
/// assert_eq!(channel.name(), "Main");
/// assert_eq!(channel.capacity(), 1_000);
/// assert_eq!(channel.current_load(), 0);
/// assert_eq!(channel.free_capacity(), 1_000);
/// assert!(!channel.is_full());
/// assert!(!channel.is_overloaded());
/// ```
///
/// [`allocate`]: crate::allocator::allocate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel {
    /// display only, the simulation never interprets it
    name: String,
    capacity: u64,
    current_load: u64,
    overloaded: bool,
}

impl Channel {
    /// create an empty [`Channel`] with the given maximum `capacity`.
    pub fn new(name: impl Into<String>, capacity: u64) -> Self {
        Self {
            name: name.into(),
            capacity,
            current_load: 0,
            overloaded: false,
        }
    }

    /// Returns the display name of the channel.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum load the channel can carry.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the load assigned to the channel so far in the run.
    #[inline]
    pub fn current_load(&self) -> u64 {
        self.current_load
    }

    /// get the remaining capacity of the [`Channel`].
    ///
    /// ```
    /// # use routesim_core::channel::Channel;
    /// let channel = Channel::new("Backup", 0);
    /// assert_eq!(channel.free_capacity(), 0);
    /// ```
    #[inline]
    pub fn free_capacity(&self) -> u64 {
        self.capacity.saturating_sub(self.current_load)
    }

    /// `true` when the channel cannot take any more traffic.
    ///
    /// A channel with a `0` capacity is full from the start.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.current_load >= self.capacity
    }

    /// `true` if the load has been pushed past the capacity at any
    /// point of the run.
    #[inline]
    pub fn is_overloaded(&self) -> bool {
        self.overloaded
    }

    /// Add `amount` to the channel's load.
    ///
    /// This does not check the remaining capacity, the caller decides
    /// how much to assign. Pushing the load past the capacity latches
    /// the overloaded flag.
    pub(crate) fn assign(&mut self, amount: u64) {
        self.current_load = self.current_load.saturating_add(amount);

        if self.current_load > self.capacity {
            self.overloaded = true;
        }
    }
}

impl From<ChannelSpec> for Channel {
    fn from(spec: ChannelSpec) -> Self {
        let (name, capacity) = spec.into_parts();
        Self::new(name, capacity)
    }
}
