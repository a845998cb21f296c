use crate::wire::wire_enum;

wire_enum! {
    /// Lifecycle phase of the master process, as reported to monitors and clients.
    pub enum MasterState {
        /// Process started, coordination lock not yet acquired.
        Initial = 0,
        /// Holds the exclusive master lock, still loading state.
        HaveLock = 1,
        /// Running with tablet assignment and table operations restricted.
        SafeMode = 2,
        /// Fully operational.
        Normal = 3,
        /// Shutting down: unloading metadata tablets.
        UnloadMetadataTablets = 4,
        /// Shutting down: unloading the root tablet.
        UnloadRootTablet = 5,
        /// Stopped.
        Stop = 6,
    }
}
