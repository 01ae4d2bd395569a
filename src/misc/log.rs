/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or tracking down an unexpected mutex.

Note, no log implementation is provided by the library.
The `graphplan` binary installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [level construction](crate::level::build)
    pub const LEVEL: &str = "level";

    /// Logs related to [mutex computation](crate::level::mutex)
    pub const MUTEX: &str = "mutex";

    /// Logs related to persistence (no-op) actions
    pub const PERSISTENCE: &str = "persistence";

    /// Logs related to the [graph](crate::graph) driver
    pub const GRAPH: &str = "graph";

    /// Logs related to reading literals or problems
    pub const PARSE: &str = "parse";
}
