/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when a file is not read or evaluated as expected.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so logs can be narrowed with, e.g. `RUST_LOG=parser …` or `RUST_LOG=evaluation=trace …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [parser](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to the [evaluation](crate::procedures) of features
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [connected components](crate::procedures::connectivity)
    pub const CONNECTIVITY: &str = "connectivity";

    /// Logs related to [metadata](crate::reports::metadata)
    pub const METADATA: &str = "metadata";

    /// Logs related to workers of the cli
    pub const WORKER: &str = "worker";
}
