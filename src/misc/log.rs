/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, at `trace` level for individual clauses and formulas and at `debug` or `info` level for the results of checks.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to the [Tseitin encoding](crate::encode)
    pub const ENCODE: &str = "encode";

    /// Logs related to calls to a [SAT oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to [entailment checks](crate::procedures::entailment)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to [generation](crate::procedures::generate) and [search](crate::procedures::search)
    pub const GENERATION: &str = "generation";
}
