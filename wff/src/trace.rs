/*! Names of the `tracing` spans, events and fields emitted by the library.

The library never prints. Hosts that want to observe queries install a `tracing` subscriber and
match on these names. */

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const QUERY_FIELD: &str = "query";
pub const FORMULA_FIELD: &str = "formula";
pub const OTHER_FIELD: &str = "other";
pub const ATOMS_FIELD: &str = "atoms";
pub const RESULT_FIELD: &str = "result";
pub const ASSIGNMENT_FIELD: &str = "assignment";
pub const FORM_FIELD: &str = "form";
pub const CLAUSES_FIELD: &str = "clauses";

// log span types:
/// Inside an analysis query.
pub const ANALYZE: &str = "@analyze";

// log event types:
/// An analysis query is answered.
pub const VERDICT: &str = "@verdict";

/// An assignment that decides a query is found.
pub const WITNESS: &str = "@witness";

/// A formula is converted to a clause normal form.
pub const NORMALIZE: &str = "@normalize";
