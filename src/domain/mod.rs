//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the frequency table, ranked entries and report structs in one place.
//! - Avoid cyclic imports between services, coordinator and commands.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` - frequency table, chart series, reports, output envelopes.
//! - `constants.rs` - default source, limits, export filename/content type.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
