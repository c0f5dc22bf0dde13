//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep metrics/checklist/verdict/report structs in one place.
//! - Avoid cyclic imports between services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: metrics, checks, verdict, report and output structs.
//! - `constants.rs`: policy threshold, metric key aliases, default paths.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
