//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs`: governance.toml loading, defaults, path resolution.
//! - `metrics.rs`: tolerant metrics loader and accuracy/F1 extraction.
//! - `artifacts.rs`: presence probes for sbom/fairness/quality/security.
//! - `verdict.rs`: decision function, review reasons, input fingerprint.
//! - `render.rs`: HTML/Markdown report templates and localized labels.
//! - `storage.rs`: report persistence.
//! - `evaluator.rs`: assess/render/write orchestration.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Input-side problems become values, never errors.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod artifacts;
pub mod config;
pub mod evaluator;
pub mod metrics;
pub mod output;
pub mod render;
pub mod storage;
pub mod verdict;
