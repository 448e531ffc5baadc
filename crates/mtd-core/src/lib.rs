//! # mtd-core
//!
//! Core types and error types for Metodist.
//!
//! This crate provides the foundational types shared across all Metodist crates:
//! - The per-invocation [`GenerationRequest`](request::GenerationRequest) and its
//!   validated fields (grade, max score)
//! - Document kind and instruction language enums
//! - The tunable text heuristics ([`TextRules`](rules::TextRules)) used by the
//!   normalizer and renderer, and the font settings of the produced file
//! - The generated-document artifact, its file naming, and the single-slot
//!   last-result cache
//! - Cross-cutting error types

pub mod artifact;
pub mod enums;
pub mod errors;
pub mod request;
pub mod rules;
pub mod typography;

pub use artifact::{GeneratedDocument, ResultSlot};
pub use enums::{DocumentKind, Language};
pub use errors::CoreError;
pub use request::{GenerationRequest, Grade, MaxScore};
pub use rules::TextRules;
pub use typography::Typography;
