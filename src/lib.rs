//! Hallucination Reports
//!
//! A satirical generator of mock "AI hallucination" reports. Fictional
//! personal facts ("blue" data) are recombined with fictional excerpts
//! attributed to external sites ("red" data) through a themed narrative
//! template, and every report carries a provenance trace showing exactly
//! which inputs produced it.
//!
//! # Features
//!
//! - Non-repeating random selection with bounded retries and padded fallbacks
//! - Priority-ordered theme classification from sites and facts
//! - Nine built-in narrative templates with per-cycle repeat avoidance
//! - Escaped HTML rendering with blue/red provenance spans
//! - Seedable randomness for reproducible runs
//!
//! # Quick Start
//!
//! ```bash
//! FACTS_PATH=./data/personal-facts.json RNG_SEED=7 ./hallucinate
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌────────────┐   ┌─────────┐   ┌────────┐
//! │ InputStore │──▶│ Selector │──▶│ Classifier │──▶│ Catalog │──▶│ Markup │
//! └────────────┘   └──────────┘   └────────────┘   └─────────┘   └────────┘
//!        ▲                    ReportCompiler + GenerationState
//!   FsLoader (JSON)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod error;
pub mod markup;
pub mod report;
pub mod selector;
pub mod store;
pub mod theme;
pub mod traits;

#[cfg(test)]
mod test_utils;
