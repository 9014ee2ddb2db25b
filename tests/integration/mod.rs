//! Workflow tests for the hallucination report generator.
//!
//! These tests verify multi-report workflows including:
//! - Template cycling across consecutive generations
//! - Degenerate inputs (empty pools, blank entries, single sources)

mod edge_inputs;
mod generation_cycle;
