//! Vault Comprehensive Test Suite
//!
//! Exercises the public `Vault` facade against real directories.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Per-operation behavior through the facade
//! - **Tier 2**: Multi-step application scenarios
//! - **Tier 3**: On-disk compatibility and damage recovery
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test vault_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Operation Tests
mod tier1_operations;

// Tier 2: Scenario Tests
mod tier2_scenarios;

// Tier 3: Compatibility and Recovery Tests
mod tier3_recovery;
