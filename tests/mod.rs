//! Test suite for Backforge.
//!
//! Every test here is headless: windows are driven through their public
//! state-machine methods and the generation pipeline through its pure
//! functions, so the whole suite runs without a display or network access.
//!
//! # Test Organization
//!
//! ## Blueprint Tests
//! **Purpose**: Validate the record stores and id allocation
//! **Coverage**: add/replace/remove contracts, silent no-ops on unknown ids,
//! allocator monotonicity, enum serialization
//!
//! ## Generation Pipeline Tests
//! **Purpose**: Validate everything between the blueprint and the service
//! **Coverage**: prompt determinism and branch exclusivity, credential
//! fail-fast, error taxonomy, response cleanup
//!
//! ## Window Tests
//! **Purpose**: Validate builder staging/validation and focus coordination
//! **Coverage**: save/cancel transitions, duplicate-field rejection,
//! value-copy staging, focus manager lifecycle
//!
//! # Running Tests
//!
//! ```bash
//! cargo test                         # whole suite
//! cargo test --test blueprint_tests  # one file
//! ```

// ================================================================================================
// Blueprint Tests - Record stores, id allocation, domain enums
// ================================================================================================

/// Record store contract and id allocator behavior
mod blueprint_tests;

// ================================================================================================
// Generation Pipeline Tests - Prompt assembly, Gemini client, output cleanup
// ================================================================================================

/// Prompt determinism, data-layer branching, and the auth block
mod prompt_builder_tests;

/// Client construction from the environment and the error taxonomy
mod gemini_client_tests;


// ================================================================================================
// Window Tests - Builder state machines and focus coordination
// ================================================================================================


/// Focus manager lifecycle and FocusableWindow implementations
mod window_focus_tests;
