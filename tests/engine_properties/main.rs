//! Property tests for the Molten query engine
//!
//! Exercises the engine through the root crate's re-exported API with
//! generated inputs.
//!
//! Run with: cargo test --test engine_properties

mod code_properties;
mod search_properties;
mod sort_properties;
