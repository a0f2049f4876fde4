//! Common utilities for the tinct color engine.
//!
//! This crate provides shared infrastructure used by the other tinct crates:
//! - **Warning System** - deduplicated warnings routed through the `log` facade
//! - **Math** - small numeric helpers shared by the converter and style layers
//! - **Text** - identifier case conversion for generated custom-property names

pub mod math;
pub mod text;
pub mod warning;

pub use math::clamp;
pub use text::kebab_case;
