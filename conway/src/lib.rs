//! Conway's Game of Life generalized to survive/born rule sets, on a torus.
//!
//! [`Engine`] owns the grid and applies the rule one synchronous generation
//! at a time. It knows nothing about rendering or timing; a host drives it.

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rows;
pub mod rule;

pub use engine::Engine;
pub use error::EngineError;
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use rule::{NeighborSet, RULE_PRESETS, Rule, RuleParseError};
