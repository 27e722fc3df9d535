//! Heuristic detectors run against a project root.
//!
//! ## Main Parts
//!
//! - [`signature`] - clause-based matching shared by the two signature tables
//! - [`frameworks`] - application frameworks, monorepo tools, doc generators, bot libraries
//! - [`ui`] - UI and styling toolkits
//! - [`routing`] - routing convention of the first routing-aware framework
//! - [`stack`] - the single [`StackType`] of the project
//! - [`language`] - the primary [`Language`]

pub mod frameworks;
pub mod language;
pub mod routing;
pub mod signature;
pub mod stack;
pub mod ui;

pub use frameworks::detect_frameworks;
pub use language::{Language, detect_language};
pub use routing::{RoutingDescriptor, detect_routing};
pub use signature::DetectionContext;
pub use stack::{StackInputs, StackType, classify_stack};
pub use ui::detect_ui_frameworks;
