//! Resume screening core: a role skill catalog, a substring skill matcher, a
//! configurable selection policy, and an optional statistical classifier, all
//! exposed through one evaluation engine.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
