//! Core logic for running wrench headless with software rendering.
//!
//! # Design
//!
//! - Platform is detected once and passed explicitly as [`PlatformKind`]
//! - Environment changes are returned as [`EnvironmentOverrides`]; nothing in
//!   this crate mutates the process environment or working directory
//! - External programs are opaque: run, check the exit status, abort on failure

pub mod digest;
pub mod env;
pub mod error;
pub mod platform;
pub mod process;
pub mod resolver;

pub use env::{EnvironmentOverrides, configure};
pub use error::{HeadlessError, HeadlessResult};
pub use platform::PlatformKind;
pub use resolver::{BuildArtifactCandidate, resolve};
