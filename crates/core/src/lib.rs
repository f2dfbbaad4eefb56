#![deny(unsafe_code)]
//! Core types for the ambient point-field background animation.
//!
//! Provides the `Surface` drawing trait, `Viewport`, `PointerThrottle`,
//! color types (`Srgb`, `Rgba`), the `Xorshift64` PRNG, `Scene`, and
//! parameter helpers. The simulation itself lives in `ambient-field`.

pub mod color;
pub mod error;
pub mod params;
pub mod pointer;
pub mod prng;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use color::{Rgba, Srgb};
pub use error::FieldError;
pub use pointer::PointerThrottle;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use surface::Surface;
pub use viewport::Viewport;

pub use glam::DVec2;
