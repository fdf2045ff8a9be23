//! # FrameKit Core
//!
//! Core types shared by every FrameKit crate: the error hierarchy, length
//! unit parsing and the identifier sequences the registry draws IDs from.

pub mod error;
pub mod ids;
pub mod units;

pub use error::{Error, GeometryError, RegistryError, Result, SessionError};
pub use ids::{CounterSequence, IdSequence};
pub use units::MeasurementSystem;
