//! Landmarks module - detector topology and per-frame landmark sets
//!
//! Re-exports only. Index tables in `face` / `hand`, data in `frame`.

pub mod face;
pub mod hand;
mod frame;

pub use frame::{Landmark, FaceLandmarks, HandLandmarks, Frame};
