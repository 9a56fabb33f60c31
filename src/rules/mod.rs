//! Match officiating.
//!
//! The [`Referee`] is the only component that decides the match is won; the
//! board only knows whether it is empty.

pub mod referee;

pub use referee::Referee;
