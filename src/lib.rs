//! Third-person character locomotion for Bevy + avian3d.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod dev;
pub mod locomotion;
