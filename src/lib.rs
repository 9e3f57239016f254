//! Generator for a web app's PWA icon set.
//!
//! Renders a coloured square (optionally with an accent disc) with a centred
//! label, and writes the PNG icons, touch icon and favicon.ico a PWA manifest
//! expects.

pub mod commands;
pub mod error;
pub mod export;
pub mod icon;
pub mod render;
pub mod targets;
pub mod utils;

pub use error::IconError;
