//! Random color scheme generation module
//!
//! Produces four mutually legible theme colors from a source of randomness,
//! for seeding a "randomize" action in a configurator front-end.

pub mod generator;

pub use generator::{generate_color_scheme, SchemeGenerator};
