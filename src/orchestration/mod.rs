//! Glue between a snapshot source and the projection engine.

pub mod previewer;

pub use previewer::Previewer;
