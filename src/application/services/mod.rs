//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Renderer)
//! but are themselves concrete structs, not traits.

mod visualize;

pub use visualize::VisualizeService;
