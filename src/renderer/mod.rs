//! Rendering module
//!
//! Game code draws through the `Surface` trait. `QuadBatch` turns those calls
//! into colored triangles which `RenderState` uploads to WebGPU each frame.

pub mod batch;
pub mod glyphs;
pub mod pipeline;
pub mod surface;
pub mod vertex;

pub use batch::QuadBatch;
pub use pipeline::RenderState;
pub use surface::{Surface, TextAlign};
pub use vertex::{Vertex, colors};
