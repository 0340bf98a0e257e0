//! Rendering module
//!
//! The simulation hands each finished frame to a `RenderSink` as a read-only
//! snapshot. Tessellation to colored triangles happens on the CPU; uploading
//! and presenting them belongs to the windowing layer.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use snapshot::RenderSnapshot;
pub use vertex::Vertex;

/// Consumer of per-frame snapshots. Never reads back into the simulation.
pub trait RenderSink {
    fn present(&mut self, frame: &RenderSnapshot);
}

/// Tessellates each frame into a reusable vertex buffer
#[derive(Debug, Default)]
pub struct VertexSink {
    vertices: Vec<Vertex>,
    frames: u64,
}

impl VertexSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a GPU vertex buffer
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for VertexSink {
    fn present(&mut self, frame: &RenderSnapshot) {
        shapes::frame_vertices(frame, &mut self.vertices);
        self.frames += 1;
        log::trace!(
            "frame {}: {} vertices ({} bytes)",
            frame.frame,
            self.vertices.len(),
            self.bytes().len()
        );
    }
}
