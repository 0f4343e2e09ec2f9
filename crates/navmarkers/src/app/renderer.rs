use nav_marker_manager::RenderSink;
use nav_marker_models::{messages::MessageToRenderer, render::RenderInstruction};
use tracing::trace;

/// Stands in for the game renderer: keeps what it was asked to draw so the host can print it.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    pub instructions: Vec<RenderInstruction>,
    instructions_wip: Vec<RenderInstruction>, //work in progress: filled until the next swap
}

impl ConsoleRenderer {
    pub fn begin(&mut self) {
        trace!("Begin with a fresh list of instructions");
        self.instructions_wip.clear();
    }

    pub fn swap(&mut self) {
        trace!("swap to display {} instructions", self.instructions_wip.len());
        self.instructions = std::mem::take(&mut self.instructions_wip);
    }

    /// One line per instruction currently displayed.
    pub fn describe(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                RenderInstruction::Sphere(sphere) => format!(
                    "{}: sphere of {}m, {:?}, {} segments, width {:.2}, {:?} blend, color {}",
                    sphere.marker_name,
                    sphere.radius,
                    sphere.raster_mode,
                    sphere.wire_segments,
                    sphere.wireframe_width,
                    sphere.blend_mode,
                    sphere.color
                ),
                RenderInstruction::Lines(lines) => format!(
                    "{}: {} lines of thickness {}, {:?} blend, color {}",
                    lines.marker_name,
                    lines.segments.len(),
                    lines.thickness,
                    lines.blend_mode,
                    lines.color
                ),
            })
            .collect()
    }
}

impl RenderSink for ConsoleRenderer {
    fn send(&mut self, message: MessageToRenderer) {
        match message {
            MessageToRenderer::BulkInstructions(instructions) => {
                self.begin();
                self.instructions_wip.extend(instructions);
            }
            MessageToRenderer::RenderSwapChain => self.swap(),
        }
    }
}
