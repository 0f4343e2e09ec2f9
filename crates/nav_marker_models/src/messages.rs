use crate::render::RenderInstruction;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageToRenderer {
    /// Every instruction computed during a tick, in store order.
    BulkInstructions(Vec<RenderInstruction>),
    RenderSwapChain, // The list of elements to display was changed
}
