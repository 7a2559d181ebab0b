// Adapters layer: concrete implementations for the external collaborators
// (rendering surface, human-verification check).

pub mod render;
pub mod verify;
