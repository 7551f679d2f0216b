//! Drawing interfaces consumed by the GUI
//!
//! Keeps widgets independent of the graphics backend: widgets draw through
//! [`Surface`] and resolve textures and fonts through [`Assets`]. The
//! [`CommandRecorder`] surface captures draw calls for headless hosts.

pub mod backend;
pub mod commands;
pub mod recorder;

pub use backend::{Assets, Font, Surface, TextureHandle, TextureInfo};
pub use commands::DrawCommand;
pub use recorder::{AssetTable, CommandRecorder, MonoFont};
