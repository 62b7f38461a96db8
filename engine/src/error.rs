use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing the window, the graphics device or the game assets up.
///
/// None of these happen once the event loop is running.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to create window")]
    CreateWindow(#[source] winit::error::OsError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("surface has no supported format for the selected adapter")]
    NoSurfaceFormat,
    #[error("failed to request graphics device")]
    RequestDevice(#[source] wgpu::RequestDeviceError),
    #[error("failed to load texture '{}'", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
