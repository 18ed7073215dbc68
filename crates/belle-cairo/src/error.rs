// src/error.rs
use belle_core::GlyphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),

    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Invalid coverage bitmap: {width}x{rows} with {len} bytes")]
    InvalidBitmap { width: u32, rows: u32, len: usize },

    #[error("Unsupported surface format: {format:?}")]
    UnsupportedFormat { format: cairo::Format },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
