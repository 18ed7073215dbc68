// src/error.rs
use thiserror::Error;

/// Errors raised while building a glyph request or rasterizing it.
///
/// None of these are recovered inside the pipeline: a failure aborts the
/// render call for that one character and the caller decides what to do
/// next (skip, substitute, abort the whole run).
#[derive(Error, Debug)]
pub enum GlyphError {
    // Font face errors
    #[error("Invalid font face {source_name}: {reason}")]
    InvalidFace { source_name: String, reason: String },

    #[error("No outline for {ch:?} in {source_name}")]
    MissingGlyph { ch: char, source_name: String },

    // Request validation errors
    #[error("Invalid glyph style: {field} = {value}")]
    InvalidStyle { field: &'static str, value: String },

    #[error("Invalid color: {input:?}")]
    InvalidColor { input: String },

    #[error("Invalid vertical form entry on line {line}: {content:?}")]
    InvalidVerticalForms { line: usize, content: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GlyphResult<T> = Result<T, GlyphError>;
