//! Font sources and loaded faces

use std::path::{Path, PathBuf};
use std::sync::Arc;

use swash::{CacheKey, FontRef};

use crate::error::{GlyphError, GlyphResult};

/// Where a face comes from. Cheap to clone.
#[derive(Clone)]
pub enum FontSource {
    /// Font file on disk plus the face index inside it (collections)
    Path { path: PathBuf, index: usize },
    /// Font data already in memory
    Memory { data: Arc<[u8]>, index: usize },
}

impl FontSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path {
            path: path.into(),
            index: 0,
        }
    }

    pub fn memory(data: impl Into<Arc<[u8]>>) -> Self {
        FontSource::Memory {
            data: data.into(),
            index: 0,
        }
    }

    pub fn with_index(self, index: usize) -> Self {
        match self {
            FontSource::Path { path, .. } => FontSource::Path { path, index },
            FontSource::Memory { data, .. } => FontSource::Memory { data, index },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FontSource::Path { index, .. } | FontSource::Memory { index, .. } => *index,
        }
    }

    /// Human readable name for errors and logs
    pub fn name(&self) -> String {
        match self {
            FontSource::Path { path, index: 0 } => path.display().to_string(),
            FontSource::Path { path, index } => format!("{}#{}", path.display(), index),
            FontSource::Memory { data, index } => {
                format!("<memory {} bytes>#{}", data.len(), index)
            }
        }
    }

    /// Identity used by the face cache.
    pub fn key(&self) -> FaceKey {
        match self {
            FontSource::Path { path, index } => FaceKey::Path(path.clone(), *index),
            FontSource::Memory { data, index } => {
                FaceKey::Memory(data.as_ptr() as usize, data.len(), *index)
            }
        }
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FontSource").field(&self.name()).finish()
    }
}

impl From<&Path> for FontSource {
    fn from(path: &Path) -> Self {
        FontSource::path(path)
    }
}

impl From<PathBuf> for FontSource {
    fn from(path: PathBuf) -> Self {
        FontSource::path(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaceKey {
    Path(PathBuf, usize),
    Memory(usize, usize, usize),
}

/// A validated face: the font data plus the offset of the selected face.
///
/// The swash cache key is created once at load time so the scale context can
/// reuse its per-face state across render calls.
#[derive(Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    offset: u32,
    key: CacheKey,
    name: String,
}

impl FontFace {
    pub fn load(source: &FontSource) -> GlyphResult<Self> {
        let data: Arc<[u8]> = match source {
            FontSource::Path { path, .. } => {
                let bytes = std::fs::read(path).map_err(|e| GlyphError::InvalidFace {
                    source_name: source.name(),
                    reason: e.to_string(),
                })?;
                Arc::from(bytes)
            }
            FontSource::Memory { data, .. } => data.clone(),
        };

        let font = FontRef::from_index(&data, source.index()).ok_or_else(|| {
            GlyphError::InvalidFace {
                source_name: source.name(),
                reason: "not a readable font or face index out of range".to_string(),
            }
        })?;
        let (offset, key) = (font.offset, font.key);

        tracing::debug!("Loaded face {} ({} bytes)", source.name(), data.len());

        Ok(Self {
            data,
            offset,
            key,
            name: source.name(),
        })
    }

    pub fn as_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph id for `ch`, or `None` when the character map has no entry.
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match self.as_ref().charmap().map(ch) {
            0 => None,
            id => Some(id),
        }
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .finish()
    }
}
