//! Face cache keyed by source identity

use std::collections::HashMap;

use crate::error::GlyphResult;
use crate::font::{FaceKey, FontFace, FontSource};

/// Loaded faces kept across render calls.
///
/// Sizing happens per scaler, so one entry serves every pixel height of a
/// face. With caching disabled every lookup reloads the face from its source.
pub struct FaceCache {
    enabled: bool,
    faces: HashMap<FaceKey, FontFace>,
    loads: usize,
}

impl Default for FaceCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FaceCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            faces: HashMap::new(),
            loads: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the face for `source`, loading it on a miss.
    pub fn get_or_load(&mut self, source: &FontSource) -> GlyphResult<FontFace> {
        if !self.enabled {
            let face = FontFace::load(source)?;
            self.loads += 1;
            return Ok(face);
        }

        let key = source.key();
        if let Some(face) = self.faces.get(&key) {
            return Ok(face.clone());
        }

        let face = FontFace::load(source)?;
        self.loads += 1;
        self.faces.insert(key, face.clone());
        Ok(face)
    }

    /// Drop a cached face, e.g. after the file changed on disk.
    pub fn evict(&mut self, source: &FontSource) -> bool {
        let removed = self.faces.remove(&source.key()).is_some();
        if !removed {
            tracing::warn!("Face {} was not cached", source.name());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// Number of cached faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of successful loads from source since creation
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache = FaceCache::new(true);
        let source = FontSource::memory(vec![0u8; 4]);
        assert!(matches!(
            cache.get_or_load(&source),
            Err(GlyphError::InvalidFace { .. })
        ));
        assert!(cache.is_empty());
        assert_eq!(cache.load_count(), 0);
    }

    #[test]
    fn test_evict_unknown_source() {
        let mut cache = FaceCache::default();
        assert!(!cache.evict(&FontSource::path("/fonts/none.ttf")));
    }
}
