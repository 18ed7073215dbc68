// src/config.rs
use crate::constants::{DEFAULT_CACHE_FACES, DEFAULT_HINTING};
use crate::vertical::VerticalForms;

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Grid-fit outlines when scaling (the font engine's default load mode)
    pub hinting: bool,
    /// Keep loaded faces between render calls
    pub cache_faces: bool,
    /// Characters that take their vertical-form position in tate mode
    pub vertical_forms: VerticalForms,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hinting: DEFAULT_HINTING,
            cache_faces: DEFAULT_CACHE_FACES,
            vertical_forms: VerticalForms::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hinting(mut self, enabled: bool) -> Self {
        self.hinting = enabled;
        self
    }

    pub fn with_face_cache(mut self, enabled: bool) -> Self {
        self.cache_faces = enabled;
        self
    }

    pub fn with_vertical_forms(mut self, forms: VerticalForms) -> Self {
        self.vertical_forms = forms;
        self
    }
}
