//! Paste-coordinate mapping for composited glyphs

use crate::character::{BitmapOffset, Character};
use crate::traits::PositionMapper;
use crate::vertical::VerticalForms;

/// Default mapper: centers the bitmap origin on the target point and, in
/// tate mode, transposes the axes for characters in the vertical-form set.
#[derive(Debug, Clone, Default)]
pub struct TateMapping {
    forms: VerticalForms,
}

impl TateMapping {
    pub fn new(forms: VerticalForms) -> Self {
        Self { forms }
    }

    pub fn forms(&self) -> &VerticalForms {
        &self.forms
    }

    pub fn needs_vertical_form(&self, character: &Character) -> bool {
        character.tate() && self.forms.contains(character.ch())
    }
}

impl PositionMapper for TateMapping {
    fn map(
        &self,
        glyph_size: u32,
        character: &Character,
        offset: BitmapOffset,
        _size: (i32, i32),
    ) -> (i32, i32) {
        // Sizes past i32 saturate; results clamp at the i32 bounds
        let size = i32::try_from(glyph_size).unwrap_or(i32::MAX);
        let half = size / 2;
        let ax = offset.left.saturating_sub(half);
        let ay = offset.top.saturating_sub(half).saturating_add(size);

        let (dx, dy) = if self.needs_vertical_form(character) {
            (ay, ax)
        } else {
            (ax, ay)
        };
        let mapped = (character.x().saturating_add(dx), character.y().saturating_add(dy));

        tracing::trace!(
            "map {:?} offset=({}, {}) size={} -> {:?}",
            character.ch(),
            offset.left,
            offset.top,
            glyph_size,
            mapped
        );
        mapped
    }
}
