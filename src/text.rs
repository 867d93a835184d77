//! (Optional) Working with [font faces](ttf_parser::Face), converting glyphs and text to [Shape]s

use crate::{error::Error, shape::Shape, utils::Vector};

#[derive(Default)]
struct OutlineBuilder {
    shape: Shape<f32>,
}

impl ttf_parser::OutlineBuilder for OutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.shape.move_to([x, y]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.shape.line_to([x, y]);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.shape.quadratic_to([x1, y1], [x, y]);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.shape.cubic_to([x1, y1], [x2, y2], [x, y]);
    }

    fn close(&mut self) {
        self.shape.close();
    }
}

/// Returns the outline of a given glyph in a given font face, one path per contour.
///
/// Glyph space has the Y axis pointing up, so the winding [direction](crate::path::Path::direction) comes out mirrored.
pub fn shape_of_glyph(face: &ttf_parser::Face, glyph_id: ttf_parser::GlyphId) -> Shape<f32> {
    let mut outline_builder = OutlineBuilder::default();
    if let Some(_bounding_box) = face.outline_glyph(glyph_id, &mut outline_builder) {
        outline_builder.shape
    } else {
        Shape::default()
    }
}

/// Defines where the X-axis origin of the text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Origin is to the left of the text (at the beginning).
    Left,
    /// Origin is at the center of the text (at the middle).
    Center,
    /// Origin is to the right of the text (at the end).
    Right,
}

/// Defines where the Y-axis origin of the text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Origin is at the bottom of the text.
    Bottom,
    /// Origin is at the base line of the text.
    Base,
    /// Origin is at the center line of the text (middle between base line and x-height).
    Center,
    /// Origin is at the top of the text.
    Top,
}

fn horizontal_shift(alignment: HorizontalAlignment, width: f32) -> f32 {
    width
        * match alignment {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Center => -0.5,
            HorizontalAlignment::Right => -1.0,
        }
}

/// Arranges a given string to a single shape (holding the contours of all its glyphs),
/// according to the given alignment and font face.
///
/// Glyphs advance horizontally only, pairs are kerned by the first subtable of the `kern` table.
///
/// Fails if the font face has no glyph for one of the characters.
pub fn shape_of_text(
    face: &ttf_parser::Face,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    text: &str,
) -> Result<Shape<f32>, Error> {
    let kerning_table = face.tables().kern.and_then(|kern| kern.subtables.into_iter().next());
    let mut layout = Vec::new();
    let mut offset_x = 0.0;
    let mut prev_glyph_id = None;
    for character in text.chars() {
        let glyph_id = face.glyph_index(character).ok_or(Error::MissingGlyph(character))?;
        if let (Some(prev_glyph_id), Some(kerning_table)) = (prev_glyph_id, kerning_table) {
            if let Some(kerning) = kerning_table.glyphs_kerning(prev_glyph_id, glyph_id) {
                offset_x += kerning as f32;
            }
        }
        layout.push((offset_x, glyph_id));
        if let Some(advance_x) = face.glyph_hor_advance(glyph_id) {
            offset_x += advance_x as f32;
        }
        prev_glyph_id = Some(glyph_id);
    }
    let shift_x = horizontal_shift(horizontal_alignment, offset_x);
    let shift_y = -match vertical_alignment {
        VerticalAlignment::Bottom => face.descender() as f32,
        VerticalAlignment::Base => 0.0,
        VerticalAlignment::Center => face.x_height().unwrap_or(0) as f32 * 0.5,
        VerticalAlignment::Top => face.ascender() as f32,
    };
    let mut shape = Shape::default();
    for (x, glyph_id) in layout {
        for mut path in shape_of_glyph(face, glyph_id).into_paths() {
            path.translate(Vector::new(x + shift_x, shift_y));
            shape.push(path);
        }
    }
    log::debug!("laid out {} characters into {} contours", text.chars().count(), shape.len());
    Ok(shape)
}
