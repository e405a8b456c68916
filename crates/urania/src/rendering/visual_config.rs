use crate::aspects::AspectKind;
use crate::ephemeris::Body;
use crate::rendering::primitives::Color;

/// Ring radii as fractions of the zodiac ring radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    pub sign_band_outer: f32,
    pub sign_glyph: f32,
    pub outer_circle: f32,
    pub point_glyph: f32,
    pub retrograde: f32,
    pub degree_text: f32,
    pub minutes_text: f32,
    pub middle_circle: f32,
    pub house_number: f32,
    pub inner_circle: f32,
    pub outer_tick: (f32, f32),
    pub inner_tick: (f32, f32),
    pub aspect_chord: f32,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            sign_band_outer: 1.08,
            sign_glyph: 1.04,
            outer_circle: 1.0,
            point_glyph: 0.90,
            retrograde: 0.85,
            degree_text: 0.80,
            minutes_text: 0.72,
            middle_circle: 0.65,
            house_number: 0.60,
            inner_circle: 0.55,
            outer_tick: (0.98, 1.0),
            inner_tick: (0.53, 0.55),
            aspect_chord: 0.53,
        }
    }
}

/// Visual styling configuration for chart elements
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub size: f32,
    pub radii: RingRadii,
    pub background_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub angle_stroke_width: f32,
    pub hard_aspect_color: Color,
    pub soft_aspect_color: Color,
    pub aspect_stroke_width: f32,
    /// Alpha applied to the element colour of each sign sector
    pub sign_fill_alpha: u8,
    pub glyph_size: f32,
    pub label_size: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            size: 800.0,
            radii: RingRadii::default(),
            background_color: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            angle_stroke_width: 2.0,
            hard_aspect_color: AspectKind::Square.color(),
            soft_aspect_color: AspectKind::Trine.color(),
            aspect_stroke_width: 1.0,
            sign_fill_alpha: 48,
            glyph_size: 22.0,
            label_size: 11.0,
        }
    }
}

impl VisualConfig {
    pub fn aspect_color(&self, kind: AspectKind) -> Color {
        if kind.is_hard() {
            self.hard_aspect_color
        } else {
            self.soft_aspect_color
        }
    }

    /// Ring radius in pixels, leaving room for the sign band
    pub fn ring_radius(&self) -> f32 {
        self.size / 2.0 / (self.radii.sign_band_outer + 0.04)
    }
}

/// Glyph colour for a body
pub fn body_color(body: Body) -> Color {
    match body {
        Body::Sun => Color::rgb(0xd4, 0x8c, 0x00),
        Body::Moon => Color::rgb(0x70, 0x70, 0x70),
        Body::Mars => Color::rgb(0xc0, 0x1c, 0x28),
        Body::Venus => Color::rgb(0x2e, 0x8b, 0x57),
        Body::Fortune | Body::TrueNode | Body::SouthNode => Color::rgb(0x55, 0x33, 0x99),
        _ => Color::BLACK,
    }
}
