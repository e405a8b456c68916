use crate::aspects::Aspect;
use crate::chart::ChartData;
use crate::layout::{Layout, Placement};
use crate::rendering::primitives::{Color, LineStyle, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{rotation_offset, ChartSpec};
use crate::rendering::visual_config::{body_color, VisualConfig};
use crate::western::{house_midpoint, Sign};

const RETROGRADE_MARKER: &str = "℞";

/// Turns computed chart data and a glyph layout into a [`ChartSpec`].
///
/// Ticks, cusps and aspect chords are drawn at true longitudes; only the
/// glyph and its degree labels use the display longitude.
pub struct ChartComposer {
    visual_config: VisualConfig,
}

impl ChartComposer {
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    pub fn compose(&self, data: &ChartData, layout: &Layout) -> ChartSpec {
        let cfg = &self.visual_config;
        let mut spec = ChartSpec::new(cfg.size, cfg.size);
        spec.radius = cfg.ring_radius();
        spec.rotation_offset = rotation_offset(data.ascendant());
        spec.background_color = cfg.background_color;
        spec.title = data.kind.title().to_string();

        let mut shapes = Vec::new();
        self.sign_band(&spec, &mut shapes);
        self.circles(&spec, &mut shapes);
        self.house_cusps(&spec, data, &mut shapes);
        for placement in layout.iter() {
            self.point(&spec, placement, &mut shapes);
        }
        for aspect in &data.aspects {
            if let Some(shape) = self.aspect_line(&spec, aspect, data) {
                shapes.push(shape);
            }
        }

        log::debug!(
            "Composed {} shapes, rotation {:.2}°",
            shapes.len(),
            spec.rotation_offset
        );
        spec.shapes = shapes;
        spec
    }

    fn stroke(&self) -> Stroke {
        Stroke::solid(self.visual_config.stroke_color, self.visual_config.stroke_width)
    }

    fn sign_band(&self, spec: &ChartSpec, shapes: &mut Vec<Shape>) {
        let cfg = &self.visual_config;
        for sign in Sign::ALL {
            let start = sign.start_longitude();
            let element = sign.element().color();
            shapes.push(Shape::SignSegment {
                center: spec.center,
                sign,
                start_angle: spec.screen_angle(start),
                end_angle: spec.screen_angle(start + 30.0),
                radius_inner: spec.radius * cfg.radii.outer_circle,
                radius_outer: spec.radius * cfg.radii.sign_band_outer,
                fill: element.with_alpha(cfg.sign_fill_alpha),
                stroke: Some(self.stroke()),
            });
            shapes.push(Shape::Text {
                position: spec.at(cfg.radii.sign_glyph, start + 15.0),
                content: sign.glyph().to_string(),
                size: cfg.label_size * 1.4,
                color: element,
                anchor: TextAnchor::Middle,
            });
        }
    }

    fn circles(&self, spec: &ChartSpec, shapes: &mut Vec<Shape>) {
        let radii = &self.visual_config.radii;
        for fraction in [radii.outer_circle, radii.middle_circle, radii.inner_circle] {
            shapes.push(Shape::Circle {
                center: spec.center,
                radius: spec.radius * fraction,
                fill: None,
                stroke: Some(self.stroke()),
            });
        }
    }

    fn house_cusps(&self, spec: &ChartSpec, data: &ChartData, shapes: &mut Vec<Shape>) {
        let cfg = &self.visual_config;
        for (i, &cusp) in data.houses.cusps.iter().enumerate() {
            // Cusps 1 and 10 are the Ascendant and Midheaven in quadrant systems
            let width = if i == 0 || i == 9 {
                cfg.angle_stroke_width
            } else {
                cfg.stroke_width
            };
            shapes.push(Shape::Line {
                from: spec.at(cfg.radii.inner_circle, cusp),
                to: spec.at(cfg.radii.outer_circle, cusp),
                stroke: Stroke::solid(cfg.stroke_color, width),
            });
            shapes.push(Shape::Text {
                position: spec.at(cfg.radii.house_number, house_midpoint(i, &data.houses)),
                content: (i + 1).to_string(),
                size: cfg.label_size,
                color: cfg.stroke_color,
                anchor: TextAnchor::Middle,
            });
        }
    }

    fn point(&self, spec: &ChartSpec, placement: &Placement, shapes: &mut Vec<Shape>) {
        let cfg = &self.visual_config;
        let point = &placement.point;
        let true_lon = point.true_longitude();
        let display_lon = placement.display_longitude;
        let color = body_color(point.body());

        for (inner, outer) in [cfg.radii.outer_tick, cfg.radii.inner_tick] {
            shapes.push(Shape::Line {
                from: spec.at(inner, true_lon),
                to: spec.at(outer, true_lon),
                stroke: Stroke::solid(color, cfg.stroke_width),
            });
        }

        shapes.push(Shape::PointGlyph {
            center: spec.at(cfg.radii.point_glyph, display_lon),
            body: point.body(),
            size: cfg.glyph_size,
            color,
            retrograde: point.retrograde(),
        });

        let position = point.sign_position();
        shapes.push(self.label(spec, cfg.radii.degree_text, display_lon, format!("{}°", position.degrees), color));
        shapes.push(self.label(
            spec,
            cfg.radii.minutes_text,
            display_lon,
            format!("{:02}'", position.minutes),
            color,
        ));
        if point.retrograde() {
            shapes.push(self.label(spec, cfg.radii.retrograde, display_lon, RETROGRADE_MARKER.to_string(), color));
        }
    }

    fn label(&self, spec: &ChartSpec, fraction: f32, longitude: f64, content: String, color: Color) -> Shape {
        Shape::Text {
            position: spec.at(fraction, longitude),
            content,
            size: self.visual_config.label_size,
            color,
            anchor: TextAnchor::Middle,
        }
    }

    fn aspect_line(&self, spec: &ChartSpec, aspect: &Aspect, data: &ChartData) -> Option<Shape> {
        let cfg = &self.visual_config;
        let a = data.point(aspect.point1)?.true_longitude();
        let b = data.point(aspect.point2)?.true_longitude();
        Some(Shape::AspectLine {
            from: spec.at(cfg.radii.aspect_chord, a),
            to: spec.at(cfg.radii.aspect_chord, b),
            kind: aspect.kind,
            color: cfg.aspect_color(aspect.kind),
            width: if aspect.exact {
                cfg.aspect_stroke_width * 2.0
            } else {
                cfg.aspect_stroke_width
            },
            style: if aspect.kind.is_hard() {
                LineStyle::Solid
            } else {
                LineStyle::Dashed
            },
        })
    }
}

impl Default for ChartComposer {
    fn default() -> Self {
        Self::new()
    }
}
