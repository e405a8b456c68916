//! SVG output for a [`ChartSpec`].

use crate::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};
use ::svg::Document;

const FONT_FAMILY: &str = "DejaVu Sans, Symbola, Noto Sans Symbols, sans-serif";

/// Serialize a chart spec as a standalone SVG document
pub fn render_svg(spec: &ChartSpec) -> String {
    let mut doc = Document::new()
        .set("width", spec.width)
        .set("height", spec.height)
        .set("viewBox", format!("0 0 {} {}", spec.width, spec.height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", spec.background_color.to_css_string()),
        );

    let mut chart = Group::new()
        .set("class", "chart")
        .set("font-family", FONT_FAMILY);
    for shape in &spec.shapes {
        chart = add_shape(chart, shape);
    }
    doc = doc.add(chart);

    if !spec.title.is_empty() {
        doc = doc.add(text_node(
            Point { x: 12.0, y: 20.0 },
            &spec.title,
            14.0,
            Color::BLACK,
            TextAnchor::Start,
        ));
    }

    doc.to_string()
}

fn add_shape(group: Group, shape: &Shape) -> Group {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let circle = Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius)
                .set("fill", fill.map(|c| c.to_css_string()).unwrap_or_else(|| "none".to_string()));
            group.add(apply_stroke(circle, stroke.as_ref()))
        }
        Shape::Line { from, to, stroke } => group.add(apply_stroke(line(from, to), Some(stroke))),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => group.add(text_node(*position, content, *size, *color, *anchor)),
        Shape::SignSegment {
            center,
            sign,
            start_angle,
            end_angle,
            radius_inner,
            radius_outer,
            fill,
            stroke,
        } => {
            let path = Path::new()
                .set("class", format!("sign {}", sign.name().to_lowercase()))
                .set("fill", fill.to_css_string())
                .set(
                    "d",
                    ring_sector(*center, *radius_inner, *radius_outer, *start_angle, *end_angle),
                );
            group.add(apply_stroke(path, stroke.as_ref()))
        }
        Shape::PointGlyph {
            center,
            body,
            size,
            color,
            retrograde,
        } => {
            let class = if *retrograde { "point retrograde" } else { "point" };
            group.add(
                text_node(*center, body.glyph(), *size, *color, TextAnchor::Middle)
                    .set("class", class)
                    .set("data-body", body.name()),
            )
        }
        Shape::AspectLine {
            from,
            to,
            kind,
            color,
            width,
            style,
        } => {
            let mut aspect = line(from, to)
                .set("class", format!("aspect {}", kind.name().to_lowercase()))
                .set("stroke", color.to_css_string())
                .set("stroke-width", *width);
            if *style == LineStyle::Dashed {
                aspect = aspect.set("stroke-dasharray", "6 3");
            }
            group.add(aspect)
        }
    }
}

fn line(from: &Point, to: &Point) -> Line {
    Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
}

fn text_node(position: Point, content: &str, size: f32, color: Color, anchor: TextAnchor) -> Text {
    let anchor = match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    Text::new(content)
        .set("x", position.x)
        .set("y", position.y)
        .set("font-size", size)
        .set("fill", color.to_css_string())
        .set("text-anchor", anchor)
        .set("dominant-baseline", "central")
}

fn apply_stroke<T: ::svg::Node>(mut node: T, stroke: Option<&Stroke>) -> T {
    if let Some(stroke) = stroke {
        node.assign("stroke", stroke.color.to_css_string());
        node.assign("stroke-width", stroke.width);
        if let Some(dashes) = &stroke.dash_array {
            let dashes: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
            node.assign("stroke-dasharray", dashes.join(" "));
        }
    }
    node
}

/// Closed annular sector. Screen angles grow counterclockwise, which is
/// sweep-flag 0 in SVG's y-down coordinates.
fn ring_sector(center: Point, r_in: f32, r_out: f32, start: f64, end: f64) -> Data {
    let large_arc = if (end - start).rem_euclid(360.0) > 180.0 { 1.0 } else { 0.0 };
    let outer_start = Point::polar(center, r_out, start);
    let outer_end = Point::polar(center, r_out, end);
    let inner_end = Point::polar(center, r_in, end);
    let inner_start = Point::polar(center, r_in, start);

    Data::new()
        .move_to((outer_start.x, outer_start.y))
        .elliptical_arc_to(vec![r_out, r_out, 0.0, large_arc, 0.0, outer_end.x, outer_end.y])
        .line_to((inner_end.x, inner_end.y))
        .elliptical_arc_to(vec![r_in, r_in, 0.0, large_arc, 1.0, inner_start.x, inner_start.y])
        .close()
}
