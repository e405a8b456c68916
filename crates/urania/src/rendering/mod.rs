pub mod composer;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use composer::ChartComposer;
pub use primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
pub use spec::{rotation_offset, ChartSpec};
pub use self::svg::render_svg;
pub use visual_config::{body_color, RingRadii, VisualConfig};
