use crate::chart::ChartData;
use crate::layout::{Layout, LayoutResolver, LayoutSettings};
use crate::rendering::{render_svg, ChartComposer, ChartSpec};

/// Layout and drawing for one chart
#[derive(Debug, Clone)]
pub struct Rendered {
    pub layout: Layout,
    pub spec: ChartSpec,
}

/// Owns everything drawn for a single chart request.
///
/// Create one per request and drop it when done; nothing is shared between
/// sessions. The layout pass runs at most once per session, so every output
/// produced from a session agrees on display longitudes.
pub struct RenderSession {
    data: ChartData,
    resolver: LayoutResolver,
    composer: ChartComposer,
    rendered: Option<Rendered>,
}

impl RenderSession {
    pub fn new(data: ChartData, layout_settings: LayoutSettings, composer: ChartComposer) -> Self {
        Self {
            data,
            resolver: LayoutResolver::new(layout_settings),
            composer,
            rendered: None,
        }
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }

    /// Resolve the layout and compose the chart, once
    pub fn render(&mut self) -> &Rendered {
        let Self {
            data,
            resolver,
            composer,
            rendered,
        } = self;
        rendered.get_or_insert_with(|| {
            let layout = resolver.resolve(&data.points);
            let exhausted = layout.iter().filter(|p| p.exhausted).count();
            if exhausted > 0 {
                log::warn!("{} glyphs may overlap: no free slot was found", exhausted);
            }
            let spec = composer.compose(data, &layout);
            Rendered { layout, spec }
        })
    }

    pub fn svg(&mut self) -> String {
        render_svg(&self.render().spec)
    }

    pub fn json(&mut self) -> serde_json::Result<String> {
        self.render().spec.to_json()
    }

    /// Hand back the chart data, discarding the drawing
    pub fn finish(self) -> ChartData {
        self.data
    }
}
