//! SVG floor plans with the route highlighted

use std::fmt::Write;

use geo::Point;
use petgraph::graph::NodeIndex;

use super::view::{FloorView, NodeRole};
use crate::model::CampusGraph;
use crate::{Error, Weight};

const TITLE_BAND: f64 = 32.0;

/// Colours and sizes of a rendered floor plan
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Pixels per layout unit
    pub scale: f64,
    /// Margin around the drawing, in layout units
    pub padding: f64,
    pub node_radius: f64,
    /// Radius of start and end nodes
    pub highlight_radius: f64,
    pub draw_weights: bool,
    /// Distance of weight labels from their edge, in layout units
    pub label_offset: f64,
    pub title: Option<String>,
    pub background: String,
    pub node_fill: String,
    pub edge_stroke: String,
    pub weight_color: String,
    pub route_stroke: String,
    pub start_fill: String,
    pub end_fill: String,
    pub transition_fill: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scale: 40.0,
            padding: 1.0,
            node_radius: 13.0,
            highlight_radius: 15.0,
            draw_weights: true,
            label_offset: 0.3,
            title: None,
            background: "#ffffff".to_string(),
            node_fill: "#add8e6".to_string(),
            edge_stroke: "#d3d3d3".to_string(),
            weight_color: "#6b7280".to_string(),
            route_stroke: "#e53935".to_string(),
            start_fill: "#29b6f6".to_string(),
            end_fill: "#43a047".to_string(),
            transition_fill: "#ffb300".to_string(),
        }
    }
}

impl RenderStyle {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Maps layout coordinates (y up) to SVG pixels (y down)
struct Canvas {
    min_x: f64,
    max_y: f64,
    scale: f64,
    padding: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Canvas {
    fn fit(points: impl Iterator<Item = Point<f64>>, style: &RenderStyle, top: f64) -> Self {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_x = min_x.min(point.x());
            max_x = max_x.max(point.x());
            min_y = min_y.min(point.y());
            max_y = max_y.max(point.y());
        }
        if !min_x.is_finite() {
            (min_x, max_x, min_y, max_y) = (0.0, 0.0, 0.0, 0.0);
        }

        Self {
            min_x,
            max_y,
            scale: style.scale,
            padding: style.padding,
            top,
            width: (max_x - min_x + 2.0 * style.padding) * style.scale,
            height: top + (max_y - min_y + 2.0 * style.padding) * style.scale,
        }
    }

    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.min_x + self.padding) * self.scale,
            self.top + (self.max_y - y + self.padding) * self.scale,
        )
    }
}

/// Renders one view of the building as a standalone SVG document
///
/// # Errors
///
/// Returns [`Error::RenderError`] if the document cannot be written
pub fn render_svg(
    graph: &CampusGraph,
    view: &FloorView,
    style: &RenderStyle,
) -> Result<String, Error> {
    write_svg(graph, view, style).map_err(|e| Error::RenderError(e.to_string()))
}

fn write_svg(
    graph: &CampusGraph,
    view: &FloorView,
    style: &RenderStyle,
) -> Result<String, std::fmt::Error> {
    let g = &graph.graph;
    let top = if style.title.is_some() { TITLE_BAND } else { 0.0 };
    let canvas = Canvas::fit(view.nodes.iter().map(|&idx| g[idx].position), style, top);

    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" font-family="Inter, system-ui, sans-serif">"#,
        canvas.width, canvas.height, canvas.width, canvas.height
    )?;
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}" />"#,
        escape_xml(&style.background)
    )?;

    if let Some(title) = &style.title {
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="22" font-size="16" font-weight="600" text-anchor="middle">{}</text>"#,
            canvas.width / 2.0,
            escape_xml(title)
        )?;
    }

    if view.is_empty() {
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="14" fill="{}" text-anchor="middle">No nodes to display</text>"#,
            canvas.width / 2.0,
            canvas.height / 2.0,
            escape_xml(&style.weight_color)
        )?;
        svg.push_str("</svg>\n");
        return Ok(svg);
    }

    svg.push_str("  <g class=\"edges\">\n");
    for &edge in &view.edges {
        if view.is_route_edge(edge) {
            continue;
        }
        let Some((a, b)) = g.edge_endpoints(edge) else {
            continue;
        };
        write_line(&mut svg, &canvas, g[a].position, g[b].position, &style.edge_stroke, 1.5)?;
    }
    svg.push_str("  </g>\n");

    if style.draw_weights {
        svg.push_str("  <g class=\"weights\">\n");
        for &edge in &view.edges {
            let (Some((a, b)), Some(weight)) = (g.edge_endpoints(edge), g.edge_weight(edge)) else {
                continue;
            };
            write_weight_label(
                &mut svg,
                &canvas,
                style,
                g[a].position,
                g[b].position,
                weight.weight,
            )?;
        }
        svg.push_str("  </g>\n");
    }

    if !view.route_edges.is_empty() {
        svg.push_str("  <g class=\"route\">\n");
        for &edge in &view.route_edges {
            let Some((a, b)) = g.edge_endpoints(edge) else {
                continue;
            };
            write_line(&mut svg, &canvas, g[a].position, g[b].position, &style.route_stroke, 3.0)?;
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("  <g class=\"nodes\">\n");
    for &idx in &view.nodes {
        write_node(&mut svg, graph, &canvas, style, idx, view.role(idx))?;
    }
    svg.push_str("  </g>\n</svg>\n");

    Ok(svg)
}

fn write_line(
    svg: &mut String,
    canvas: &Canvas,
    from: Point<f64>,
    to: Point<f64>,
    stroke: &str,
    width: f64,
) -> std::fmt::Result {
    let (x1, y1) = canvas.project(from.x(), from.y());
    let (x2, y2) = canvas.project(to.x(), to.y());
    writeln!(
        svg,
        r#"    <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{}" stroke-width="{width}" stroke-linecap="round" />"#,
        escape_xml(stroke)
    )
}

/// Weight text at the edge midpoint, nudged perpendicular to the edge and
/// drawn over a white halo so it stays readable on top of lines
fn write_weight_label(
    svg: &mut String,
    canvas: &Canvas,
    style: &RenderStyle,
    from: Point<f64>,
    to: Point<f64>,
    weight: Weight,
) -> std::fmt::Result {
    let (mx, my) = ((from.x() + to.x()) / 2.0, (from.y() + to.y()) / 2.0);
    let (dx, dy) = (to.x() - from.x(), to.y() - from.y());
    let length = dx.hypot(dy);
    let length = if length > 0.0 { length } else { 1.0 };
    let (ox, oy) = (-dy / length * style.label_offset, dx / length * style.label_offset);

    let (x, y) = canvas.project(mx + ox, my + oy);
    writeln!(
        svg,
        r##"    <text x="{x:.1}" y="{y:.1}" font-size="10" fill="{}" stroke="#ffffff" stroke-width="3" stroke-opacity="0.8" paint-order="stroke" text-anchor="middle" dominant-baseline="central">{}</text>"##,
        escape_xml(&style.weight_color),
        format_weight(weight)
    )
}

fn write_node(
    svg: &mut String,
    graph: &CampusGraph,
    canvas: &Canvas,
    style: &RenderStyle,
    idx: NodeIndex,
    role: Option<NodeRole>,
) -> std::fmt::Result {
    let node = &graph.graph[idx];
    let (x, y) = canvas.project(node.position.x(), node.position.y());

    let (fill, radius, outline) = match role {
        Some(NodeRole::Start) => (&style.start_fill, style.highlight_radius, 1.5),
        Some(NodeRole::End) => (&style.end_fill, style.highlight_radius, 1.5),
        Some(NodeRole::Transition) => (&style.transition_fill, style.node_radius, 1.5),
        Some(NodeRole::Via) | None => (&style.node_fill, style.node_radius, 1.0),
    };
    let class = role.map_or("node", NodeRole::as_str);

    writeln!(
        svg,
        r#"    <g class="{class}" data-id="{}">"#,
        escape_xml(&node.id)
    )?;
    writeln!(
        svg,
        r#"      <circle cx="{x:.1}" cy="{y:.1}" r="{radius}" fill="{}" stroke="black" stroke-width="{outline}" />"#,
        escape_xml(fill)
    )?;
    writeln!(
        svg,
        r#"      <text x="{x:.1}" y="{y:.1}" font-size="9" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text>"#,
        escape_xml(&node.label)
    )?;
    svg.push_str("    </g>\n");
    Ok(())
}

/// Whole numbers without decimals, others with up to two
pub(crate) fn format_weight(weight: Weight) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        let text = format!("{weight:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
