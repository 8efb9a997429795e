use crate::models::{Area, Label, Sector, WheelResponse};

#[derive(Debug, Clone, Copy)]
pub struct WheelConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub value_radius: f64,
    pub label_radius_pad: f64,
    pub label_line_height: f64,
    pub label_max_chars: usize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            center_x: 150.0,
            center_y: 150.0,
            outer_radius: 130.0,
            value_radius: 91.0,
            label_radius_pad: 50.0,
            label_line_height: 16.0,
            label_max_chars: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectorPaths {
    pub bright: String,
    pub pale: String,
}

// Angle 0 points straight up, increasing clockwise.
pub fn polar_to_cartesian(cfg: &WheelConfig, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: cfg.center_x + radius * rad.cos(),
        y: cfg.center_y + radius * rad.sin(),
    }
}

pub fn sector_span(total: usize) -> f64 {
    360.0 / total as f64
}

pub fn center_angle(index: usize, total: usize) -> f64 {
    let span = sector_span(total);
    index as f64 * span + span / 2.0
}

pub fn describe_sector(cfg: &WheelConfig, index: usize, total: usize, value: u8) -> SectorPaths {
    let span = sector_span(total);
    let start = index as f64 * span;
    let end = start + span;
    let value_radius = f64::from(value) / 10.0 * cfg.outer_radius;

    let bright = if value > 0 {
        wedge_path(cfg, value_radius, start, end)
    } else {
        String::new()
    };
    let pale = if value < 10 {
        ring_path(cfg, value_radius, cfg.outer_radius, start, end)
    } else {
        String::new()
    };

    SectorPaths { bright, pale }
}

fn wedge_path(cfg: &WheelConfig, radius: f64, start: f64, end: f64) -> String {
    // A single arc whose start and end coincide draws nothing, so a full
    // circle is emitted as two half arcs.
    if end - start >= 360.0 {
        let top = polar_to_cartesian(cfg, radius, start);
        let bottom = polar_to_cartesian(cfg, radius, start + 180.0);
        return format!(
            "M {} {} A {} {} 0 1 1 {} {} A {} {} 0 1 1 {} {} Z",
            top.x, top.y, radius, radius, bottom.x, bottom.y, radius, radius, top.x, top.y
        );
    }

    let large_arc = large_arc_flag(end - start);
    let p1 = polar_to_cartesian(cfg, radius, start);
    let p2 = polar_to_cartesian(cfg, radius, end);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        cfg.center_x, cfg.center_y, p1.x, p1.y, radius, radius, large_arc, p2.x, p2.y
    )
}

fn ring_path(cfg: &WheelConfig, inner: f64, outer: f64, start: f64, end: f64) -> String {
    if end - start >= 360.0 {
        if inner <= 0.0 {
            return wedge_path(cfg, outer, start, end);
        }
        let o1 = polar_to_cartesian(cfg, outer, start);
        let o2 = polar_to_cartesian(cfg, outer, start + 180.0);
        let i1 = polar_to_cartesian(cfg, inner, start);
        let i2 = polar_to_cartesian(cfg, inner, start + 180.0);
        // Inner subpath runs counterclockwise so the fill keeps the hole.
        return format!(
            "M {} {} A {} {} 0 1 1 {} {} A {} {} 0 1 1 {} {} M {} {} A {} {} 0 1 0 {} {} A {} {} 0 1 0 {} {} Z",
            o1.x, o1.y, outer, outer, o2.x, o2.y, outer, outer, o1.x, o1.y,
            i1.x, i1.y, inner, inner, i2.x, i2.y, inner, inner, i1.x, i1.y
        );
    }

    let large_arc = large_arc_flag(end - start);
    let p1_inner = polar_to_cartesian(cfg, inner, start);
    let p2_inner = polar_to_cartesian(cfg, inner, end);
    let p1_outer = polar_to_cartesian(cfg, outer, start);
    let p2_outer = polar_to_cartesian(cfg, outer, end);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        p1_inner.x, p1_inner.y,
        p1_outer.x, p1_outer.y,
        outer, outer, large_arc, p2_outer.x, p2_outer.y,
        p2_inner.x, p2_inner.y,
        inner, inner, large_arc, p1_inner.x, p1_inner.y
    )
}

fn large_arc_flag(span: f64) -> u8 {
    if span <= 180.0 { 0 } else { 1 }
}

pub fn value_position(cfg: &WheelConfig, index: usize, total: usize) -> Point {
    polar_to_cartesian(cfg, cfg.value_radius, center_angle(index, total))
}

pub fn label_anchor(center_angle: f64) -> TextAnchor {
    if center_angle > 45.0 && center_angle < 135.0 {
        TextAnchor::Start
    } else if center_angle > 225.0 && center_angle < 315.0 {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

pub fn split_label_lines(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let words = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty());
    for word in words {
        if current.chars().count() + word.chars().count() <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn label_position(
    cfg: &WheelConfig,
    index: usize,
    total: usize,
    anchor: TextAnchor,
    line_count: usize,
) -> Point {
    let base = polar_to_cartesian(
        cfg,
        cfg.outer_radius + cfg.label_radius_pad,
        center_angle(index, total),
    );
    let offset_x = match anchor {
        TextAnchor::Start => -15.0,
        TextAnchor::End => 15.0,
        TextAnchor::Middle => 0.0,
    };
    // Vertically center multi-line labels around the ring point.
    let offset_y = if line_count > 1 {
        -((line_count - 1) as f64 * cfg.label_line_height) / 2.0
    } else {
        0.0
    };
    Point {
        x: base.x + offset_x,
        y: base.y + offset_y,
    }
}

pub fn sector_layout(cfg: &WheelConfig, index: usize, total: usize, area: &Area) -> Sector {
    let span = sector_span(total);
    let paths = describe_sector(cfg, index, total, area.value);
    let value_pos = value_position(cfg, index, total);
    let anchor = label_anchor(center_angle(index, total));
    let lines = split_label_lines(&area.name, cfg.label_max_chars);
    let label_pos = label_position(cfg, index, total, anchor, lines.len());

    Sector {
        id: area.id.clone(),
        index,
        name: area.name.clone(),
        value: area.value,
        color: area.color.clone(),
        start_angle: index as f64 * span,
        bright_d: paths.bright,
        pale_d: paths.pale,
        value_x: value_pos.x,
        value_y: value_pos.y,
        label: Label {
            x: label_pos.x,
            y: label_pos.y,
            anchor: anchor.as_svg(),
            lines,
        },
    }
}

pub fn wheel_layout(cfg: &WheelConfig, areas: &[Area]) -> WheelResponse {
    let total = areas.len();
    if total == 0 {
        return WheelResponse {
            total: 0,
            span: 0.0,
            sectors: Vec::new(),
        };
    }

    let sectors = areas
        .iter()
        .enumerate()
        .map(|(index, area)| sector_layout(cfg, index, total, area))
        .collect();

    WheelResponse {
        total,
        span: sector_span(total),
        sectors,
    }
}
