use core::f32::consts::{PI, TAU};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{
    ArcCmd, DrawCmd, DrawList, EllipseCmd, HAlign, LineCmd, RectCmd, Stroke, TextCmd, VAlign,
};

/// Renders `draw_list` in paint order as a standalone SVG document.
pub fn render_svg(draw_list: &mut DrawList, viewport: Viewport) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = viewport.width,
        h = viewport.height,
    );

    for item in draw_list.iter_in_paint_order() {
        let element = match &item.cmd {
            DrawCmd::Clear(color) => rect(&RectCmd::covering(viewport, *color)),
            DrawCmd::Rect(cmd) => rect(cmd),
            DrawCmd::Line(cmd) => line(cmd),
            DrawCmd::Ellipse(cmd) => ellipse(cmd),
            DrawCmd::Arc(cmd) => arc(cmd),
            DrawCmd::Text(cmd) => text(cmd),
        };

        if let Some(element) = element {
            out.push_str("  ");
            out.push_str(&element);
            out.push('\n');
        }
    }

    out.push_str("</svg>\n");
    out
}

/// Renders `draw_list` and writes the document to `path`.
pub fn write_svg(path: impl AsRef<Path>, draw_list: &mut DrawList, viewport: Viewport) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(draw_list, viewport);
    fs::write(path, svg).with_context(|| format!("failed to write SVG snapshot to {}", path.display()))
}

// ── elements ──────────────────────────────────────────────────────────────

fn rect(cmd: &RectCmd) -> Option<String> {
    let r = cmd.rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return None;
    }
    Some(format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
        r.origin.x,
        r.origin.y,
        r.size.x,
        r.size.y,
        fill_attrs(Some(cmd.color)),
    ))
}

fn line(cmd: &LineCmd) -> Option<String> {
    Some(format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
        cmd.from.x,
        cmd.from.y,
        cmd.to.x,
        cmd.to.y,
        stroke_attrs(Some(cmd.stroke)),
    ))
}

fn ellipse(cmd: &EllipseCmd) -> Option<String> {
    if cmd.fill.is_none() && cmd.stroke.is_none() {
        return None;
    }
    if cmd.size.x <= 0.0 || cmd.size.y <= 0.0 {
        return None;
    }
    Some(format!(
        "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {} {}/>",
        cmd.center.x,
        cmd.center.y,
        cmd.size.x * 0.5,
        cmd.size.y * 0.5,
        fill_attrs(cmd.fill),
        stroke_attrs(cmd.stroke),
    ))
}

fn arc(cmd: &ArcCmd) -> Option<String> {
    let span = cmd.span();
    if span <= 0.0 {
        return None;
    }

    let rx = cmd.size.x * 0.5;
    let ry = cmd.size.y * 0.5;
    let start = cmd.start_point();

    // A single SVG arc segment cannot close on itself.
    let d = if span >= TAU - 1e-4 {
        let half = cmd.center.on_ellipse(cmd.size, cmd.start + PI);
        format!(
            "M {} {} {} {}",
            start.x,
            start.y,
            arc_segment(rx, ry, false, half),
            arc_segment(rx, ry, false, start),
        )
    } else {
        format!("M {} {} {}", start.x, start.y, arc_segment(rx, ry, span > PI, cmd.end_point()))
    };

    Some(format!("<path d=\"{}\" fill=\"none\" {}/>", d, stroke_attrs(Some(cmd.stroke))))
}

fn arc_segment(rx: f32, ry: f32, large: bool, to: Vec2) -> String {
    // sweep-flag 1 follows increasing angles, which is clockwise in y-down space.
    format!("A {} {} 0 {} 1 {} {}", rx, ry, u8::from(large), to.x, to.y)
}

fn text(cmd: &TextCmd) -> Option<String> {
    if cmd.text.is_empty() {
        return None;
    }

    let anchor = match cmd.align.h {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let baseline = match cmd.align.v {
        VAlign::Top => "hanging",
        VAlign::Center => "central",
        VAlign::Bottom => "text-after-edge",
    };

    Some(format!(
        "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\" {}>{}</text>",
        cmd.origin.x,
        cmd.origin.y,
        cmd.size,
        anchor,
        baseline,
        fill_attrs(Some(cmd.color)),
        escape(&cmd.text),
    ))
}

// ── attributes ────────────────────────────────────────────────────────────

fn fill_attrs(color: Option<Color>) -> String {
    match color {
        Some(c) => paint_attrs("fill", c),
        None => "fill=\"none\"".to_string(),
    }
}

fn stroke_attrs(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(s) => format!("{} stroke-width=\"{}\"", paint_attrs("stroke", s.color), s.width),
        None => "stroke=\"none\"".to_string(),
    }
}

fn paint_attrs(name: &str, color: Color) -> String {
    let [r, g, b, a] = color.to_srgb_u8();
    if a == 255 {
        format!("{name}=\"rgb({r},{g},{b})\"")
    } else {
        format!("{name}=\"rgb({r},{g},{b})\" {name}-opacity=\"{:.3}\"", f32::from(a) / 255.0)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::scene::{TextAlign, ZIndex};

    fn viewport() -> Viewport {
        Viewport::new(900.0, 400.0)
    }

    #[test]
    fn empty_list_is_a_bare_document() {
        let svg = render_svg(&mut DrawList::new(), viewport());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 900 400\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.lines().count(), 2);
    }

    #[test]
    fn elements_follow_paint_order() {
        let mut list = DrawList::new();
        list.push_text(ZIndex(2), "top", Vec2::new(1.0, 1.0), 10.0, Color::white(), TextAlign::CENTER);
        list.push_clear(ZIndex(0), Color::black());
        list.push_rect(ZIndex(1), Rect::new(0.0, 0.0, 5.0, 5.0), Color::grey(100));

        let svg = render_svg(&mut list, viewport());
        let lines: Vec<&str> = svg.lines().collect();
        assert!(lines[1].contains("width=\"900\""));
        assert!(lines[2].contains("width=\"5\""));
        assert!(lines[3].starts_with("  <text"));
    }

    #[test]
    fn translucent_fill_carries_opacity() {
        let mut list = DrawList::new();
        list.push_ellipse(
            ZIndex(0),
            Vec2::new(10.0, 10.0),
            Vec2::new(80.0, 24.0),
            Some(Color::from_srgb_u8(0, 150, 255, 180)),
            None,
        );
        let svg = render_svg(&mut list, viewport());
        assert!(svg.contains("rx=\"40\" ry=\"12\""));
        assert!(svg.contains("fill=\"rgb(0,150,255)\" fill-opacity=\"0.706\""));
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn invisible_and_degenerate_shapes_are_skipped() {
        let mut list = DrawList::new();
        list.push_ellipse(ZIndex(0), Vec2::zero(), Vec2::new(10.0, 10.0), None, None);
        list.push_rect(ZIndex(0), Rect::new(0.0, 10.0, 80.0, 0.0), Color::white());
        list.push_text(ZIndex(0), "", Vec2::zero(), 10.0, Color::white(), TextAlign::CENTER);
        let svg = render_svg(&mut list, viewport());
        assert_eq!(svg.lines().count(), 2);
    }

    #[test]
    fn half_arc_is_a_single_segment() {
        let mut list = DrawList::new();
        list.push_arc(
            ZIndex(0),
            Vec2::new(100.0, 50.0),
            Vec2::new(80.0, 24.0),
            0.0,
            PI,
            Stroke::new(2.0, Color::grey(200)),
        );
        let svg = render_svg(&mut list, viewport());
        assert!(svg.contains("<path d=\"M 140 50 A 40 12 0 0 1 "));
        assert!(svg.contains("fill=\"none\" stroke=\"rgb(200,200,200)\" stroke-width=\"2\""));
    }

    #[test]
    fn full_turn_arc_is_split() {
        let mut list = DrawList::new();
        list.push_arc(
            ZIndex(0),
            Vec2::zero(),
            Vec2::new(10.0, 10.0),
            0.0,
            TAU,
            Stroke::new(1.0, Color::white()),
        );
        let svg = render_svg(&mut list, viewport());
        assert_eq!(svg.matches(" A ").count(), 2);
    }

    #[test]
    fn text_is_escaped_and_aligned() {
        let mut list = DrawList::new();
        list.push_text(
            ZIndex(0),
            "a < b & c",
            Vec2::new(5.0, 6.0),
            10.0,
            Color::grey(200),
            TextAlign::LEFT_CENTER,
        );
        let svg = render_svg(&mut list, viewport());
        assert!(svg.contains(">a &lt; b &amp; c</text>"));
        assert!(svg.contains("text-anchor=\"start\" dominant-baseline=\"central\""));
    }

    #[test]
    fn write_svg_reports_bad_paths() {
        let mut list = DrawList::new();
        let err = write_svg("/nonexistent-dir/snapshot.svg", &mut list, viewport()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to write SVG snapshot"));
    }
}
