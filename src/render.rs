use crate::config::RenderConfig;
use crate::ir::{Def, Document, Element, Fill, Length, Rotate, Stroke, Unit};
use crate::number::fmt_num;
use anyhow::Result;
use std::path::Path;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

pub fn render_svg(doc: &Document) -> String {
    let mut svg = String::new();

    if doc.standalone {
        svg.push_str("<?xml version=\"1.0\" standalone=\"no\"?>\n");
        svg.push_str("<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n");
        svg.push_str("  \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n");
    }

    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\"",
        fmt_length(doc.width),
        fmt_length(doc.height)
    ));
    if doc.standalone {
        svg.push_str(" version=\"1.1\"");
    }
    if let Some((x, y, w, h)) = doc.view_box {
        svg.push_str(&format!(
            " viewBox=\"{} {} {} {}\"",
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h)
        ));
    }
    svg.push_str(&format!(
        "\n xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\">\n"
    ));

    if !doc.defs.is_empty() {
        svg.push_str("<defs>\n");
        for def in &doc.defs {
            push_def(&mut svg, def);
        }
        svg.push_str("</defs>\n");
    }

    for element in &doc.body {
        push_element(&mut svg, element, 0);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_def(svg: &mut String, def: &Def) {
    match def {
        Def::Symbol(symbol) => {
            svg.push_str("<symbol");
            if let Some(width) = symbol.width {
                push_attr(svg, "width", &fmt_num(width));
            }
            if let Some(height) = symbol.height {
                push_attr(svg, "height", &fmt_num(height));
            }
            push_attr(svg, "id", &symbol.id);
            svg.push_str(">\n");
            push_children(svg, &symbol.children, 1);
            svg.push_str("</symbol>\n");
        }
        Def::Mask(mask) => {
            svg.push_str("<mask");
            push_attr(svg, "id", &mask.id);
            svg.push_str(">\n");
            push_children(svg, &mask.children, 1);
            svg.push_str("</mask>\n");
        }
        Def::Pattern(pattern) => {
            svg.push_str("<pattern");
            push_attr(svg, "id", &pattern.id);
            push_attr(svg, "x", &fmt_num(pattern.x));
            push_attr(svg, "y", &fmt_num(pattern.y));
            push_attr(svg, "width", &fmt_num(pattern.width));
            push_attr(svg, "height", &fmt_num(pattern.height));
            svg.push_str(">\n");
            push_children(svg, &pattern.children, 1);
            svg.push_str("</pattern>\n");
        }
    }
}

fn push_children(svg: &mut String, children: &[Element], depth: usize) {
    for child in children {
        push_element(svg, child, depth);
    }
}

fn push_element(svg: &mut String, element: &Element, depth: usize) {
    svg.push_str(&"  ".repeat(depth));
    match element {
        Element::Rect(rect) => {
            svg.push_str("<rect");
            push_attr(svg, "width", &fmt_length(rect.width));
            push_attr(svg, "height", &fmt_length(rect.height));
            if let Some(x) = rect.x {
                push_attr(svg, "x", &fmt_length(x));
            }
            if let Some(y) = rect.y {
                push_attr(svg, "y", &fmt_length(y));
            }
            if let Some(fill) = &rect.fill {
                push_fill(svg, fill);
            }
            svg.push_str("/>\n");
        }
        Element::Circle(circle) => {
            svg.push_str("<circle");
            push_fill(svg, &circle.fill);
            push_attr(svg, "r", &fmt_num(circle.r));
            if let Some(cx) = circle.cx {
                push_attr(svg, "cx", &fmt_num(cx));
            }
            if let Some(cy) = circle.cy {
                push_attr(svg, "cy", &fmt_num(cy));
            }
            if let Some(mask) = &circle.mask {
                push_attr(svg, "mask", &format!("url(#{mask})"));
            }
            if let Some(rotate) = circle.transform {
                push_attr(svg, "transform", &fmt_rotate(rotate));
            }
            svg.push_str("/>\n");
        }
        Element::Line(line) => {
            svg.push_str("<line");
            push_attr(svg, "x1", &fmt_num(line.x1));
            push_attr(svg, "y1", &fmt_num(line.y1));
            push_attr(svg, "x2", &fmt_num(line.x2));
            push_attr(svg, "y2", &fmt_num(line.y2));
            push_fill(svg, &Fill::None);
            push_stroke(svg, &line.stroke);
            svg.push_str("/>\n");
        }
        Element::Path(path) => {
            svg.push_str("<path");
            if let Some(fill) = &path.fill {
                push_fill(svg, fill);
            }
            if let Some(stroke) = &path.stroke {
                push_stroke(svg, stroke);
            }
            push_attr(svg, "d", &path.d);
            svg.push_str("/>\n");
        }
        Element::Use(instance) => {
            svg.push_str("<use");
            push_attr(svg, "xlink:href", &format!("#{}", instance.href));
            push_attr(svg, "x", &fmt_num(instance.x));
            push_attr(svg, "y", &fmt_num(instance.y));
            if let Some(width) = instance.width {
                push_attr(svg, "width", &fmt_num(width));
            }
            if let Some(rotate) = instance.transform {
                push_attr(svg, "transform", &fmt_rotate(rotate));
            }
            if let Some(fill) = &instance.fill {
                push_fill(svg, fill);
            }
            svg.push_str("/>\n");
        }
        Element::Group(group) => {
            svg.push_str("<g");
            if let Some(id) = &group.id {
                push_attr(svg, "id", id);
            }
            svg.push_str(">\n");
            push_children(svg, &group.children, depth + 1);
            svg.push_str(&"  ".repeat(depth));
            svg.push_str("</g>\n");
        }
    }
}

fn push_attr(svg: &mut String, name: &str, value: &str) {
    svg.push(' ');
    svg.push_str(name);
    svg.push_str("=\"");
    svg.push_str(&escape_xml(value));
    svg.push('"');
}

fn push_fill(svg: &mut String, fill: &Fill) {
    let value = match fill {
        Fill::None => "none".to_string(),
        Fill::Color(color) => color.clone(),
        Fill::Url(id) => format!("url(#{id})"),
    };
    push_attr(svg, "fill", &value);
}

fn push_stroke(svg: &mut String, stroke: &Stroke) {
    if let Some(cap) = stroke.linecap {
        push_attr(svg, "stroke-linecap", cap.as_str());
    }
    push_attr(svg, "stroke", &stroke.color);
    push_attr(svg, "stroke-width", &fmt_num(stroke.width));
}

fn fmt_rotate(rotate: Rotate) -> String {
    format!(
        "rotate({} {} {})",
        fmt_num(rotate.angle),
        fmt_num(rotate.cx),
        fmt_num(rotate.cy)
    )
}

fn fmt_length(length: Length) -> String {
    let value = fmt_num(length.value);
    match length.unit {
        Unit::User => value,
        Unit::Mm => format!("{value}mm"),
        Unit::Percent => format!("{value}%"),
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;

    let size = tree.size();
    let width = (size.width() * render_cfg.scale).ceil() as u32;
    let height = (size.height() * render_cfg.scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate {width}x{height} pixmap"))?;

    let transform = resvg::tiny_skia::Transform::from_scale(render_cfg.scale, render_cfg.scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the 'png' feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
