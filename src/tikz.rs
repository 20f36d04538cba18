//! TikZ code generation: walks the document tree and writes one drawing
//! statement per shape.

use std::io::Write;

use itertools::Itertools;

use crate::element::SvgElement;
use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::path::{DrawingPrimitive, PathParser};
use crate::style::{self, PaintOptions};
use crate::transform_attr::TransformAttr;
use crate::types::fstr;
use crate::TransformConfig;

pub struct TikzRenderer<'a> {
    writer: &'a mut dyn Write,
    config: &'a TransformConfig,
}

impl<'a> TikzRenderer<'a> {
    pub fn new(writer: &'a mut dyn Write, config: &'a TransformConfig) -> Self {
        Self { writer, config }
    }

    pub fn render(&mut self, root: &SvgElement) -> Result<()> {
        if self.config.standalone {
            writeln!(
                self.writer,
                "\\documentclass[tikz,border=1mm]{{standalone}}"
            )?;
            writeln!(self.writer, "\\usepackage{{tikz}}")?;
            writeln!(self.writer, "\\usetikzlibrary{{shapes}}")?;
            writeln!(self.writer, "\\begin{{document}}")?;
        }
        writeln!(self.writer, "\\begin{{tikzpicture}}")?;
        // SVG y grows downward
        writeln!(self.writer, "\\begin{{scope}}[yscale=-1]")?;
        for child in &root.children {
            self.element(child)?;
        }
        writeln!(self.writer, "\\end{{scope}}")?;
        writeln!(self.writer, "\\end{{tikzpicture}}")?;
        if self.config.standalone {
            writeln!(self.writer, "\\end{{document}}")?;
        }
        Ok(())
    }

    /// Render one element. Conversion failures are reported to stderr
    /// and the walk continues; only IO failures abort the document.
    fn element(&mut self, el: &SvgElement) -> Result<()> {
        let scoped = match self.transform_scope(el) {
            Ok(scoped) => scoped,
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                eprintln!("svg2tikz: {el}: {e}");
                false
            }
        };
        let res = match el.name.as_str() {
            "g" => self.group(el),
            "rect" => self.rect(el),
            "circle" => self.circle(el),
            "ellipse" => self.ellipse(el),
            "path" => self.path(el),
            "text" => self.text(el),
            _ => {
                if self.config.debug {
                    writeln!(self.writer, "%% skipped <{}>", el.name)?;
                }
                Ok(())
            }
        };
        match res {
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => eprintln!("svg2tikz: {el}: {e}"),
            Ok(()) => (),
        }
        if scoped {
            writeln!(self.writer, "\\end{{scope}}")?;
        }
        Ok(())
    }

    fn group(&mut self, el: &SvgElement) -> Result<()> {
        for child in &el.children {
            self.element(child)?;
        }
        Ok(())
    }

    fn rect(&mut self, el: &SvgElement) -> Result<()> {
        let x = el.attr_f32_or("x", 0.)?;
        let y = el.attr_f32_or("y", 0.)?;
        let w = el.attr_f32("width")?;
        let h = el.attr_f32("height")?;
        let paint = self.paint(el)?;
        writeln!(
            self.writer,
            "\\draw{} {} rectangle {};",
            self.options(&paint),
            self.point(Point::new(x, y)),
            self.point(Point::new(x + w, y + h))
        )?;
        Ok(())
    }

    fn circle(&mut self, el: &SvgElement) -> Result<()> {
        let cx = el.attr_f32_or("cx", 0.)?;
        let cy = el.attr_f32_or("cy", 0.)?;
        let r = el.attr_f32("r")?;
        let paint = self.paint(el)?;
        writeln!(
            self.writer,
            "\\draw{} {} circle ({});",
            self.options(&paint),
            self.point(Point::new(cx, cy)),
            self.length(r)
        )?;
        Ok(())
    }

    fn ellipse(&mut self, el: &SvgElement) -> Result<()> {
        let cx = el.attr_f32_or("cx", 0.)?;
        let cy = el.attr_f32_or("cy", 0.)?;
        let rx = el.attr_f32("rx")?;
        let ry = el.attr_f32("ry")?;
        let paint = self.paint(el)?;
        writeln!(
            self.writer,
            "\\draw{} {} ellipse ({} and {});",
            self.options(&paint),
            self.point(Point::new(cx, cy)),
            self.length(rx),
            self.length(ry)
        )?;
        Ok(())
    }

    fn path(&mut self, el: &SvgElement) -> Result<()> {
        let data = el.require_attr("d")?;
        let mut parser = PathParser::new(data);
        let outcome = parser.evaluate();
        if outcome.is_err() {
            // keep what parsed; the walker reports the failure
            writeln!(self.writer, "%% incomplete path data follows")?;
        }
        let paint = self.paint(el)?;
        self.draw_primitives(parser.primitives(), parser.is_open(), &paint)?;
        outcome
    }

    fn draw_primitives(
        &mut self,
        primitives: &[DrawingPrimitive],
        open: bool,
        paint: &PaintOptions,
    ) -> Result<()> {
        if primitives.is_empty() {
            return Ok(());
        }
        for line in &paint.prelude {
            writeln!(self.writer, "{line}")?;
        }
        let opts = self.options(paint);
        let mut started = false;
        for primitive in primitives {
            match primitive {
                DrawingPrimitive::MoveTo(p) => {
                    // each subpath becomes its own \draw statement
                    if started {
                        writeln!(self.writer, ";")?;
                    }
                    write!(self.writer, "\\draw{} {}", opts, self.point(*p))?;
                    started = true;
                }
                DrawingPrimitive::LineTo(p) => {
                    self.start_if_needed(&mut started, &opts)?;
                    write!(self.writer, " -- {}", self.point(*p))?;
                }
                DrawingPrimitive::CurveTo(c1, c2, p) => {
                    self.start_if_needed(&mut started, &opts)?;
                    write!(
                        self.writer,
                        " .. controls {} and {} .. {}",
                        self.point(*c1),
                        self.point(*c2),
                        self.point(*p)
                    )?;
                }
                DrawingPrimitive::ArcTo { arc, .. } => {
                    self.start_if_needed(&mut started, &opts)?;
                    let (rx, ry) = arc.radii;
                    if (rx - ry).abs() < f32::EPSILON {
                        write!(
                            self.writer,
                            " arc ({}:{}:{})",
                            fstr(arc.start_angle),
                            fstr(arc.end_angle),
                            self.length(rx)
                        )?;
                    } else {
                        write!(
                            self.writer,
                            " arc ({}:{}:{} and {})",
                            fstr(arc.start_angle),
                            fstr(arc.end_angle),
                            self.length(rx),
                            self.length(ry)
                        )?;
                    }
                }
                DrawingPrimitive::Close => {
                    if started {
                        write!(self.writer, " -- cycle")?;
                    }
                }
            }
        }
        if started {
            writeln!(self.writer, ";")?;
        }
        if open && paint.options.iter().any(|o| o == "fill=fc") {
            writeln!(self.writer, "%% note: filled path was left open")?;
        }
        Ok(())
    }

    // A path may start with a drawing instruction rather than a moveto;
    // the interpreter treats the current point as the origin then.
    fn start_if_needed(&mut self, started: &mut bool, opts: &str) -> Result<()> {
        if !*started {
            write!(self.writer, "\\draw{} {}", opts, self.point(Point::default()))?;
            *started = true;
        }
        Ok(())
    }

    fn text(&mut self, el: &SvgElement) -> Result<()> {
        let mut x = el.attr_f32_or("x", 0.)?;
        let mut y = el.attr_f32_or("y", 0.)?;
        let mut style_attr = el.get_attr("style").unwrap_or_default().to_string();
        let mut content = el.text.clone();
        if content.is_none() {
            // take everything from a single <tspan> level if present
            if let Some(tspan) = el.find_child("tspan") {
                content = tspan.text.clone();
                x = tspan.attr_f32_or("x", x)?;
                y = tspan.attr_f32_or("y", y)?;
                if let Some(style) = tspan.get_attr("style") {
                    style_attr = style.to_string();
                }
            }
        }
        let Some(content) = content else {
            return Ok(());
        };
        let align = style::text_align(&style_attr);
        if align != "center" {
            // nodes are centered at their coordinate; record the request
            writeln!(self.writer, "%% requested '{align}' alignment")?;
        }
        let mut node_opts = vec![format!("align={align}")];
        if let Some(font) = style::font_options(&style_attr) {
            node_opts.push(font);
        }
        writeln!(
            self.writer,
            "\\node [{}] at {} {{ {} }};",
            node_opts.iter().join(","),
            self.point(Point::new(x, y)),
            content
        )?;
        Ok(())
    }

    fn paint(&self, el: &SvgElement) -> Result<PaintOptions> {
        Ok(style::paint_options(el.get_attr("style").unwrap_or_default()))
    }

    fn options(&self, paint: &PaintOptions) -> String {
        if paint.options.is_empty() {
            String::new()
        } else {
            format!("[{}]", paint.options.iter().join(","))
        }
    }

    fn point(&self, p: Point) -> String {
        let unit = &self.config.unit;
        format!("({}{unit},{}{unit})", fstr(p.x), fstr(p.y))
    }

    fn length(&self, value: f32) -> String {
        format!("{}{}", fstr(value), self.config.unit)
    }

    fn transform_scope(&mut self, el: &SvgElement) -> Result<bool> {
        if let Some(attr) = el.get_attr("transform") {
            let transform: TransformAttr = attr.parse()?;
            if !transform.is_empty() {
                writeln!(
                    self.writer,
                    "\\begin{{scope}}[{}]",
                    transform.scope_options(&self.config.unit).iter().join(",")
                )?;
                return Ok(true);
            }
        }
        Ok(false)
    }
}
