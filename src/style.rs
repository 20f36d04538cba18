//! Mapping of SVG `style` attribute properties to TikZ options.

/// Iterate `key:value;` pairs of a style attribute.
fn properties(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style
        .split(';')
        .filter_map(|part| part.split_once(':'))
        .map(|(k, v)| (k.trim(), v.trim()))
}

fn property<'a>(style: &'a str, key: &str) -> Option<&'a str> {
    properties(style).find(|(k, _)| *k == key).map(|(_, v)| v)
}

pub fn hex2rgb(colour: &str) -> Option<(u8, u8, u8)> {
    let hex = colour.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// TikZ draw/fill options for a shape, with any `\definecolor` lines
/// which must precede the statement using them.
#[derive(Debug, Default, PartialEq)]
pub struct PaintOptions {
    pub prelude: Vec<String>,
    pub options: Vec<String>,
}

pub fn paint_options(style: &str) -> PaintOptions {
    let mut paint = PaintOptions::default();
    // stroke maps to TikZ 'draw', fill to 'fill'; only hex colours and
    // 'none' are understood, anything else is left to TikZ defaults
    for (prop, option, colour_name) in [("stroke", "draw", "dc"), ("fill", "fill", "fc")] {
        match property(style, prop) {
            Some("none") => paint.options.push(format!("{option}=none")),
            Some(value) => {
                if let Some((r, g, b)) = hex2rgb(value) {
                    paint
                        .prelude
                        .push(format!("\\definecolor{{{colour_name}}}{{RGB}}{{{r},{g},{b}}}"));
                    paint.options.push(format!("{option}={colour_name}"));
                }
            }
            None => (),
        }
    }
    paint
}

/// Map `text-align` to a TikZ node alignment; SVG's default is `start`
/// but the legacy converter centered everything, so center remains the
/// fallback.
pub fn text_align(style: &str) -> &'static str {
    match property(style, "text-align") {
        Some("start") => "left",
        Some("end") => "right",
        _ => "center",
    }
}

/// Font options for a text node, from font-size/font-family properties.
pub fn font_options(style: &str) -> Option<String> {
    let mut font = String::new();
    if let Some(size) = property(style, "font-size") {
        let px = size.strip_suffix("px").unwrap_or(size);
        if let Ok(px) = px.trim().parse::<f32>() {
            if px <= 4.0 {
                font.push_str("\\small");
            } else if px > 6.0 {
                font.push_str("\\large");
            }
        }
    }
    if let Some(family) = property(style, "font-family") {
        if matches!(family, "sans-serif" | "Sans") {
            font.push_str("\\sffamily");
        }
    }
    if font.is_empty() {
        None
    } else {
        Some(format!("font={font}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex2rgb() {
        assert_eq!(hex2rgb("#ff0000"), Some((255, 0, 0)));
        assert_eq!(hex2rgb("#00ff7f"), Some((0, 255, 127)));
        assert_eq!(hex2rgb("ff0000"), None);
        assert_eq!(hex2rgb("#ff00"), None);
        assert_eq!(hex2rgb("#gg0000"), None);
    }

    #[test]
    fn test_paint_options() {
        let paint = paint_options("stroke:#ff0000;fill:none;");
        assert_eq!(
            paint.prelude,
            vec!["\\definecolor{dc}{RGB}{255,0,0}".to_string()]
        );
        assert_eq!(paint.options, vec!["draw=dc", "fill=none"]);

        let paint = paint_options("fill:#00007f");
        assert_eq!(
            paint.prelude,
            vec!["\\definecolor{fc}{RGB}{0,0,127}".to_string()]
        );
        assert_eq!(paint.options, vec!["fill=fc"]);

        assert_eq!(paint_options("stroke-width:0.5"), PaintOptions::default());
    }

    #[test]
    fn test_text_align() {
        assert_eq!(text_align("text-align:start;"), "left");
        assert_eq!(text_align("text-align:end;"), "right");
        assert_eq!(text_align("text-align:center;"), "center");
        assert_eq!(text_align(""), "center");
    }

    #[test]
    fn test_font_options() {
        assert_eq!(
            font_options("font-size:3.5px;font-family:sans-serif;"),
            Some("font=\\small\\sffamily".to_string())
        );
        assert_eq!(
            font_options("font-size:10px;"),
            Some("font=\\large".to_string())
        );
        assert_eq!(font_options("font-size:5px;font-family:serif;"), None);
    }
}
