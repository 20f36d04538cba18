use std::io::BufRead;

use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use crate::element::SvgElement;
use crate::errors::{Error, Result};

/// Strip any namespace prefix; `svg:path` and `path` dispatch the same.
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn element_from(e: &BytesStart) -> Result<SvgElement> {
    let name = String::from_utf8(e.name().into_inner().to_vec())?;
    let attrs: Result<Vec<(String, String)>> = e
        .attributes()
        .map(|a| {
            let a = a.map_err(Error::from_err)?;
            let key = String::from_utf8(a.key.into_inner().to_vec())?;
            let value = a.unescape_value().map_err(Error::from_err)?.into_owned();
            Ok((key, value))
        })
        .collect();
    Ok(SvgElement::new(local_name(&name), attrs?))
}

/// Read an XML stream into an element tree rooted at the `svg` element.
///
/// The whole document is materialized; streaming conversion is not a
/// goal, input size is bounded by the document itself.
pub fn read_document(reader: &mut dyn BufRead) -> Result<SvgElement> {
    let mut reader = Reader::from_reader(reader);
    let mut buf = Vec::new();

    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root: Option<SvgElement> = None;
    let mut attach = |stack: &mut Vec<SvgElement>, el: SvgElement| {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(el);
        } else if root.is_none() {
            root = Some(el);
        }
    };

    loop {
        let ev = reader.read_event_into(&mut buf).map_err(|e| {
            Error::Document(format!(
                "XML error at position {}: {e}",
                reader.buffer_position()
            ))
        })?;
        match ev {
            XmlEvent::Start(ref e) => stack.push(element_from(e)?),
            XmlEvent::Empty(ref e) => {
                let el = element_from(e)?;
                attach(&mut stack, el);
            }
            XmlEvent::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| Error::Document("unbalanced end tag".to_string()))?;
                attach(&mut stack, el);
            }
            XmlEvent::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    let raw = String::from_utf8(t.into_inner().to_vec())?;
                    let content = quick_xml::escape::unescape(&raw).map_err(Error::from_err)?;
                    let content = content.trim();
                    if !content.is_empty() {
                        match top.text {
                            Some(ref mut text) => {
                                text.push(' ');
                                text.push_str(content);
                            }
                            None => top.text = Some(content.to_string()),
                        }
                    }
                }
            }
            XmlEvent::Eof => break,
            // declarations, comments, doctypes, PIs
            _ => (),
        }
        buf.clear();
    }

    match root {
        Some(el) if el.name == "svg" => Ok(el),
        Some(el) => Err(Error::Document(format!(
            "expected <svg> root element, found <{}>",
            el.name
        ))),
        None => Err(Error::Document("no root element".to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<SvgElement> {
        read_document(&mut Cursor::new(input))
    }

    #[test]
    fn test_read_minimal() {
        let root = read(r#"<svg width="10"><rect x="0" y="0"/></svg>"#).unwrap();
        assert_eq!(root.name, "svg");
        assert_eq!(root.get_attr("width"), Some("10"));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "rect");
    }

    #[test]
    fn test_read_nested_groups() {
        let root = read(
            r#"<svg><g transform="translate(1,2)"><g><circle cx="1" cy="2" r="3"/></g></g></svg>"#,
        )
        .unwrap();
        let inner = &root.children[0].children[0];
        assert_eq!(inner.name, "g");
        assert_eq!(inner.children[0].name, "circle");
    }

    #[test]
    fn test_read_text_content() {
        let root = read(r#"<svg><text x="1" y="2">Hello &amp; welcome</text></svg>"#).unwrap();
        assert_eq!(
            root.children[0].text.as_deref(),
            Some("Hello & welcome")
        );
    }

    #[test]
    fn test_namespace_prefix_stripped() {
        let root = read(r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:path d="M0 0"/></svg:svg>"#)
            .unwrap();
        assert_eq!(root.name, "svg");
        assert_eq!(root.children[0].name, "path");
    }

    #[test]
    fn test_non_svg_root() {
        assert!(matches!(read("<html></html>"), Err(Error::Document(_))));
    }
}
