use std::fmt;

use crate::errors::{Error, Result};
use crate::types::strp;

/// A node of the input document tree: local tag name, attributes in
/// document order, trimmed text content, and child elements.
#[derive(Clone, Debug, Default)]
pub struct SvgElement {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: &str, attrs: Vec<(String, String)>) -> Self {
        Self {
            name: name.to_string(),
            attrs,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn require_attr(&self, key: &str) -> Result<&str> {
        self.get_attr(key)
            .ok_or_else(|| Error::MissingAttribute(key.to_string()))
    }

    pub fn attr_f32(&self, key: &str) -> Result<f32> {
        strp(self.require_attr(key)?)
    }

    /// Parse an optional numeric attribute, defaulting when absent.
    pub fn attr_f32_or(&self, key: &str, default: f32) -> Result<f32> {
        match self.get_attr(key) {
            Some(value) => strp(value),
            None => Ok(default),
        }
    }

    pub fn find_child(&self, name: &str) -> Option<&SvgElement> {
        self.children.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(f, r#" {k}="{v}""#)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_attr_lookup() {
        let el = SvgElement::new(
            "rect",
            vec![
                ("x".to_string(), "1.5".to_string()),
                ("y".to_string(), "oops".to_string()),
            ],
        );
        assert_eq!(el.get_attr("x"), Some("1.5"));
        assert_eq!(el.attr_f32("x").unwrap(), 1.5);
        assert!(el.attr_f32("y").is_err());
        assert!(matches!(
            el.require_attr("width"),
            Err(Error::MissingAttribute(_))
        ));
        assert_eq!(el.attr_f32_or("width", 7.).unwrap(), 7.);
    }

    #[test]
    fn test_display() {
        let el = SvgElement::new("circle", vec![("r".to_string(), "5".to_string())]);
        assert_eq!(el.to_string(), r#"<circle r="5">"#);
    }
}
