use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::types::{attr_split, fstr, strp};

#[derive(Clone, Debug, PartialEq)]
enum TransformType {
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32, f32, f32),
    SkewX(f32),
    SkewY(f32),
    Matrix(f32, f32, f32, f32, f32, f32),
}

impl FromStr for TransformType {
    type Err = Error;

    // See https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
    fn from_str(value: &str) -> Result<Self> {
        let (name, args) = value
            .split_once('(')
            .ok_or_else(|| Error::Parse(format!("transform missing '(': '{value}'")))?;
        let args = attr_split(
            args.strip_suffix(')')
                .ok_or_else(|| Error::Parse(format!("transform missing ')': '{value}'")))?,
        )
        .map(|v| strp(&v))
        .collect::<Result<Vec<_>>>()?;
        let name = name.trim().to_lowercase();
        Ok(match (name.as_str(), args.len()) {
            ("translate", 1) => TransformType::Translate(args[0], 0.),
            ("translate", 2) => TransformType::Translate(args[0], args[1]),
            ("scale", 1) => TransformType::Scale(args[0], args[0]),
            ("scale", 2) => TransformType::Scale(args[0], args[1]),
            ("rotate", 1) => TransformType::Rotate(args[0], 0., 0.),
            ("rotate", 3) => TransformType::Rotate(args[0], args[1], args[2]),
            ("skewx", 1) => TransformType::SkewX(args[0]),
            ("skewy", 1) => TransformType::SkewY(args[0]),
            ("matrix", 6) => {
                TransformType::Matrix(args[0], args[1], args[2], args[3], args[4], args[5])
            }
            (name, n) => {
                return Err(Error::Parse(format!(
                    "invalid transform '{name}' with {n} argument(s)"
                )))
            }
        })
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TransformAttr {
    transforms: Vec<TransformType>,
}

impl FromStr for TransformAttr {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = value.split_inclusive(')').map(|v| v.trim());
        Ok(Self {
            transforms: parts
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']))
                .map(|v| v.parse())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl TransformAttr {
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// TikZ scope options equivalent to this transform list. Option
    /// order matches SVG order; TikZ composes both left-to-right with
    /// the leftmost outermost.
    pub fn scope_options(&self, unit: &str) -> Vec<String> {
        self.transforms
            .iter()
            .map(|t| match *t {
                TransformType::Translate(tx, ty) => {
                    format!("shift={{({}{unit},{}{unit})}}", fstr(tx), fstr(ty))
                }
                TransformType::Scale(sx, sy) if sx == sy => format!("scale={}", fstr(sx)),
                TransformType::Scale(sx, sy) => {
                    format!("xscale={},yscale={}", fstr(sx), fstr(sy))
                }
                TransformType::Rotate(angle, cx, cy) if cx == 0. && cy == 0. => {
                    format!("rotate={}", fstr(angle))
                }
                TransformType::Rotate(angle, cx, cy) => {
                    format!(
                        "rotate around={{{}:({}{unit},{}{unit})}}",
                        fstr(angle),
                        fstr(cx),
                        fstr(cy)
                    )
                }
                // TikZ slants are gradients, not angles
                TransformType::SkewX(angle) => {
                    format!("xslant={}", fstr(angle.to_radians().tan()))
                }
                TransformType::SkewY(angle) => {
                    format!("yslant={}", fstr(angle.to_radians().tan()))
                }
                TransformType::Matrix(a, b, c, d, e, f) => {
                    format!(
                        "cm={{{},{},{},{},({}{unit},{}{unit})}}",
                        fstr(a),
                        fstr(b),
                        fstr(c),
                        fstr(d),
                        fstr(e),
                        fstr(f)
                    )
                }
            })
            .collect()
    }
}
