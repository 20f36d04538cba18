//! Interpreter for the path data (`d` attribute) mini-language.

mod syntax;

pub use syntax::PathScanner;

use crate::errors::{Error, Result};
use crate::geometry::{quadratic_to_cubic, solve_arc, ArcSolution, ArcSpec, Point};

/// One parsed path instruction. Coordinates are as written in the path
/// data; `relative` records whether they are offsets from the current
/// point rather than absolute positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo {
        p: Point,
        relative: bool,
    },
    LineTo {
        p: Point,
        relative: bool,
    },
    HorizontalTo {
        x: f32,
        relative: bool,
    },
    VerticalTo {
        y: f32,
        relative: bool,
    },
    CubicTo {
        c1: Point,
        c2: Point,
        p: Point,
        relative: bool,
    },
    QuadraticTo {
        ctrl: Point,
        p: Point,
        relative: bool,
    },
    ArcTo {
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        p: Point,
        relative: bool,
    },
    Close,
}

/// A resolved drawing instruction, in absolute document coordinates.
/// Quadratic curves have been promoted to cubics and arcs solved to
/// center parameterization by the time one of these is emitted.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawingPrimitive {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    ArcTo { arc: ArcSolution, sweep: bool },
    Close,
}

/// Interprets one path element's data string into drawing primitives.
///
/// State is per-invocation: create a fresh parser for each path element.
/// On error the primitives emitted so far are preserved and remain
/// available, so a caller may render the parsed prefix while still
/// reporting the failure.
pub struct PathParser {
    tokens: PathScanner,
    position: Point,
    start_pos: Point,
    command: Option<char>,
    primitives: Vec<DrawingPrimitive>,
}

impl PathParser {
    pub fn new(data: &str) -> Self {
        Self {
            tokens: PathScanner::new(data),
            position: Point::default(),
            start_pos: Point::default(),
            command: None,
            primitives: Vec::new(),
        }
    }

    pub fn evaluate(&mut self) -> Result<()> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
            self.tokens.skip_whitespace();
        }
        Ok(())
    }

    pub fn primitives(&self) -> &[DrawingPrimitive] {
        &self.primitives
    }

    /// Whether the final subpath was left open (no trailing close).
    pub fn is_open(&self) -> bool {
        !matches!(self.primitives.last(), None | Some(DrawingPrimitive::Close))
    }

    /// The current point: after interpretation, the resolved absolute
    /// endpoint of the last instruction.
    pub fn position(&self) -> Point {
        self.position
    }

    fn process_instruction(&mut self) -> Result<()> {
        // "The command letter can be eliminated on subsequent commands if
        // the same command is used multiple times in a row" - with the
        // quirk that bare coordinates after a moveto draw lines rather
        // than repeating the moveto.
        let cmd = match self.command {
            Some(c) if !self.tokens.at_command() => match c {
                'M' => 'L',
                'm' => 'l',
                'Z' | 'z' => {
                    return Err(Error::MalformedPathData(
                        "coordinates after close require a command".to_string(),
                    ))
                }
                c => c,
            },
            _ => self.tokens.read_command()?,
        };
        self.command = Some(cmd);
        let instruction = self.read_instruction(cmd)?;
        self.apply(&instruction)
    }

    fn read_instruction(&mut self, cmd: char) -> Result<PathCommand> {
        let relative = cmd.is_ascii_lowercase();
        Ok(match cmd.to_ascii_uppercase() {
            'M' => PathCommand::MoveTo {
                p: self.tokens.read_coord()?,
                relative,
            },
            'L' => PathCommand::LineTo {
                p: self.tokens.read_coord()?,
                relative,
            },
            'H' => PathCommand::HorizontalTo {
                x: self.tokens.read_number()?,
                relative,
            },
            'V' => PathCommand::VerticalTo {
                y: self.tokens.read_number()?,
                relative,
            },
            'C' => PathCommand::CubicTo {
                c1: self.tokens.read_coord()?,
                c2: self.tokens.read_coord()?,
                p: self.tokens.read_coord()?,
                relative,
            },
            'Q' => PathCommand::QuadraticTo {
                ctrl: self.tokens.read_coord()?,
                p: self.tokens.read_coord()?,
                relative,
            },
            'A' => PathCommand::ArcTo {
                rx: self.tokens.read_number()?,
                ry: self.tokens.read_number()?,
                rotation: self.tokens.read_number()?,
                large_arc: self.tokens.read_flag()?,
                sweep: self.tokens.read_flag()?,
                p: self.tokens.read_coord()?,
                relative,
            },
            'Z' => PathCommand::Close,
            other => return Err(Error::UnsupportedCommand(other)),
        })
    }

    /// Resolve one instruction against the current point, update state
    /// and emit the corresponding primitive.
    fn apply(&mut self, instruction: &PathCommand) -> Result<()> {
        let origin = self.position;
        let resolve = |p: Point, relative: bool| {
            if relative {
                Point::new(origin.x + p.x, origin.y + p.y)
            } else {
                p
            }
        };
        match *instruction {
            PathCommand::MoveTo { p, relative } => {
                let p = resolve(p, relative);
                self.position = p;
                self.start_pos = p;
                self.primitives.push(DrawingPrimitive::MoveTo(p));
            }
            PathCommand::LineTo { p, relative } => {
                let p = resolve(p, relative);
                self.position = p;
                self.primitives.push(DrawingPrimitive::LineTo(p));
            }
            PathCommand::HorizontalTo { x, relative } => {
                let x = if relative { origin.x + x } else { x };
                let p = Point::new(x, origin.y);
                self.position = p;
                self.primitives.push(DrawingPrimitive::LineTo(p));
            }
            PathCommand::VerticalTo { y, relative } => {
                let y = if relative { origin.y + y } else { y };
                let p = Point::new(origin.x, y);
                self.position = p;
                self.primitives.push(DrawingPrimitive::LineTo(p));
            }
            PathCommand::CubicTo {
                c1,
                c2,
                p,
                relative,
            } => {
                let (c1, c2) = (resolve(c1, relative), resolve(c2, relative));
                let p = resolve(p, relative);
                self.position = p;
                self.primitives.push(DrawingPrimitive::CurveTo(c1, c2, p));
            }
            PathCommand::QuadraticTo { ctrl, p, relative } => {
                let ctrl = resolve(ctrl, relative);
                let p = resolve(p, relative);
                let (c1, c2) = quadratic_to_cubic(origin, ctrl, p);
                self.position = p;
                self.primitives.push(DrawingPrimitive::CurveTo(c1, c2, p));
            }
            PathCommand::ArcTo {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                p,
                relative,
            } => {
                let p = resolve(p, relative);
                if rx == 0. || ry == 0. {
                    // zero radius degenerates to a straight line
                    self.position = p;
                    self.primitives.push(DrawingPrimitive::LineTo(p));
                } else if p == origin {
                    // a zero-length arc draws nothing
                } else {
                    let arc = solve_arc(&ArcSpec {
                        start: origin,
                        end: p,
                        rx,
                        ry,
                        rotation,
                        large_arc,
                        sweep,
                    })?;
                    self.position = p;
                    self.primitives.push(DrawingPrimitive::ArcTo { arc, sweep });
                }
            }
            PathCommand::Close => {
                self.position = self.start_pos;
                // a close with nothing drawn, or a repeated close, only
                // repositions the pen
                if matches!(
                    self.primitives.last(),
                    Some(
                        DrawingPrimitive::LineTo(_)
                            | DrawingPrimitive::CurveTo(..)
                            | DrawingPrimitive::ArcTo { .. }
                    )
                ) {
                    self.primitives.push(DrawingPrimitive::Close);
                }
            }
        }
        Ok(())
    }
}
