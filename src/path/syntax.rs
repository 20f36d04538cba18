use crate::errors::{Error, Result};
use crate::geometry::Point;

/// The supported path command letters; case selects absolute vs relative.
const COMMANDS: &str = "MmLlHhVvCcQqAaZz";

/// Character-class scanner over a path data string.
///
/// Tokens are single command letters and numeric literals; comma and
/// whitespace separators between them are optional. A `-` sign or a `.`
/// starting a new number acts as an implicit separator, so `1.2-3.4` and
/// `1.5.25` each scan as two numbers.
pub struct PathScanner {
    data: Vec<char>,
    index: usize,
}

impl PathScanner {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.data.get(self.index + ahead).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    /// Is the next token a command letter? False at end of input.
    pub fn at_command(&self) -> bool {
        matches!(self.current(), Some(c) if c.is_ascii_alphabetic())
    }

    pub fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's
        // is_ascii_whitespace() also includes 0xC; close enough.
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    pub fn read_command(&mut self) -> Result<char> {
        match self.current() {
            Some(c) if COMMANDS.contains(c) => {
                self.advance();
                self.skip_wsp_comma();
                Ok(c)
            }
            Some(c) if c.is_ascii_alphabetic() => Err(Error::UnsupportedCommand(c)),
            Some(c) => Err(Error::MalformedPathData(format!(
                "expected command at offset {}, found '{c}'",
                self.index
            ))),
            None => Err(Error::TruncatedPathData("expected command".to_string())),
        }
    }

    /// Scan a numeric literal: `-?digit+(.digit+)?([eE][+-]?digit+)?`,
    /// also accepting the bare-fraction form starting with `.`.
    pub fn read_number(&mut self) -> Result<f32> {
        if self.at_end() {
            return Err(Error::TruncatedPathData("expected number".to_string()));
        }
        let start = self.index;
        let mut s = String::new();
        if self.current() == Some('-') {
            s.push('-');
            self.advance();
        }
        let mut digits = self.scan_digits(&mut s);
        if self.current() == Some('.') {
            s.push('.');
            self.advance();
            digits |= self.scan_digits(&mut s);
        }
        if !digits {
            return Err(Error::MalformedPathData(format!(
                "expected number at offset {start}"
            )));
        }
        // exponent only if it is actually followed by one; a lone 'e'
        // would otherwise swallow the next command letter
        if let Some(e) = self.current() {
            if e == 'e' || e == 'E' {
                let sign = matches!(self.peek(1), Some('+' | '-'));
                let first = if sign { self.peek(2) } else { self.peek(1) };
                if matches!(first, Some(c) if c.is_ascii_digit()) {
                    s.push(e);
                    self.advance();
                    if sign {
                        s.push(self.current().unwrap_or('+'));
                        self.advance();
                    }
                    self.scan_digits(&mut s);
                }
            }
        }
        self.skip_wsp_comma();
        s.parse()
            .map_err(|_| Error::MalformedPathData(format!("invalid number '{s}' at offset {start}")))
    }

    /// Append consecutive digits to `s`, reporting whether any were seen.
    fn scan_digits(&mut self, s: &mut String) -> bool {
        let mut seen = false;
        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
                seen = true;
            } else {
                break;
            }
        }
        seen
    }

    pub fn read_coord(&mut self) -> Result<Point> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(Point::new(x, y))
    }

    /// Arc flags are numeric tokens; zero is false, anything else true.
    pub fn read_flag(&mut self) -> Result<bool> {
        Ok(self.read_number()? != 0.)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_number() {
        let mut ps = PathScanner::new("123 4.5  -9.25");
        assert_eq!(ps.read_number().unwrap(), 123.);
        assert_eq!(ps.read_number().unwrap(), 4.5);
        assert_eq!(ps.read_number().unwrap(), -9.25);
        assert!(ps.at_end());
    }

    #[test]
    fn test_implicit_separators() {
        // a sign or decimal point starts a new number
        let mut ps = PathScanner::new("1.2-3.4");
        assert_eq!(ps.read_number().unwrap(), 1.2);
        assert_eq!(ps.read_number().unwrap(), -3.4);

        let mut ps = PathScanner::new("1.5.25");
        assert_eq!(ps.read_number().unwrap(), 1.5);
        assert_eq!(ps.read_number().unwrap(), 0.25);
    }

    #[test]
    fn test_exponents() {
        let mut ps = PathScanner::new("1e3 -2.5E-2 1e+1");
        assert_eq!(ps.read_number().unwrap(), 1000.);
        assert_eq!(ps.read_number().unwrap(), -0.025);
        assert_eq!(ps.read_number().unwrap(), 10.);
    }

    #[test]
    fn test_read_coord() {
        for input in ["123 456", "123,456", "123 ,   456"] {
            let mut ps = PathScanner::new(input);
            assert_eq!(ps.read_coord().unwrap(), Point::new(123., 456.));
        }
    }

    #[test]
    fn test_read_command() {
        let mut ps = PathScanner::new("M 1");
        assert!(ps.at_command());
        assert_eq!(ps.read_command().unwrap(), 'M');
        assert!(!ps.at_command());

        // SVG commands we don't support are distinguished from junk
        let mut ps = PathScanner::new("S 1 2 3 4");
        assert!(matches!(
            ps.read_command(),
            Err(Error::UnsupportedCommand('S'))
        ));
        let mut ps = PathScanner::new("% 1");
        assert!(matches!(ps.read_command(), Err(Error::MalformedPathData(_))));
    }

    #[test]
    fn test_truncated() {
        let mut ps = PathScanner::new("1,");
        assert_eq!(ps.read_number().unwrap(), 1.);
        assert!(matches!(
            ps.read_number(),
            Err(Error::TruncatedPathData(_))
        ));
    }

    #[test]
    fn test_flags() {
        let mut ps = PathScanner::new("1 0 1");
        assert!(ps.read_flag().unwrap());
        assert!(!ps.read_flag().unwrap());
        assert!(ps.read_flag().unwrap());
    }
}
