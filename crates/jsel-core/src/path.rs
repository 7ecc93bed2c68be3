//! # Path Expressions — Minimal Dotted/Indexed Paths
//!
//! A `PathExpression` names one node in a JSON tree. The grammar is a
//! deliberately small subset of JSONPath:
//!
//! ```text
//! path    = "$" *segment
//! segment = "." name / "[" index "]"
//! name    = 1*( alphanumeric / "_" / "-" )
//! index   = 1*DIGIT
//! ```
//!
//! There are no wildcards, filters, slices, unions, negative indices,
//! quoted keys or recursive descent. Anything outside the grammar,
//! including surrounding whitespace, is rejected with
//! [`JsonSelectionError::InvalidPath`].
//!
//! Expressions are parsed once per call and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JsonSelectionError;

/// One navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `.name`: look up a key in an object.
    Field(String),
    /// `[n]`: take the n-th element of an array.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// A parsed path: the implicit root `$` followed by segments applied left
/// to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathExpression {
    segments: Vec<Segment>,
}

impl PathExpression {
    /// The bare root reference `$`.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build an expression from segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse a path string.
    ///
    /// # Errors
    ///
    /// Returns [`JsonSelectionError::InvalidPath`] if `input` is not `$`
    /// optionally followed by `.name` or `[index]` segments.
    pub fn parse(input: &str) -> Result<Self, JsonSelectionError> {
        Parser::new(input).parse_path()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for `$` with no segments.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new expression with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PathExpression {
    type Err = JsonSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathExpression {
    type Error = JsonSelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathExpression> for String {
    fn from(path: PathExpression) -> Self {
        path.to_string()
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn error(&self, reason: impl Into<String>) -> JsonSelectionError {
        JsonSelectionError::invalid_path(self.input, reason)
    }

    fn expect_char(&mut self, expected: char) -> Result<(), JsonSelectionError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c);
                Ok(())
            }
            Some(c) => Err(self.error(format!(
                "expected '{expected}' at offset {}, got '{c}'",
                self.pos
            ))),
            None => Err(self.error(format!("expected '{expected}', got end of input"))),
        }
    }

    fn parse_path(&mut self) -> Result<PathExpression, JsonSelectionError> {
        if self.input.is_empty() {
            return Err(self.error("path is empty"));
        }
        self.expect_char('$')?;

        let mut segments = Vec::new();
        while let Some(c) = self.peek() {
            let segment = match c {
                '.' => {
                    self.advance(c);
                    Segment::Field(self.parse_name()?)
                }
                '[' => {
                    self.advance(c);
                    let index = self.parse_index()?;
                    self.expect_char(']')?;
                    Segment::Index(index)
                }
                other => {
                    return Err(self.error(format!(
                        "unexpected '{other}' at offset {}",
                        self.pos
                    )))
                }
            };
            segments.push(segment);
        }

        Ok(PathExpression { segments })
    }

    fn parse_name(&mut self) -> Result<String, JsonSelectionError> {
        let start = self.pos;
        while let Some(c) = self.peek().filter(|c| is_name_char(*c)) {
            self.advance(c);
        }
        if self.pos == start {
            return Err(self.error(format!("expected field name at offset {start}")));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_index(&mut self) -> Result<usize, JsonSelectionError> {
        let start = self.pos;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.advance(c);
        }
        let digits = &self.input[start..self.pos];
        if digits.is_empty() {
            return Err(self.error(format!(
                "expected non-negative array index at offset {start}"
            )));
        }
        digits
            .parse()
            .map_err(|_| self.error(format!("array index {digits} is too large")))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
