use smallvec::SmallVec;

use crate::foundation::{
    core::{Path, Point, Segment},
    error::ParseError,
};

/// Parse a path description string into a [`Path`].
///
/// Supported grammar subset: a command letter from `{M, L, C, Z}` followed,
/// for `M`/`L`/`C`, by the corresponding number of comma- or
/// whitespace-separated coordinate pairs (`M`, `L`: one pair; `C`: three).
/// `Z` takes no operands and must be the final command. Whitespace between
/// tokens is insignificant.
///
/// Implicit command repetition (a bare coordinate pair without a preceding
/// command letter, as in the full SVG grammar) is unsupported and fails with
/// [`ParseError::MissingOperand`].
pub fn parse_path(input: &str) -> Result<Path, ParseError> {
    let mut cursor = Cursor::new(input);
    let mut segments: Vec<Segment> = Vec::new();
    let mut last_command = None;

    loop {
        cursor.skip_separators();
        let offset = cursor.offset();
        let Some(c) = cursor.peek() else { break };

        if is_number_start(c) {
            // Bare coordinate pair: implicit repetition of the previous
            // command, which this grammar subset does not support.
            return Err(ParseError::MissingOperand {
                command: last_command.unwrap_or('M'),
                offset,
            });
        }

        // Letters outside the command set are unknown wherever they appear;
        // only known commands in an invalid position are misplaced.
        if !matches!(c, 'M' | 'L' | 'C' | 'Z') {
            return Err(ParseError::UnknownCommand { command: c, offset });
        }
        if segments.is_empty() && matches!(c, 'L' | 'C' | 'Z') {
            return Err(ParseError::MisplacedCommand { command: c, offset });
        }
        if matches!(segments.last(), Some(Segment::ClosePath)) {
            return Err(ParseError::MisplacedCommand { command: c, offset });
        }

        cursor.advance_char();
        match c {
            'M' => {
                let p = read_pair(&mut cursor, 'M')?;
                segments.push(Segment::MoveTo(p));
            }
            'L' => {
                let p = read_pair(&mut cursor, 'L')?;
                segments.push(Segment::LineTo(p));
            }
            'C' => {
                let mut points: SmallVec<[Point; 3]> = SmallVec::new();
                for _ in 0..3 {
                    points.push(read_pair(&mut cursor, 'C')?);
                }
                segments.push(Segment::CurveTo(points[0], points[1], points[2]));
            }
            'Z' => {
                segments.push(Segment::ClosePath);
            }
            // The command set was checked before dispatch.
            _ => unreachable!("command letter outside the supported set"),
        }
        last_command = Some(c);
    }

    if segments.is_empty() {
        return Err(ParseError::EmptyPath);
    }
    Ok(Path::new_unchecked(segments))
}

fn read_pair(cursor: &mut Cursor<'_>, command: char) -> Result<Point, ParseError> {
    let x = read_coordinate(cursor, command)?;
    let y = read_coordinate(cursor, command)?;
    Ok(Point::new(x, y))
}

fn read_coordinate(cursor: &mut Cursor<'_>, command: char) -> Result<f64, ParseError> {
    cursor.skip_separators();
    let offset = cursor.offset();
    let token = cursor.take_number_token();
    if token.is_empty() {
        return Err(ParseError::MissingOperand { command, offset });
    }
    let value: f64 = token.parse().map_err(|_| ParseError::MalformedNumber {
        token: token.to_string(),
        offset,
    })?;
    if !value.is_finite() {
        return Err(ParseError::MalformedNumber {
            token: token.to_string(),
            offset,
        });
    }
    Ok(value)
}

fn is_number_start(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.')
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

/// Bounds-checked cursor over the input, advancing by whole tokens and
/// reporting byte positions on error.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    /// Consume the maximal run of number characters starting here.
    fn take_number_token(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_number_char(c) {
                self.advance_char();
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
