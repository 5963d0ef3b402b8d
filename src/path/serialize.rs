use crate::foundation::core::{Path, Point, Segment, Shape};

/// Render a [`Path`] back into path description text.
///
/// One command letter per segment, operands in fixed order, coordinate pairs
/// written as `x,y` and separated by single spaces. Coordinates use Rust's
/// shortest round-trip float formatting, so re-parsing the output always
/// reproduces the input path structurally and numerically. Serialization
/// never fails for well-formed paths.
pub fn serialize_path(path: &Path) -> String {
    let mut out = String::new();
    for (i, seg) in path.segments().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(seg.command());
        match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) => {
                push_point(&mut out, p);
            }
            Segment::CurveTo(c1, c2, end) => {
                push_point(&mut out, c1);
                out.push(' ');
                push_point(&mut out, c2);
                out.push(' ');
                push_point(&mut out, end);
            }
            Segment::ClosePath => {}
        }
    }
    out
}

/// Render a [`Shape`]'s path. See [`serialize_path`].
pub fn serialize_shape(shape: &Shape) -> String {
    serialize_path(shape.path())
}

fn push_point(out: &mut String, p: Point) {
    out.push_str(&p.x.to_string());
    out.push(',');
    out.push_str(&p.y.to_string());
}

#[cfg(test)]
#[path = "../../tests/unit/path/serialize.rs"]
mod tests;
