use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{Point, Vec2};

/// One typed drawing instruction in a path description.
///
/// Points are owned by the segment; there is no sharing between segments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Segment {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic Bezier curve: control 1, control 2, endpoint.
    CurveTo(Point, Point, Point),
    /// Close the current subpath. Carries no points.
    ClosePath,
}

impl Segment {
    /// The command letter this segment serializes to.
    pub fn command(self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CurveTo(..) => 'C',
            Self::ClosePath => 'Z',
        }
    }

    /// Number of points the segment carries (`ClosePath` carries zero).
    pub fn point_count(self) -> usize {
        match self {
            Self::MoveTo(_) | Self::LineTo(_) => 1,
            Self::CurveTo(..) => 3,
            Self::ClosePath => 0,
        }
    }

    /// The segment's points in operand order.
    pub fn points(self) -> smallvec::SmallVec<[Point; 3]> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => smallvec::smallvec![p],
            Self::CurveTo(c1, c2, end) => smallvec::smallvec![c1, c2, end],
            Self::ClosePath => smallvec::SmallVec::new(),
        }
    }
}

/// An ordered, non-empty sequence of [`Segment`]s.
///
/// Invariants (checked by [`Path::new`]): the first segment is `MoveTo`, and
/// `ClosePath`, if present, is the terminal segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Build a path, validating the structural invariants.
    pub fn new(segments: Vec<Segment>) -> MorphResult<Self> {
        if segments.is_empty() {
            return Err(MorphError::validation("path must contain segments"));
        }
        if !matches!(segments[0], Segment::MoveTo(_)) {
            return Err(MorphError::validation("path must start with MoveTo"));
        }
        for seg in &segments[..segments.len() - 1] {
            if matches!(seg, Segment::ClosePath) {
                return Err(MorphError::validation(
                    "ClosePath is only valid as the terminal segment",
                ));
            }
        }
        Ok(Self { segments })
    }

    // For paths whose invariants are guaranteed by construction
    // (parser output, resampling, blending).
    pub(crate) fn new_unchecked(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the terminal segment is `ClosePath`.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::ClosePath))
    }
}

/// A [`Path`] plus its derived point count.
///
/// Shapes are value types: no identity beyond their content, never mutated
/// after creation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    path: Path,
    point_count: usize,
}

impl Shape {
    /// Wrap a path, deriving the total point count across all segments.
    pub fn new(path: Path) -> Self {
        let point_count = path.segments().iter().map(|s| s.point_count()).sum();
        Self { path, point_count }
    }

    /// The underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of points across all segments.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// All points in segment order, flattened.
    pub fn points(&self) -> Vec<Point> {
        self.path
            .segments()
            .iter()
            .flat_map(|s| s.points())
            .collect()
    }

    /// Whether the shape's path ends in `ClosePath`.
    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }

    /// Whether both shapes have the same segment tag sequence.
    pub fn is_congruent_with(&self, other: &Shape) -> bool {
        self.path.segments().len() == other.path.segments().len()
            && self
                .path
                .segments()
                .iter()
                .zip(other.path.segments())
                .all(|(a, b)| std::mem::discriminant(a) == std::mem::discriminant(b))
    }
}
