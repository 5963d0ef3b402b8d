use crate::foundation::{
    core::{Path, Point, Segment, Shape},
    error::CorrespondenceError,
};

/// A source/target pair guaranteed to expose the same ordered point count and
/// the same segment tag sequence.
///
/// Built once by [`resolve`] and consumed for every frame of a morph
/// sequence; immutable after construction, so it is safely shared by any
/// number of concurrent readers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CorrespondenceMap {
    source: Shape,
    target: Shape,
    point_count: usize,
}

impl CorrespondenceMap {
    /// The resolved source side.
    pub fn source(&self) -> &Shape {
        &self.source
    }

    /// The resolved target side.
    pub fn target(&self) -> &Shape {
        &self.target
    }

    /// Point count shared by both sides.
    pub fn point_count(&self) -> usize {
        self.point_count
    }
}

/// Establish point correspondence between two shapes.
///
/// The shape with fewer points is resampled along its closed polygon boundary
/// to the larger count; the larger shape's points are kept unchanged. When
/// the inputs already share a segment tag sequence they are kept verbatim;
/// otherwise both sides are flattened to polygon form (`MoveTo` + `LineTo`*,
/// with a terminal `ClosePath` only when both inputs are closed) so the two
/// sides stay structurally congruent for segment-wise blending.
///
/// Resampling is position-only: Bezier control-point structure is not
/// reconstructed. Correspondence here is geometric, not curve-shape-based.
pub fn resolve(source: &Shape, target: &Shape) -> Result<CorrespondenceMap, CorrespondenceError> {
    if source.point_count() == 0 || target.point_count() == 0 {
        return Err(CorrespondenceError::DegenerateShape);
    }

    if source.point_count() == target.point_count() && source.is_congruent_with(target) {
        return Ok(CorrespondenceMap {
            source: source.clone(),
            target: target.clone(),
            point_count: source.point_count(),
        });
    }

    let n = source.point_count().max(target.point_count());
    let closed = source.is_closed() && target.is_closed();
    let resolved_source = polygonal(source, n, closed);
    let resolved_target = polygonal(target, n, closed);
    Ok(CorrespondenceMap {
        source: resolved_source,
        target: resolved_target,
        point_count: n,
    })
}

/// Resample `shape` to exactly `n` points in polygon form.
///
/// Output index `i` maps to position parameter `t_i = i / n` along the
/// shape's closed polygon boundary (wrap-around from last point to first):
/// source segment `floor(t_i * ns)`, local parameter `t_i * ns - seg`. A
/// pure function of the input points and `(ns, n, i)`.
fn polygonal(shape: &Shape, n: usize, closed: bool) -> Shape {
    let points = shape.points();
    let ns = points.len();
    let resampled: Vec<Point> = if ns == n {
        points
    } else {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                let scaled = t * ns as f64;
                let seg = (scaled.floor() as usize).min(ns - 1);
                let local_t = scaled - seg as f64;
                points[seg].lerp(points[(seg + 1) % ns], local_t)
            })
            .collect()
    };

    let mut segments = Vec::with_capacity(n + usize::from(closed));
    let mut iter = resampled.into_iter();
    if let Some(first) = iter.next() {
        segments.push(Segment::MoveTo(first));
    }
    segments.extend(iter.map(Segment::LineTo));
    if closed {
        segments.push(Segment::ClosePath);
    }
    Shape::new(Path::new_unchecked(segments))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/resolve.rs"]
mod tests;
