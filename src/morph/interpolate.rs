use crate::{
    foundation::core::{Path, Segment, Shape},
    foundation::error::{GeometryError, MorphError, MorphResult},
    morph::ease::Ease,
    morph::resolve::CorrespondenceMap,
};

/// What to do with a blend parameter outside `[0, 1]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum TimePolicy {
    /// Clamp `t` into `[0, 1]`.
    #[default]
    Clamp,
    /// Return a validation error for out-of-range `t`.
    Reject,
    /// Accept out-of-range `t` and extrapolate linearly.
    Extrapolate,
}

/// Blend configuration: out-of-range policy plus easing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct BlendOptions {
    /// Out-of-range handling for `t`. Default: clamp.
    pub policy: TimePolicy,
    /// Easing applied to `t` before blending. Default: linear (identity).
    pub ease: Ease,
}

/// Compute the blended shape between the two sides of `map` at parameter `t`.
///
/// Every coordinate of every point in corresponding segments is blended
/// independently as `source + t * (target - source)`. Bezier control points
/// are blended positionally, not reconstructed as a shape-consistent curve:
/// morphing two curved paths can produce visually non-circular intermediate
/// curves. This is a known fidelity limitation, not a defect.
///
/// `t = 0` reproduces the map's source exactly and `t = 1` its target
/// exactly, bit for bit. Non-finite `t`, and a blend whose arithmetic
/// overflows to a non-finite coordinate (possible under
/// [`TimePolicy::Extrapolate`]), are [`GeometryError::NonFiniteValue`].
pub fn interpolate(map: &CorrespondenceMap, t: f64, opts: &BlendOptions) -> MorphResult<Shape> {
    if !t.is_finite() {
        return Err(GeometryError::NonFiniteValue {
            what: "blend parameter t",
            value: t,
        }
        .into());
    }
    let t = match opts.policy {
        TimePolicy::Clamp => t.clamp(0.0, 1.0),
        TimePolicy::Reject => {
            if !(0.0..=1.0).contains(&t) {
                return Err(MorphError::validation(format!(
                    "blend parameter t={t} is outside [0, 1] and the time policy is Reject"
                )));
            }
            t
        }
        TimePolicy::Extrapolate => t,
    };
    let t = opts.ease.apply(t);

    if t == 0.0 {
        return Ok(map.source().clone());
    }
    if t == 1.0 {
        return Ok(map.target().clone());
    }
    let blended = blend(map.source(), map.target(), t);
    ensure_finite(&blended)?;
    Ok(blended)
}

fn ensure_finite(shape: &Shape) -> MorphResult<()> {
    for p in shape.points() {
        if !p.x.is_finite() {
            return Err(GeometryError::NonFiniteValue {
                what: "blended x coordinate",
                value: p.x,
            }
            .into());
        }
        if !p.y.is_finite() {
            return Err(GeometryError::NonFiniteValue {
                what: "blended y coordinate",
                value: p.y,
            }
            .into());
        }
    }
    Ok(())
}

impl CorrespondenceMap {
    /// Blend at `t` with default options (clamp, linear easing).
    pub fn at(&self, t: f64) -> MorphResult<Shape> {
        interpolate(self, t, &BlendOptions::default())
    }
}

fn blend(source: &Shape, target: &Shape, t: f64) -> Shape {
    let segments = source
        .path()
        .segments()
        .iter()
        .zip(target.path().segments())
        .map(|(a, b)| match (*a, *b) {
            (Segment::MoveTo(p), Segment::MoveTo(q)) => Segment::MoveTo(p.lerp(q, t)),
            (Segment::LineTo(p), Segment::LineTo(q)) => Segment::LineTo(p.lerp(q, t)),
            (Segment::CurveTo(a1, a2, a3), Segment::CurveTo(b1, b2, b3)) => {
                Segment::CurveTo(a1.lerp(b1, t), a2.lerp(b2, t), a3.lerp(b3, t))
            }
            (Segment::ClosePath, Segment::ClosePath) => Segment::ClosePath,
            // The resolver only builds maps with congruent sides.
            _ => unreachable!("correspondence map sides must be congruent"),
        })
        .collect();
    Shape::new(Path::new_unchecked(segments))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
