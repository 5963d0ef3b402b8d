use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    foundation::core::Shape,
    foundation::error::{GeometryError, MorphError, MorphResult},
    morph::ease::Ease,
    morph::interpolate::{BlendOptions, TimePolicy, interpolate},
    morph::resolve::{CorrespondenceMap, resolve},
    path::parse::parse_path,
    path::serialize::serialize_shape,
};

/// Frame schedule plus blend configuration for one morph batch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphSequence {
    /// Total output frame count, endpoints inclusive: frame `i` of `n` is
    /// blended at `t = i / (n - 1)`. Ignored when `times` is set.
    pub frames: u32,
    /// Explicit list of blend parameters, overriding `frames` when set.
    #[serde(default)]
    pub times: Option<Vec<f64>>,
    /// Out-of-range handling for `t`.
    #[serde(default)]
    pub policy: TimePolicy,
    /// Easing applied before blending.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for MorphSequence {
    fn default() -> Self {
        // 21 frames = the original drivers' 0..=20 loop.
        Self {
            frames: 21,
            times: None,
            policy: TimePolicy::default(),
            ease: Ease::default(),
        }
    }
}

impl MorphSequence {
    /// Sequence of `frames` evenly spaced t values over `[0, 1]`.
    pub fn with_frames(frames: u32) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Sequence over an explicit list of t values.
    pub fn with_times(times: Vec<f64>) -> Self {
        Self {
            times: Some(times),
            ..Self::default()
        }
    }

    /// Resolve the t schedule for this sequence.
    ///
    /// An explicit list is validated (non-empty, finite) and returned as is;
    /// otherwise `frames` evenly spaced values over `[0, 1]`, endpoints
    /// inclusive. Frame counts below 2 cannot include both endpoints and are
    /// rejected.
    pub fn frame_times(&self) -> MorphResult<Vec<f64>> {
        if let Some(times) = &self.times {
            if times.is_empty() {
                return Err(MorphError::validation(
                    "explicit frame times must be non-empty",
                ));
            }
            for &t in times {
                if !t.is_finite() {
                    return Err(GeometryError::NonFiniteValue {
                        what: "frame time",
                        value: t,
                    }
                    .into());
                }
            }
            return Ok(times.clone());
        }

        if self.frames < 2 {
            return Err(MorphError::validation("frame count must be >= 2"));
        }
        let last = f64::from(self.frames - 1);
        Ok((0..self.frames).map(|i| f64::from(i) / last).collect())
    }

    fn blend_options(&self) -> BlendOptions {
        BlendOptions {
            policy: self.policy,
            ease: self.ease,
        }
    }
}

/// Render one serialized path string per scheduled frame, in order.
#[tracing::instrument(skip(map, seq), fields(frames = seq.frames))]
pub fn render(map: &CorrespondenceMap, seq: &MorphSequence) -> MorphResult<Vec<String>> {
    let opts = seq.blend_options();
    seq.frame_times()?
        .into_iter()
        .map(|t| Ok(serialize_shape(&interpolate(map, t, &opts)?)))
        .collect()
}

/// Threading configuration for [`render_parallel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphThreading {
    /// Worker thread count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Render all scheduled frames on a rayon pool, one task per frame.
///
/// Frames are independent once the map is built, so no synchronization is
/// needed; output order matches the schedule regardless of thread count.
#[tracing::instrument(skip(map, seq))]
pub fn render_parallel(
    map: &CorrespondenceMap,
    seq: &MorphSequence,
    threading: &MorphThreading,
) -> MorphResult<Vec<String>> {
    let times = seq.frame_times()?;
    let opts = seq.blend_options();
    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        times
            .par_iter()
            .map(|&t| Ok(serialize_shape(&interpolate(map, t, &opts)?)))
            .collect()
    })
}

/// One-shot convenience: parse both path strings, resolve correspondence and
/// render every scheduled frame.
#[tracing::instrument(skip(source, target, seq))]
pub fn morph_paths(source: &str, target: &str, seq: &MorphSequence) -> MorphResult<Vec<String>> {
    let source = Shape::new(parse_path(source)?);
    let target = Shape::new(parse_path(target)?);
    let map = resolve(&source, &target)?;
    render(&map, seq)
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MorphError::validation(
            "morph threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build().context("build rayon thread pool")?)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
