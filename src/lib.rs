//! Pathmorph is a vector path correspondence-and-interpolation engine.
//!
//! Given two vector shapes described in a small path grammar, it computes a
//! sequence of intermediate shapes parameterized by `t` in `[0, 1]` and
//! re-emits each as path text.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: path text -> [`Path`] -> [`Shape`] (ordered typed segments)
//! 2. **Resolve**: two shapes of possibly unequal point count -> [`CorrespondenceMap`]
//! 3. **Interpolate**: `CorrespondenceMap + t -> Shape` (per-point linear blend)
//! 4. **Serialize**: `Shape -> String` (structural inverse of parsing)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure engine**: parsing, resolution, interpolation and serialization
//!   are deterministic functions over owned values, with no logging or IO
//!   side effects. All errors are returned, never repaired or retried.
//! - **One map, many frames**: a [`CorrespondenceMap`] is built once per
//!   shape pair and is immutable, so any number of frames (or threads, see
//!   [`render_parallel`]) can consume it without synchronization.
//! - **Position-only correspondence**: resampling and blending operate on
//!   point positions; Bezier control points are blended positionally, not
//!   re-fit to a shape-consistent curve. A known fidelity limitation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod morph;
mod path;
mod sequence;

pub use document::svg::{ViewBox, extract_path_data, first_path_data, wrap_document};
pub use foundation::core::{Path, Point, Segment, Shape, Vec2};
pub use foundation::error::{
    CorrespondenceError, GeometryError, MorphError, MorphResult, ParseError,
};
pub use morph::ease::Ease;
pub use morph::interpolate::{BlendOptions, TimePolicy, interpolate};
pub use morph::resolve::{CorrespondenceMap, resolve};
pub use path::parse::parse_path;
pub use path::serialize::{serialize_path, serialize_shape};
pub use sequence::frames::{
    MorphSequence, MorphThreading, morph_paths, render, render_parallel,
};
