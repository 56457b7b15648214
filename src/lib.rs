//! `explore`: exploration distributions for online decision-making.
//!
//! Given a context's scored, ranked, or voted actions, these primitives write a
//! probability distribution ("pdf") over action positions `0..N` into a buffer the
//! caller owns. A sampler (not part of this crate) then draws the action to
//! present, trading exploitation of the best-known action against exploration.
//!
//! **Generators** (pick one per decision):
//! - [`generate_epsilon_greedy`]: `epsilon` spread uniformly, the rest on one top action.
//! - [`generate_softmax`]: temperature-scaled exponential weighting of scores.
//! - [`generate_bag`]: vote counts across an ensemble, normalized.
//!
//! **Post-processing**:
//! - [`enforce_minimum_probability`]: guarantee every eligible action a floor of
//!   `min_prob / N`, redistributing mass from the rest.
//!
//! **Glue**:
//! - [`ExplorationConfig`]: a generator choice plus an optional [`FloorConfig`],
//!   serializable with the `serde` feature.
//!
//! All operations are synchronous, allocation-free, and stateless. They validate
//! ranges first ([`Error::BadRange`]), then emptiness ([`Error::EmptyPdf`]), and only
//! then write. On error the buffer must not be sampled from.
//!
//! # Buffers
//!
//! Operations are generic over capabilities rather than a concrete container.
//! The pdf is a [`BufferMut`]: slices, `Vec`, arrays, and [`Window`] (a declared
//! `start..end` view over borrowed storage). Scores and votes are a [`Source`]:
//! the same containers plus `VecDeque` and any cloneable iterator wrapped in [`Seq`].
//!
//! ```rust
//! use explore::{enforce_minimum_probability, generate_softmax};
//!
//! let scores = [2.0f32, 1.0, -3.0];
//! let mut pdf = vec![0.0f32; 3];
//! generate_softmax(1.0, &scores, &mut pdf).unwrap();
//! enforce_minimum_probability(0.3, true, &mut pdf).unwrap();
//!
//! let total: f32 = pdf.iter().sum();
//! assert!((total - 1.0).abs() < 1e-5);
//! assert!(pdf.iter().all(|&p| p >= 0.1 - 1e-7));
//! ```
//!
//! # Numerics
//!
//! - Softmax subtracts the maximum score before exponentiating.
//! - Bag sums all votes before dividing.
//! - The floor identifies "zero" entries by exact `== 0.0`; no tolerance is applied.
//!
//! **Non-goals:** sampling / RNG, continuous actions, learning-rate adaptation.

mod error;
pub use error::*;

mod buffer;
pub use buffer::*;

mod epsilon_greedy;
pub use epsilon_greedy::*;

mod softmax;
pub use softmax::*;

mod bag;
pub use bag::*;

mod floor;
pub use floor::*;

mod strategy;
pub use strategy::*;

/// Crate version, for callers that record which build produced a logged pdf.
pub const EXPLORE_VERSION: &str = env!("CARGO_PKG_VERSION");
