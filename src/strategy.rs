//! Typed configuration for picking a generator and an optional exploration floor.
//!
//! The free functions ([`generate_epsilon_greedy`], [`generate_softmax`],
//! [`generate_bag`], [`enforce_minimum_probability`]) are the primitives. This
//! module is the glue a caller stores in its own config: which strategy to run,
//! with what parameters, and whether to floor the result before sampling.

use crate::{
    enforce_minimum_probability, generate_bag, generate_epsilon_greedy, generate_softmax, Buffer,
    BufferMut, Error,
};

/// Epsilon-greedy parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsilonGreedyConfig {
    /// Total probability spread uniformly over all actions, in `[0, 1]`.
    pub epsilon: f32,
}

impl Default for EpsilonGreedyConfig {
    fn default() -> Self {
        Self { epsilon: 0.05 }
    }
}

/// Softmax parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftmaxConfig {
    /// Inverse temperature. `0` is uniform; larger values sharpen toward the best score.
    pub lambda: f32,
}

impl Default for SoftmaxConfig {
    fn default() -> Self {
        Self { lambda: 1.0 }
    }
}

/// Exploration floor applied after a generator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorConfig {
    /// Total floor mass; each eligible action keeps at least `min_prob / N`.
    ///
    /// Values `<= 0` (or non-finite) disable the floor. Values above `0.999` force
    /// uniform exploration over the eligible actions.
    pub min_prob: f32,
    /// Also raise actions the generator gave exactly zero probability.
    pub update_zero_elements: bool,
}

impl FloorConfig {
    fn is_active(&self) -> bool {
        self.min_prob.is_finite() && self.min_prob > 0.0
    }
}

/// Which generator produces the raw distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exploration {
    EpsilonGreedy(EpsilonGreedyConfig),
    Softmax(SoftmaxConfig),
    Bag,
}

impl Default for Exploration {
    fn default() -> Self {
        Exploration::EpsilonGreedy(EpsilonGreedyConfig::default())
    }
}

impl Exploration {
    /// Human-readable strategy name (stable; suitable for logs).
    pub fn name(&self) -> &'static str {
        match self {
            Exploration::EpsilonGreedy(_) => "epsilon_greedy",
            Exploration::Softmax(_) => "softmax",
            Exploration::Bag => "bag",
        }
    }
}

/// Model output handed to a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal<'a> {
    /// The model's preferred action (epsilon-greedy).
    TopAction(u32),
    /// Per-action scores (softmax).
    Scores(&'a [f32]),
    /// Per-action ensemble vote counts (bag).
    Votes(&'a [u32]),
}

impl Signal<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Signal::TopAction(_) => "top_action",
            Signal::Scores(_) => "scores",
            Signal::Votes(_) => "votes",
        }
    }
}

/// Failure of [`ExplorationConfig::fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// The signal is not the kind the configured strategy consumes.
    #[error("{strategy} cannot consume a {signal} signal")]
    SignalMismatch {
        strategy: &'static str,
        signal: &'static str,
    },
    #[error(transparent)]
    Pdf(#[from] Error),
}

/// A generator plus an optional floor.
///
/// ```rust
/// use explore::{Exploration, ExplorationConfig, FloorConfig, Signal, SoftmaxConfig};
///
/// let cfg = ExplorationConfig {
///     exploration: Exploration::Softmax(SoftmaxConfig { lambda: 2.0 }),
///     floor: Some(FloorConfig { min_prob: 0.2, update_zero_elements: true }),
/// };
/// let mut pdf = vec![0.0f32; 4];
/// cfg.fill(Signal::Scores(&[4.0, 0.0, -1.0, -8.0]), &mut pdf).unwrap();
/// assert!(pdf.iter().all(|&p| p >= 0.05));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationConfig {
    pub exploration: Exploration,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub floor: Option<FloorConfig>,
}

impl ExplorationConfig {
    pub fn new(exploration: Exploration) -> Self {
        Self {
            exploration,
            floor: None,
        }
    }

    pub fn with_floor(mut self, floor: FloorConfig) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Run the configured generator on `signal`, then the floor if one is active.
    ///
    /// On error `pdf` must be treated as undefined.
    pub fn fill<P>(&self, signal: Signal<'_>, pdf: &mut P) -> Result<(), StrategyError>
    where
        P: BufferMut<f32> + ?Sized,
    {
        match (self.exploration, signal) {
            (Exploration::EpsilonGreedy(c), Signal::TopAction(top)) => {
                generate_epsilon_greedy(c.epsilon, top, pdf)?
            }
            (Exploration::Softmax(c), Signal::Scores(scores)) => {
                generate_softmax(c.lambda, scores, pdf)?
            }
            (Exploration::Bag, Signal::Votes(votes)) => generate_bag(votes, pdf)?,
            (exploration, signal) => {
                log::debug!(
                    "exploration config rejected signal: strategy={} signal={}",
                    exploration.name(),
                    signal.kind()
                );
                return Err(StrategyError::SignalMismatch {
                    strategy: exploration.name(),
                    signal: signal.kind(),
                });
            }
        }

        if let Some(floor) = self.floor.filter(FloorConfig::is_active) {
            enforce_minimum_probability(floor.min_prob, floor.update_zero_elements, pdf)?;
        }
        Ok(())
    }
}

/// Sum of the entries in `pdf`'s declared range.
pub fn pdf_sum<P>(pdf: &P) -> Result<f32, Error>
where
    P: Buffer<f32> + ?Sized,
{
    Ok(pdf.checked()?.iter().sum())
}

/// First position holding the largest probability, or `None` for an empty pdf.
pub fn argmax<P>(pdf: &P) -> Result<Option<usize>, Error>
where
    P: Buffer<f32> + ?Sized,
{
    let pdf = pdf.checked()?;
    let mut best: Option<(usize, f32)> = None;
    for (i, &p) in pdf.iter().enumerate() {
        match best {
            Some((_, b)) if p <= b => {}
            _ => best = Some((i, p)),
        }
    }
    Ok(best.map(|(i, _)| i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Window;

    #[test]
    fn epsilon_greedy_config_with_floor() {
        let cfg = ExplorationConfig::new(Exploration::EpsilonGreedy(EpsilonGreedyConfig {
            epsilon: 0.0,
        }))
        .with_floor(FloorConfig {
            min_prob: 0.4,
            update_zero_elements: true,
        });
        let mut pdf = [0.0f32; 4];
        cfg.fill(Signal::TopAction(0), &mut pdf).unwrap();
        assert_eq!(&pdf[1..], &[0.1, 0.1, 0.1]);
        assert!((pdf_sum(&pdf).unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(argmax(&pdf).unwrap(), Some(0));
    }

    #[test]
    fn bag_config_without_floor() {
        let cfg = ExplorationConfig::new(Exploration::Bag);
        let mut pdf = [0.0f32; 3];
        cfg.fill(Signal::Votes(&[0, 2, 2]), &mut pdf).unwrap();
        assert_eq!(pdf, [0.0, 0.5, 0.5]);
        assert_eq!(argmax(&pdf).unwrap(), Some(1));
    }

    #[test]
    fn inactive_floor_is_skipped() {
        let cfg = ExplorationConfig::new(Exploration::Bag).with_floor(FloorConfig {
            min_prob: f32::NAN,
            update_zero_elements: true,
        });
        let mut pdf = [0.0f32; 2];
        cfg.fill(Signal::Votes(&[1, 0]), &mut pdf).unwrap();
        assert_eq!(pdf, [1.0, 0.0]);
    }

    #[test]
    fn mismatched_signal_is_rejected() {
        let cfg = ExplorationConfig::default();
        let mut pdf = [0.0f32; 2];
        let err = cfg.fill(Signal::Scores(&[1.0, 2.0]), &mut pdf).unwrap_err();
        assert_eq!(
            err,
            StrategyError::SignalMismatch {
                strategy: "epsilon_greedy",
                signal: "scores",
            }
        );
        assert!(err.to_string().contains("epsilon_greedy"));
    }

    #[test]
    fn kernel_errors_pass_through() {
        let cfg = ExplorationConfig::new(Exploration::Softmax(SoftmaxConfig::default()));
        let mut empty: Vec<f32> = Vec::new();
        let err = cfg.fill(Signal::Scores(&[1.0]), &mut empty).unwrap_err();
        assert_eq!(err, StrategyError::Pdf(Error::EmptyPdf));

        let mut data = [0.0f32; 2];
        let err = cfg
            .fill(Signal::Scores(&[1.0]), &mut Window::new(&mut data[..], 2, 0))
            .unwrap_err();
        assert_eq!(err, StrategyError::Pdf(Error::BadRange));
    }

    #[test]
    fn argmax_prefers_the_first_tie_and_handles_empty() {
        assert_eq!(argmax(&[0.25f32, 0.5, 0.5]).unwrap(), Some(1));
        let empty: [f32; 0] = [];
        assert_eq!(argmax(&empty).unwrap(), None);
        let data = [1.0f32];
        assert_eq!(argmax(&Window::new(&data[..], 1, 0)), Err(Error::BadRange));
    }
}
