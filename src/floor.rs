//! Minimum-probability enforcement (exploration floor).
//!
//! A generator may hand back a distribution that starves some actions; downstream
//! learners that reweight by `1 / p` need every eligible action to keep a little
//! mass. [`enforce_minimum_probability`] raises every eligible entry to
//! `min_prob / N` and shrinks the rest proportionally.
//!
//! "Eligible" means `p > 0`, or any entry when `update_zero_elements` is set.
//! Zero is detected by exact comparison with `0.0`: a value that should have been
//! zero but carries rounding noise counts as a positive entry.

use crate::{BufferMut, Error};

/// Floors above this are treated as a request for uniform exploration.
const UNIFORM_THRESHOLD: f32 = 0.999;

/// Touched mass above this means the raised entries alone exhaust the budget.
const OVERFLOW_THRESHOLD: f32 = 0.999;

#[inline]
fn eligible(p: f32, update_zero_elements: bool) -> bool {
    p > 0.0 || (p == 0.0 && update_zero_elements)
}

/// Guarantee every eligible action at least `min_prob / N` probability.
///
/// - `min_prob > 0.999`: every eligible entry becomes `1 / support`, where `support`
///   is `N` with `update_zero_elements`, else the number of non-zero entries.
///   Ineligible entries stay `0`.
/// - Otherwise, each eligible entry `<= min_prob / N` is raised to that floor and the
///   entries above it are scaled by `(1 - touched) / untouched` so the total stays 1.
///   Entries are not re-checked after scaling, so one sitting just above the floor
///   can end up slightly below it.
/// - If the raised entries alone carry more than 0.999 of the mass, the floor is
///   recomputed as `(1 - untouched) / touched_count` and re-applied instead.
/// - If nothing needed raising, `pdf` is left as is.
///
/// Applying the same floor twice is a no-op only when the first pass leaves every
/// eligible entry at or above `min_prob / N`; an entry scaled below the floor is
/// raised by the second pass.
///
/// `min_prob` is not validated; a floor `<= 0` never raises anything.
///
/// # Errors
///
/// - [`Error::BadRange`] if the pdf's declared range is inverted.
/// - [`Error::EmptyPdf`] if the pdf has no positions.
///
/// # Example
///
/// ```rust
/// use explore::enforce_minimum_probability;
///
/// let mut pdf = [1.0f32, 0.0, 0.0, 0.0];
/// enforce_minimum_probability(1.0, true, &mut pdf).unwrap();
/// assert_eq!(pdf, [0.25; 4]);
///
/// let mut pdf = [1.0f32, 0.0, 0.0, 0.0];
/// enforce_minimum_probability(1.0, false, &mut pdf).unwrap();
/// assert_eq!(pdf, [1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn enforce_minimum_probability<P>(
    min_prob: f32,
    update_zero_elements: bool,
    pdf: &mut P,
) -> Result<(), Error>
where
    P: BufferMut<f32> + ?Sized,
{
    let pdf = pdf.checked_mut()?;
    let n = pdf.len();
    if n == 0 {
        return Err(Error::EmptyPdf);
    }

    if min_prob > UNIFORM_THRESHOLD {
        let support = if update_zero_elements {
            n
        } else {
            n - pdf.iter().filter(|&&p| p == 0.0).count()
        };
        log::trace!("floor: min_prob {min_prob} forces uniform over {support} of {n} actions");
        let uniform = 1.0 / support as f32;
        for p in pdf.iter_mut() {
            if update_zero_elements || *p > 0.0 {
                *p = uniform;
            }
        }
        return Ok(());
    }

    let mut floor = min_prob / n as f32;
    let mut touched_mass = 0.0f32;
    let mut untouched_mass = 0.0f32;
    let mut touched = 0usize;

    for p in pdf.iter_mut() {
        if eligible(*p, update_zero_elements) && *p <= floor {
            touched_mass += floor;
            *p = floor;
            touched += 1;
        } else {
            untouched_mass += *p;
        }
    }

    if touched_mass <= 0.0 {
        return Ok(());
    }

    if touched_mass > OVERFLOW_THRESHOLD {
        floor = (1.0 - untouched_mass) / touched as f32;
        log::trace!("floor: {touched} raised entries exhaust the budget, refloor to {floor}");
        for p in pdf.iter_mut() {
            if eligible(*p, update_zero_elements) && *p <= floor {
                *p = floor;
            }
        }
    } else {
        let ratio = (1.0 - touched_mass) / untouched_mass;
        for p in pdf.iter_mut() {
            if *p > floor {
                *p *= ratio;
            }
        }
    }
    Ok(())
}
