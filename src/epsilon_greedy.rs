//! Epsilon-greedy exploration.

use crate::{BufferMut, Error};

/// Fill `pdf` with an epsilon-greedy distribution around `top_action`.
///
/// Every action receives `epsilon / N`; `top_action` additionally receives `1 - epsilon`.
/// A `top_action` past the end is clamped to the last action rather than rejected.
///
/// `epsilon` is expected in `[0, 1]` and is not validated.
///
/// # Errors
///
/// - [`Error::BadRange`] if the pdf's declared range is inverted.
/// - [`Error::EmptyPdf`] if the pdf has no positions.
///
/// # Example
///
/// ```rust
/// use explore::generate_epsilon_greedy;
///
/// let mut pdf = vec![0.0f32; 4];
/// generate_epsilon_greedy(0.5, 1, &mut pdf).unwrap();
/// assert_eq!(pdf, [0.125, 0.625, 0.125, 0.125]);
/// ```
pub fn generate_epsilon_greedy<P>(epsilon: f32, top_action: u32, pdf: &mut P) -> Result<(), Error>
where
    P: BufferMut<f32> + ?Sized,
{
    let pdf = pdf.checked_mut()?;
    let n = pdf.len();
    if n == 0 {
        return Err(Error::EmptyPdf);
    }

    let mut top = top_action as usize;
    if top >= n {
        log::trace!("epsilon-greedy: top action {top} out of range, clamping to {}", n - 1);
        top = n - 1;
    }

    let prob = epsilon / n as f32;
    pdf.fill(prob);
    pdf[top] += 1.0 - epsilon;
    Ok(())
}
