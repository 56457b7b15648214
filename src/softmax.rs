//! Softmax exploration over continuous scores.

use crate::{BufferMut, Error, Source};

/// Fill `pdf` with `softmax(lambda * scores)`.
///
/// - Uses the max-trick (`exp(lambda * (s - max))`) so large scores cannot overflow.
/// - Two passes: exponentiate into `pdf`, then divide by the accumulated sum.
/// - If `scores` and `pdf` differ in length, only the first `min(M, N)` positions are
///   used and every pdf position past that overlap is set to `0`.
/// - `lambda = 0` yields a uniform distribution over the overlap.
///
/// `scores` only needs to be traversable ([`Source`]): slices, `Vec`, `VecDeque`,
/// arrays, windows, or an iterator wrapped in [`Seq`](crate::Seq).
///
/// # Errors
///
/// - [`Error::BadRange`] if either declared range is inverted.
/// - [`Error::EmptyPdf`] if the overlap is empty.
///
/// # Example
///
/// ```rust
/// use explore::generate_softmax;
///
/// let scores = [1.0f32, 1.0];
/// let mut pdf = [0.0f32; 4];
/// generate_softmax(3.0, &scores, &mut pdf).unwrap();
/// assert_eq!(pdf, [0.5, 0.5, 0.0, 0.0]);
/// ```
pub fn generate_softmax<S, P>(lambda: f32, scores: &S, pdf: &mut P) -> Result<(), Error>
where
    S: Source<f32> + ?Sized,
    P: BufferMut<f32> + ?Sized,
{
    let num_scores = scores.bounds().len()?;
    let values = scores.values()?;
    let pdf = pdf.checked_mut()?;

    let overlap = num_scores.min(pdf.len());
    if overlap == 0 {
        return Err(Error::EmptyPdf);
    }
    if num_scores != pdf.len() {
        log::trace!(
            "softmax: {num_scores} scores for {} actions, truncating to {overlap}",
            pdf.len()
        );
    }

    let (head, tail) = pdf.split_at_mut(overlap);
    tail.fill(0.0);

    let max_score = values
        .clone()
        .take(overlap)
        .fold(f32::NEG_INFINITY, f32::max);

    let mut norm = 0.0f32;
    for (d, s) in head.iter_mut().zip(values) {
        let w = (lambda * (s - max_score)).exp();
        norm += w;
        *d = w;
    }
    for d in head.iter_mut() {
        *d /= norm;
    }
    Ok(())
}
