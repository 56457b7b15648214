//! Bag exploration: a distribution from ensemble vote counts.

use crate::{BufferMut, Error, Source};

/// Fill `pdf` with `votes[i] / sum(votes)`.
///
/// `votes[i]` is typically the number of ensemble members whose top action is `i`.
///
/// - The total is accumulated first and each count divided once at the end.
/// - With no votes at all, action 0 receives probability 1 and every other position 0.
/// - Otherwise only the first `min(M, N)` positions are written; pdf positions past
///   the end of `votes` keep whatever they held.
///
/// # Errors
///
/// - [`Error::BadRange`] if either declared range is inverted.
/// - [`Error::EmptyPdf`] if the pdf has no positions (an empty `votes` is fine).
///
/// # Example
///
/// ```rust
/// use explore::generate_bag;
///
/// let mut pdf = [0.0f32; 3];
/// generate_bag(&[3u32, 1, 0], &mut pdf).unwrap();
/// assert_eq!(pdf, [0.75, 0.25, 0.0]);
/// ```
pub fn generate_bag<V, P>(votes: &V, pdf: &mut P) -> Result<(), Error>
where
    V: Source<u32> + ?Sized,
    P: BufferMut<f32> + ?Sized,
{
    let votes = votes.values()?;
    let pdf = pdf.checked_mut()?;
    if pdf.is_empty() {
        return Err(Error::EmptyPdf);
    }

    let total: u64 = votes.clone().map(u64::from).sum();
    if total == 0 {
        log::trace!("bag: no votes across {} actions, defaulting to action 0", pdf.len());
        pdf.fill(0.0);
        pdf[0] = 1.0;
        return Ok(());
    }

    let total = total as f32;
    for (d, v) in pdf.iter_mut().zip(votes) {
        *d = v as f32 / total;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Seq, Window};
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn no_votes_defaults_to_first_action() {
        let mut pdf = [0.3f32; 5];
        generate_bag(&[0u32; 5], &mut pdf).unwrap();
        assert_eq!(pdf, [1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_votes_defaults_to_first_action() {
        let votes: Vec<u32> = Vec::new();
        let mut pdf = vec![0.5f32; 2];
        generate_bag(&votes, &mut pdf).unwrap();
        assert_eq!(pdf, [1.0, 0.0]);
    }

    #[test]
    fn votes_are_normalized() {
        let mut pdf = vec![0.0f32; 3];
        generate_bag(&[3u32, 1, 0], &mut pdf).unwrap();
        assert_eq!(pdf, [0.75, 0.25, 0.0]);
    }

    #[test]
    fn short_votes_leave_the_tail_untouched() {
        let mut pdf = [0.0f32, 0.0, 0.0, 0.42];
        generate_bag(&[1u32, 1, 2], &mut pdf).unwrap();
        assert_eq!(pdf, [0.25, 0.25, 0.5, 0.42]);
    }

    #[test]
    fn long_votes_are_truncated_but_counted() {
        let mut pdf = [0.0f32; 2];
        generate_bag(&[1u32, 1, 2], &mut pdf).unwrap();
        assert_eq!(pdf, [0.25, 0.25]);
    }

    #[test]
    fn votes_from_a_deque_or_iterator() {
        let deque: VecDeque<u32> = [2u32, 0, 6].into_iter().collect();
        let mut a = [0.0f32; 3];
        generate_bag(&deque, &mut a).unwrap();
        assert_eq!(a, [0.25, 0.0, 0.75]);

        // One vote per ensemble member's top action, tallied lazily.
        let tops = [1usize, 1, 0, 1];
        let tally = (0..3).map(|a| tops.iter().filter(|&&t| t == a).count() as u32);
        let mut b = [0.0f32; 3];
        generate_bag(&Seq(tally), &mut b).unwrap();
        assert_eq!(b, [0.25, 0.75, 0.0]);
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let mut pdf = [0.0f32; 2];
        generate_bag(&[u32::MAX, u32::MAX], &mut pdf).unwrap();
        assert_eq!(pdf, [0.5, 0.5]);
    }

    #[test]
    fn empty_pdf_is_rejected() {
        let mut pdf: [f32; 0] = [];
        assert_eq!(generate_bag(&[1u32, 2], &mut pdf), Err(Error::EmptyPdf));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut data = [0.0f32; 3];
        let r = generate_bag(&[1u32], &mut Window::new(&mut data[..], 2, 1));
        assert_eq!(r, Err(Error::BadRange));

        let votes = [1u32, 2, 3];
        let r = generate_bag(&Window::new(&votes[..], 3, 1), &mut data);
        assert_eq!(r, Err(Error::BadRange));
        assert_eq!(data, [0.0; 3]);
    }

    proptest! {
        #[test]
        fn bag_is_a_distribution_when_lengths_match(
            votes in proptest::collection::vec(0u32..1000, 1..32),
        ) {
            let mut pdf = vec![0.0f32; votes.len()];
            generate_bag(&votes, &mut pdf).unwrap();
            let s: f32 = pdf.iter().sum();
            prop_assert!((s - 1.0).abs() < 1e-4, "sum={}", s);
            for (&p, &v) in pdf.iter().zip(&votes) {
                prop_assert!(p >= 0.0);
                if v == 0 && votes.iter().any(|&x| x > 0) {
                    prop_assert_eq!(p, 0.0);
                }
            }
        }
    }
}
