use crate::genome::Gene;

/// Single point crossover. The first child takes `l` up to `point` then `r` after it, the
/// second child the reverse. `point` may be anywhere from 0 to the gene length.
pub fn crossover(l: &[f64], r: &[f64], point: usize) -> (Gene, Gene) {
    debug_assert_eq!(l.len(), r.len(), "crossover of unequal genes");
    let splice = |head: &[f64], tail: &[f64]| {
        let mut child = Vec::with_capacity(tail.len());
        child.extend_from_slice(&head[..point]);
        child.extend_from_slice(&tail[point..]);
        child
    };
    (splice(l, r), splice(r, l))
}
