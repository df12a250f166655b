//! Multistroke → unistroke template expansion.
//!
//! A gesture of M strokes is drawn in any stroke order and any stroke may be
//! drawn backwards. Learning therefore enumerates all M! orders (Heap's
//! algorithm, iterative) times all 2^M reversal masks, concatenates each
//! variant into one path and turns it into a `Template`. Nothing is pruned or
//! deduplicated: M!·2^M templates per gesture (2, 8, 48, 384 for M = 1..4), so
//! `RecognizerCfg::max_strokes` bounds M.

use crate::cfg::RecognizerCfg;
use crate::error::GestureError;
use crate::geom::{check_strokes, Point, Stroke};
use crate::normalize::normalize;
use crate::vectorize::Template;

/// All permutations of `0..n` by successive swaps (Heap's algorithm).
///
/// Yields the identity first; enumeration order is otherwise unspecified.
#[derive(Clone, Debug)]
pub struct Permutations {
    order: Vec<usize>,
    counters: Vec<usize>,
    i: usize,
    first: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
            counters: vec![0; n],
            i: 1,
            first: n > 0,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.first {
            self.first = false;
            return Some(self.order.clone());
        }
        let n = self.order.len();
        while self.i < n {
            let i = self.i;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.order.swap(0, i);
                } else {
                    self.order.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.i = 1;
                return Some(self.order.clone());
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }
}

/// M!·2^M, or `None` when it overflows `usize`.
pub fn template_count(m: usize) -> Option<usize> {
    let reversals = 1usize.checked_shl(u32::try_from(m).ok()?)?;
    (2..=m).try_fold(reversals, |acc, k| acc.checked_mul(k))
}

/// Concatenation of `strokes` taken in `order`, stroke `order[i]` reversed when
/// bit `i` of `mask` is set.
pub fn unistroke(strokes: &[Stroke], order: &[usize], mask: usize) -> Vec<Point> {
    let total = order.iter().map(|&k| strokes[k].len()).sum();
    let mut path = Vec::with_capacity(total);
    for (i, &k) in order.iter().enumerate() {
        let pts = strokes[k].points();
        if (mask >> i) & 1 == 1 {
            path.extend(pts.iter().rev());
        } else {
            path.extend_from_slice(pts);
        }
    }
    path
}

/// Every order × direction variant of `strokes` as a single path.
pub fn unistrokes(strokes: &[Stroke]) -> impl Iterator<Item = Vec<Point>> + '_ {
    let m = strokes.len();
    Permutations::new(m).flat_map(move |order| {
        (0..(1usize << m)).map(move |mask| unistroke(strokes, &order, mask))
    })
}

/// Expand a validated stroke set into its full template set.
///
/// Stroke sets above `cfg.max_strokes` are rejected before anything is allocated.
pub fn expand(strokes: &[Stroke], cfg: &RecognizerCfg) -> Result<Vec<Template>, GestureError> {
    check_strokes(strokes)?;
    let too_many = GestureError::TooManyStrokes {
        count: strokes.len(),
        max: cfg.max_strokes,
    };
    if strokes.len() > cfg.max_strokes {
        return Err(too_many);
    }
    let count = template_count(strokes.len()).ok_or(too_many)?;
    let mut templates = Vec::with_capacity(count);
    for path in unistrokes(strokes) {
        let pts = normalize(&path, cfg)?;
        templates.push(Template::from_normalized(&pts, cfg)?);
    }
    debug_assert_eq!(templates.len(), count);
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn permutations_are_complete_and_distinct() {
        for (n, expected) in [(1usize, 1usize), (2, 2), (3, 6), (4, 24), (5, 120)] {
            let perms: Vec<Vec<usize>> = Permutations::new(n).collect();
            assert_eq!(perms.len(), expected);
            let distinct: HashSet<Vec<usize>> = perms.iter().cloned().collect();
            assert_eq!(distinct.len(), expected);
            assert_eq!(perms[0], (0..n).collect::<Vec<_>>());
        }
        assert_eq!(Permutations::new(0).count(), 0);
    }

    #[test]
    fn template_count_formula() {
        assert_eq!(template_count(1), Some(2));
        assert_eq!(template_count(2), Some(8));
        assert_eq!(template_count(3), Some(48));
        assert_eq!(template_count(4), Some(384));
        assert_eq!(template_count(64), None);
        assert_eq!(template_count(40), None);
    }

    #[test]
    fn unistroke_reverses_masked_strokes() {
        let a = Stroke::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = Stroke::from_xy(&[(5.0, 5.0), (5.0, 6.0), (5.0, 7.0)]);
        let strokes = vec![a, b];
        let path = unistroke(&strokes, &[1, 0], 0b01);
        let xy: Vec<(f64, f64)> = path.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            xy,
            vec![(5.0, 7.0), (5.0, 6.0), (5.0, 5.0), (0.0, 0.0), (1.0, 0.0)]
        );
    }

    #[test]
    fn expansion_cardinality() {
        let cfg = RecognizerCfg::default();
        let strokes = vec![
            Stroke::from_xy(&[(0.0, 0.0), (100.0, 0.0)]),
            Stroke::from_xy(&[(50.0, -50.0), (50.0, 50.0)]),
            Stroke::from_xy(&[(0.0, 80.0), (100.0, 90.0)]),
        ];
        for m in 1..=3 {
            let t = expand(&strokes[..m], &cfg).unwrap();
            assert_eq!(t.len(), template_count(m).unwrap());
        }
        let variants: Vec<Vec<Point>> = unistrokes(&strokes[..2]).collect();
        assert_eq!(variants.len(), 8);
    }

    #[test]
    fn expand_rejects_bad_input() {
        let cfg = RecognizerCfg::default();
        assert_eq!(expand(&[], &cfg), Err(GestureError::EmptyStrokes));
        let dot = Stroke::from_xy(&[(1.0, 1.0)]);
        assert!(matches!(
            expand(&[dot], &cfg),
            Err(GestureError::ShortStroke { index: 0, len: 1 })
        ));
        let still = Stroke::from_xy(&[(1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(expand(&[still], &cfg), Err(GestureError::DegeneratePath));
    }

    #[test]
    fn stroke_count_above_cap_is_rejected() {
        let cfg = RecognizerCfg::default();
        let strokes: Vec<Stroke> = (0..10)
            .map(|k| Stroke::from_xy(&[(0.0, k as f64 * 10.0), (100.0, k as f64 * 10.0)]))
            .collect();
        assert_eq!(
            expand(&strokes, &cfg),
            Err(GestureError::TooManyStrokes { count: 10, max: 5 })
        );
        let tight = RecognizerCfg {
            max_strokes: 1,
            ..cfg
        };
        assert!(expand(&strokes[..1], &tight).is_ok());
        assert!(matches!(
            expand(&strokes[..2], &tight),
            Err(GestureError::TooManyStrokes { count: 2, max: 1 })
        ));
    }
}
