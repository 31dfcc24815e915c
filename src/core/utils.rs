use num_traits::{PrimInt, Signed};

#[derive(Debug)]
pub struct BetweenIterator<T, const N: usize> {
    current: [T; N],
    step: [T; N],
    remaining: T,
}

impl<T: PrimInt + Signed, const N: usize> Iterator for BetweenIterator<T, N> {
    type Item = [T; N];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= T::one() {
            return None;
        }
        self.remaining = self.remaining - T::one();
        for (coord, step) in self.current.iter_mut().zip(self.step) {
            *coord = *coord + step;
        }
        Some(self.current)
    }
}

/// Squares strictly between `from` and `to`, walking the unit direction of
/// their difference. Only meaningful when the two lie on a straight or
/// diagonal line.
pub fn between<T: PrimInt + Signed, const N: usize>(from: [T; N], to: [T; N]) -> BetweenIterator<T, N> {
    let (step, remaining) = normalise(difference(from, to));
    BetweenIterator {
        current: from,
        step,
        remaining,
    }
}

pub fn difference<T: PrimInt + Signed, const N: usize>(from: [T; N], to: [T; N]) -> [T; N] {
    let mut diff = to;
    for (d, f) in diff.iter_mut().zip(from) {
        *d = *d - f;
    }
    diff
}

/// Splits a displacement into its per-axis unit direction and the number of
/// steps along the longest axis.
pub fn normalise<T: PrimInt + Signed, const N: usize>(delta: [T; N]) -> ([T; N], T) {
    let unit = delta.map(|d| d.signum());
    let steps = delta
        .iter()
        .map(|d| d.abs())
        .max()
        .unwrap_or_else(T::zero);
    (unit, steps)
}

/// Displacement along at most one axis.
pub fn is_in_straight_line<T: PrimInt + Signed, const N: usize>(delta: [T; N]) -> bool {
    delta.iter().filter(|d| !d.is_zero()).count() <= 1
}

/// Displacement with equal, non-zero magnitude on every axis that moves, and at least two moving axes.
pub fn is_in_diagonal_line<T: PrimInt + Signed, const N: usize>(delta: [T; N]) -> bool {
    let mut moving = delta.iter().filter(|d| !d.is_zero()).map(|d| d.abs());
    match moving.next() {
        Some(first) => {
            let rest: Vec<T> = moving.collect();
            !rest.is_empty() && rest.iter().all(|&d| d == first)
        }
        None => false,
    }
}

/// Chebyshev distance between two squares.
pub fn distance<T: PrimInt + Signed, const N: usize>(from: [T; N], to: [T; N]) -> T {
    normalise(difference(from, to)).1
}
