use crate::utilities::structs::{Point, Tolerance};

/// Only the common prefix is compared when lengths differ.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let mut s = 0.0;
    for (x, y) in a.iter().zip(b) {
        let d = x - y;
        s += d * d;
    }
    s.sqrt()
}

/// Coordinate-wise mean. `ps` must be non-empty and rectangular.
/// Terms are scaled by `1/n` before summing, so partial sums stay within the
/// largest component magnitude.
pub fn mean<P: AsRef<[f64]>>(ps: &[P]) -> Point {
    let d = ps[0].as_ref().len();
    let n = ps.len() as f64;
    let mut m = vec![0.0; d];
    for p in ps {
        for (acc, &v) in m.iter_mut().zip(p.as_ref()) {
            *acc += v / n;
        }
    }
    m
}

#[inline]
pub fn all_close(new: &[f64], old: &[f64], tol: Tolerance) -> bool {
    new.len() == old.len()
        && new
            .iter()
            .zip(old)
            .all(|(&a, &b)| (a - b).abs() <= tol.atol + tol.rtol * b.abs())
}

#[inline]
pub fn first_non_finite(p: &[f64]) -> Option<usize> {
    p.iter().position(|v| !v.is_finite())
}
