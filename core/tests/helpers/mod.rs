// tests/helpers/mod.rs
use lloyd::Point;

/// Small deterministic wiggle in [-0.5, 0.5] you can use as repeatable “noise”.
#[allow(dead_code)]
pub fn jitter(i: u32) -> f64 {
    let mut x = i.wrapping_mul(1664525).wrapping_add(1013904223);
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    (x as f64 / (u32::MAX as f64)) - 0.5
}

/// Check two numbers are close within a simple absolute tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[allow(dead_code)]
pub fn approx_point(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tol))
}

/// Tight blobs of `per` points around each center, laid out blob by blob.
/// Returns the points and the index set of every blob.
#[allow(dead_code)]
pub fn blobs(centers: &[Point], per: usize, spread: f64) -> (Vec<Point>, Vec<Vec<usize>>) {
    let mut points = Vec::with_capacity(centers.len() * per);
    let mut groups = Vec::with_capacity(centers.len());
    let mut salt = 0u32;
    for c in centers {
        let mut idx = Vec::with_capacity(per);
        for _ in 0..per {
            let p: Point = c
                .iter()
                .map(|&v| {
                    salt = salt.wrapping_add(1);
                    v + spread * jitter(salt)
                })
                .collect();
            idx.push(points.len());
            points.push(p);
        }
        groups.push(idx);
    }
    (points, groups)
}

// Deterministic uniform points in [lo, hi]^dim
#[allow(dead_code)]
pub fn uniform_points(n: usize, dim: usize, lo: f64, hi: f64, seed: u64) -> Vec<Point> {
    assert!(hi > lo);
    let mut out = Vec::with_capacity(n);
    let mut s = seed | 1; // odd
    for _ in 0..n {
        let mut p = Vec::with_capacity(dim);
        for _ in 0..dim {
            s = s
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let u = ((s >> 11) as f64) * (1.0 / (1u64 << 53) as f64);
            p.push(lo + (hi - lo) * u);
        }
        out.push(p);
    }
    out
}

// Deterministic shuffle (Fisher–Yates)
#[allow(dead_code)]
pub fn shuffle_with_seed<T>(xs: &mut [T], seed: u64) {
    let mut s = seed | 1;
    let n = xs.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        s = s
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let u = ((s >> 11) as f64) * (1.0 / (1u64 << 53) as f64);
        let j = (u * ((i + 1) as f64)).floor() as usize;
        xs.swap(i, j);
    }
}

/// Every index in `0..n` appears in exactly one membership.
#[allow(dead_code)]
pub fn is_partition(memberships: &[&[usize]], n: usize) -> bool {
    let mut seen = vec![0u32; n];
    for m in memberships {
        for &i in *m {
            if i >= n {
                return false;
            }
            seen[i] += 1;
        }
    }
    seen.iter().all(|&c| c == 1)
}

#[allow(dead_code)]
pub fn sorted(xs: &[usize]) -> Vec<usize> {
    let mut v = xs.to_vec();
    v.sort_unstable();
    v
}
