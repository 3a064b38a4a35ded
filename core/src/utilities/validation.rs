use crate::utilities::error::{ClusterError, Result};
use crate::utilities::structs::Tolerance;
use crate::utilities::utilities::first_non_finite;

pub fn validate_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(ClusterError::Construction(
            "dimension must be > 0".into(),
        ));
    }
    Ok(())
}

pub fn validate_shape(p: &[f64], dimension: usize) -> Result<()> {
    if p.len() != dimension {
        return Err(ClusterError::Shape {
            expected: dimension,
            actual: p.len(),
        });
    }
    Ok(())
}

pub fn validate_contents<P: AsRef<[f64]>>(contents: &[P], dimension: usize) -> Result<()> {
    if contents.is_empty() {
        return Err(ClusterError::Construction(
            "initial contents must not be empty".into(),
        ));
    }
    for (row, p) in contents.iter().enumerate() {
        let p = p.as_ref();
        if p.len() != dimension {
            return Err(ClusterError::Construction(format!(
                "row {row} has {} columns, expected {dimension}",
                p.len()
            )));
        }
        if let Some(col) = first_non_finite(p) {
            return Err(ClusterError::Construction(format!(
                "row {row} column {col} is not a finite number"
            )));
        }
    }
    Ok(())
}

pub fn validate_k(k: usize, size: usize) -> Result<()> {
    if k == 0 || k > size {
        return Err(ClusterError::Construction(format!(
            "k={k} must satisfy 0 < k <= {size}"
        )));
    }
    Ok(())
}

/// Seeds must name exactly `k` in-range points. Repeats are allowed.
pub fn validate_seed_indices(seeds: &[usize], k: usize, size: usize) -> Result<()> {
    if seeds.len() != k {
        return Err(ClusterError::Construction(format!(
            "expected {k} seed indices, got {}",
            seeds.len()
        )));
    }
    if let Some(&bad) = seeds.iter().find(|&&i| i >= size) {
        return Err(ClusterError::Construction(format!(
            "seed index {bad} out of range for size {size}"
        )));
    }
    Ok(())
}

pub fn validate_max_steps(max_steps: i64) -> Result<usize> {
    if max_steps < 0 {
        return Err(ClusterError::Argument(format!(
            "max_steps must be >= 0, got {max_steps}"
        )));
    }
    usize::try_from(max_steps)
        .map_err(|_| ClusterError::Argument(format!("max_steps {max_steps} is too large")))
}

pub fn validate_tolerance(tol: Tolerance) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if !ok(tol.rtol) || !ok(tol.atol) {
        return Err(ClusterError::Argument(format!(
            "tolerance must be finite and >= 0, got rtol={} atol={}",
            tol.rtol, tol.atol
        )));
    }
    Ok(())
}
