use core::ffi::c_int;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    ptr, slice,
};

pub mod utilities;
pub use utilities::{
    Cluster, ClusterError, ClusterGroup, ClusterOptions, ClusterReport, KMeansResult, Point,
    PointSet, RunSummary, Tolerance,
};
use utilities::{kmeans::kmeans as kmeans_rs, validation::validate_max_steps};

pub const OK: c_int = 0;
pub const ERR_INVALID_ARGS: c_int = 1;
pub const ERR_PANIC: c_int = 2;
pub const ERR_PARSE: c_int = 4;

#[repr(C)]
pub struct Buf {
    pub ptr: *mut u8,
    pub len: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CClusterOptions {
    pub k: c_int,
    pub max_steps: c_int,
    pub rtol: f64,
    pub atol: f64,
    pub rng_seed: u64,
    pub verbose: c_int,
}

#[cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]
#[link(wasm_import_module = "env")]
unsafe extern "C" {
    fn js_log(ptr: *const u8, len: usize);
}

#[inline]
pub fn log_json<T: serde::Serialize>(v: &T) {
    if let Ok(s) = serde_json::to_string_pretty(v) {
        #[cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]
        unsafe {
            js_log(s.as_ptr(), s.len());
        }

        #[cfg(not(all(target_arch = "wasm32", not(target_os = "wasi"))))]
        eprintln!("{s}");
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn alloc(size: usize) -> *mut u8 {
    if size == 0 {
        return core::ptr::null_mut();
    }
    let mut v = Vec::<u8>::with_capacity(size);
    let p = v.as_mut_ptr();
    core::mem::forget(v);
    p
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_(ptr_raw: *mut u8, size: usize) {
    if !ptr_raw.is_null() {
        let _ = unsafe { Vec::<u8>::from_raw_parts(ptr_raw, size, size) };
    }
}

/// Clusters `n_points` row-major points of length `dimension` and writes the
/// result as JSON into `out_json`. `seeds_ptr` may be null for random seeding.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kmeans(
    data_ptr: *const f64,
    n_points: usize,
    dimension: usize,
    seeds_ptr: *const u32,
    n_seeds: usize,
    options: *const CClusterOptions,
    out_json: *mut Buf,
) -> c_int {
    if data_ptr.is_null() || out_json.is_null() || n_points == 0 || dimension == 0 {
        return ERR_INVALID_ARGS;
    }
    let run = || -> Result<(), c_int> {
        let len = n_points
            .checked_mul(dimension)
            .ok_or(ERR_INVALID_ARGS)?;
        let flat = unsafe { slice::from_raw_parts(data_ptr, len) };
        let rows: Vec<&[f64]> = flat.chunks_exact(dimension).collect();
        let points = PointSet::with_contents(dimension, &rows).map_err(|e| error_code(&e))?;

        let seeds = if seeds_ptr.is_null() || n_seeds == 0 {
            None
        } else {
            let raw = unsafe { slice::from_raw_parts(seeds_ptr, n_seeds) };
            Some(raw.iter().map(|&i| i as usize).collect::<Vec<_>>())
        };
        let (opts, rng_seed, verbose) =
            build_cluster_options(options, seeds).map_err(|e| error_code(&e))?;

        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let result = kmeans_rs(&points, &opts, &mut rng).map_err(|e| error_code(&e))?;
        if verbose {
            log_json(&result);
        }
        let s = serde_json::to_string(&result).map_err(|_| ERR_PARSE)?;
        write_buf(out_json, s.into_bytes().into_boxed_slice());
        Ok(())
    };
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(())) => OK,
        Ok(Err(code)) => code,
        Err(_) => ERR_PANIC,
    }
}

// Flat rows always match `dimension` and bad seeds surface as construction
// errors, so every library error here is a caller argument problem.
fn error_code(e: &ClusterError) -> c_int {
    match e {
        ClusterError::Construction(_)
        | ClusterError::Argument(_)
        | ClusterError::Shape { .. }
        | ClusterError::Index { .. } => ERR_INVALID_ARGS,
    }
}

fn write_buf(out: *mut Buf, bytes: Box<[u8]>) {
    let len = bytes.len();
    let ptr_bytes = Box::into_raw(bytes) as *mut u8;
    unsafe {
        ptr::write_unaligned(
            out,
            Buf {
                ptr: ptr_bytes,
                len,
            },
        )
    };
}

#[inline]
fn non_negative_or(v: f64, def_: f64) -> f64 {
    if v.is_finite() && v >= 0.0 { v } else { def_ }
}

fn build_cluster_options(
    options: *const CClusterOptions,
    seeds: Option<Vec<usize>>,
) -> Result<(ClusterOptions, u64, bool), ClusterError> {
    let defaults = ClusterOptions::default();
    if options.is_null() {
        let k = seeds.as_ref().map_or(defaults.k, Vec::len);
        return Ok((
            ClusterOptions {
                k,
                seed_indices: seeds,
                ..defaults
            },
            0,
            false,
        ));
    }
    let o = unsafe { *options };
    // A non-positive k is rejected later as a construction error.
    let k = usize::try_from(o.k).unwrap_or(0);
    let max_steps = validate_max_steps(i64::from(o.max_steps))?;
    let tolerance = Tolerance {
        rtol: non_negative_or(o.rtol, defaults.tolerance.rtol),
        atol: non_negative_or(o.atol, defaults.tolerance.atol),
    };
    Ok((
        ClusterOptions {
            k,
            seed_indices: seeds,
            max_steps,
            tolerance,
        },
        o.rng_seed,
        o.verbose != 0,
    ))
}
