use lloyd::{
    Buf, CClusterOptions, ERR_INVALID_ARGS, KMeansResult, OK, free_, kmeans,
};

fn call(
    data: &[f64],
    n_points: usize,
    dimension: usize,
    seeds: Option<&[u32]>,
    options: Option<&CClusterOptions>,
) -> (i32, Option<KMeansResult>) {
    let mut out = Buf {
        ptr: std::ptr::null_mut(),
        len: 0,
    };
    let (seeds_ptr, n_seeds) = match seeds {
        Some(s) => (s.as_ptr(), s.len()),
        None => (std::ptr::null(), 0),
    };
    let opts_ptr = options.map_or(std::ptr::null(), |o| o as *const CClusterOptions);
    let code = unsafe {
        kmeans(
            data.as_ptr(),
            n_points,
            dimension,
            seeds_ptr,
            n_seeds,
            opts_ptr,
            &mut out,
        )
    };
    if code != OK {
        return (code, None);
    }
    let bytes = unsafe { std::slice::from_raw_parts(out.ptr, out.len) }.to_vec();
    unsafe { free_(out.ptr, out.len) };
    (code, Some(serde_json::from_slice(&bytes).unwrap()))
}

fn opts(k: i32, max_steps: i32) -> CClusterOptions {
    CClusterOptions {
        k,
        max_steps,
        rtol: 1e-5,
        atol: 1e-8,
        rng_seed: 42,
        verbose: 0,
    }
}

const LINE: [f64; 4] = [0.0, 0.0, 10.0, 10.0];

#[test]
fn seeded_line_without_options() {
    let (code, res) = call(&LINE, 4, 1, Some(&[0, 2][..]), None);
    assert_eq!(code, OK);
    let res = res.unwrap();
    assert!(res.converged);
    assert_eq!(res.steps, 1);
    assert_eq!(res.labels, vec![0, 0, 1, 1]);
    assert_eq!(res.clusters[1].centroid, vec![10.0]);
}

#[test]
fn random_seeding_with_options_is_reproducible() {
    let data: Vec<f64> = (0..40)
        .flat_map(|i| {
            let base = if i < 20 { 0.0 } else { 100.0 };
            [base + (i % 5) as f64, base - (i % 3) as f64]
        })
        .collect();
    let o = opts(2, 50);
    let (c1, a) = call(&data, 40, 2, None, Some(&o));
    let (c2, b) = call(&data, 40, 2, None, Some(&o));
    assert_eq!(c1, OK);
    assert_eq!(c2, OK);
    assert_eq!(a, b);
    let a = a.unwrap();
    assert!(a.converged);
    assert!(a.labels[..20].iter().all(|&l| l == a.labels[0]));
    assert!(a.labels[20..].iter().all(|&l| l == a.labels[20]));
    assert_ne!(a.labels[0], a.labels[20]);
}

#[test]
fn bad_arguments_map_to_status_codes() {
    let (code, _) = call(&LINE, 0, 1, None, None);
    assert_eq!(code, ERR_INVALID_ARGS);

    let (code, _) = call(&LINE, 4, 1, None, Some(&opts(2, -1)));
    assert_eq!(code, ERR_INVALID_ARGS);

    let (code, _) = call(&LINE, 4, 1, None, Some(&opts(0, 10)));
    assert_eq!(code, ERR_INVALID_ARGS);

    let (code, _) = call(&LINE, 4, 1, Some(&[0, 9][..]), Some(&opts(2, 10)));
    assert_eq!(code, ERR_INVALID_ARGS);

    let nan = [0.0, f64::NAN];
    let (code, _) = call(&nan, 2, 1, None, Some(&opts(1, 10)));
    assert_eq!(code, ERR_INVALID_ARGS);
}

#[test]
fn bad_tolerance_falls_back_to_default() {
    let mut o = opts(2, 10);
    o.rtol = f64::NAN;
    o.atol = -1.0;
    let (code, res) = call(&LINE, 4, 1, Some(&[0, 2][..]), Some(&o));
    assert_eq!(code, OK);
    assert!(res.unwrap().converged);
}

#[test]
fn contract_errors_all_report_invalid_args() {
    // Out-of-range seeds and a seed count that differs from k.
    let (code, _) = call(&LINE, 4, 1, Some(&[4, 0][..]), None);
    assert_eq!(code, ERR_INVALID_ARGS);
    let (code, _) = call(&LINE, 4, 1, Some(&[0, 1, 2][..]), Some(&opts(2, 10)));
    assert_eq!(code, ERR_INVALID_ARGS);
}

#[test]
fn huge_values_return_readable_json() {
    let data = [1e308, 1e308, -1e308];
    let (code, res) = call(&data, 3, 1, Some(&[0, 2][..]), None);
    assert_eq!(code, OK);
    let res = res.unwrap();
    assert_eq!(res.clusters[0].centroid, vec![1e308]);
    assert_eq!(res.clusters[1].centroid, vec![-1e308]);
}
