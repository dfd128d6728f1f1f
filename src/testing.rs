#[cfg(test)]
macro_rules! assert_approx_eq {
    ($x:expr, $y:expr, $d:expr) => {{
        let (x, y, d) = ($x as f64, $y as f64, $d as f64);
        if (x - y).abs() >= d {
            panic!(
                "assertion failed: `(left !== right)` \
                 (left: `{:?}`, right: `{:?}`, tolerance: `{:?}`)",
                x, y, d
            );
        }
    }};
}

#[cfg(test)]
pub(crate) use assert_approx_eq;
