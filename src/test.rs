/// Check for equality between two components within the tolerance the
/// conversion matrices hold round trips to.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1e-5);
    }};
}
