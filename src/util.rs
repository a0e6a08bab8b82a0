/// Asserts in debug builds that a numerical value is in the provided interval `[a,b]`
/// and panics with a helpful message if not
///
/// Release builds skip the check, so an out-of-range value is a caller error
/// rather than a handled condition.
///
/// ### Example
/// ```should_panic
/// # use qrl::debug_assert_interval;
/// let alpha = 2.0;
/// debug_assert_interval!(alpha, 0.0, 1.0);
/// ```
/// This will panic with the message "Invalid value for \`alpha\`. Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! debug_assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        debug_assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn interval_accepts_bounds() {
        let value = 1.0;
        debug_assert_interval!(value, 0.0, 1.0);
        let value = 0.0;
        debug_assert_interval!(value, 0.0, 1.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid value for `value`")]
    fn interval_rejects_outside() {
        let value = 1.5;
        debug_assert_interval!(value, 0.0, 1.0);
    }
}
