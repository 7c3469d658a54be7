/// Asserts that two floating-point values differ by no more than the
/// given tolerance.
pub fn assert_close(a: f32, b: f32, tolerance: f32) {
    if (a - b).abs() > tolerance {
        panic!(
            "assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`",
            a, b
        );
    }
}

#[cfg(test)]
mod tests {
    use super::assert_close;

    #[test]
    fn close_values_pass() {
        assert_close(1.0, 1.0000001, 1e-5);
    }

    #[test]
    #[should_panic(expected = "left ~= right")]
    fn distant_values_panic() {
        assert_close(1.0, 1.1, 1e-5);
    }
}
