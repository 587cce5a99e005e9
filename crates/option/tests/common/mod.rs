#![allow(dead_code)]

/// Routes `log` output from the crate into the test harness.
pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .parse_filters("option=trace")
        .try_init();
}
