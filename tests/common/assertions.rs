//! Custom assertion macros with descriptive failure messages.

/// Assert that a run's stdout contains `needle`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.stdout.contains($needle),
            "Expected stdout to contain '{}'.\nOutput:\n{}",
            $needle,
            $result.combined_output()
        );
    };
}

/// Assert that the summary document in `env` contains `needle`.
#[macro_export]
macro_rules! assert_summary_contains {
    ($env:expr, $needle:expr) => {
        let summary = $env.read_summary();
        assert!(
            summary.contains($needle),
            "Expected RAILWAY_DEPLOYMENT_SUMMARY.md to contain '{}'.\nContent:\n{}",
            $needle,
            summary
        );
    };
}
