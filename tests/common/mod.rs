//! Common test utilities and helpers

use quickfns::UtilConfig;

/// Install the test subscriber so classifier tracing shows up with `--nocapture`
pub fn init_test_logging() {
    quickfns::logging::init_logging(2);
}

/// Config with tighter limits than the defaults
#[allow(dead_code)]
pub fn strict_config() -> anyhow::Result<UtilConfig> {
    let config = UtilConfig::from_toml_str(
        r#"
        [spam]
        max_country_code_len = 1
        area_min = 300
        area_max = 800
        repeat_run = 3

        [screen_time]
        daily_max = 8.0
        window_len = 2
        window_avg = 6.0
        overall_avg = 4.0
        "#,
    )?;
    Ok(config)
}

/// Format a labelled failure for table rows
pub fn row_label<T: std::fmt::Debug>(index: usize, input: &T) -> String {
    format!("row {} failed for input {:?}", index, input)
}
