mod common;

use std::io::Write;

use common::{setup_sales_df, setup_test_df};
use grouptab::config::CONFIG_ENV;
use grouptab::error::{Error, Result};
use grouptab::groupby::builtins::CumulativeSum;
use grouptab::{DisplayConfig, GroupConfig, GroupedDataFrame, ParallelConfig};

#[test]
fn test_config_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "[parallel]\nenabled = false\nmin_groups = 16\nmax_threads = 2\n\n[display]\nmax_groups = 4"
    )?;

    let config = GroupConfig::from_file(file.path())?;
    assert!(!config.parallel.enabled);
    assert_eq!(config.parallel.min_groups, 16);
    assert_eq!(config.parallel.max_threads, Some(2));
    assert_eq!(config.display.max_groups, 4);
    assert_eq!(
        config.display.max_rows_per_group,
        DisplayConfig::default().max_rows_per_group
    );

    Ok(())
}

#[test]
fn test_config_errors() -> Result<()> {
    assert!(matches!(
        GroupConfig::from_file("/nonexistent/grouptab.toml"),
        Err(Error::Io(_))
    ));
    assert!(matches!(
        GroupConfig::from_toml_str("[parallel]\nmin_groups = \"many\""),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        GroupConfig::from_toml_str("[display]\nmax_groups = 0"),
        Err(Error::Config(_))
    ));

    Ok(())
}

#[test]
fn test_config_round_trip() -> Result<()> {
    let config = GroupConfig::new()
        .with_parallel(ParallelConfig::new().with_max_threads(3))
        .with_display(DisplayConfig {
            max_groups: 1,
            max_rows_per_group: 2,
            max_rows: 3,
        });

    let text = config.to_toml_string()?;
    assert_eq!(GroupConfig::from_toml_str(&text)?, config);

    Ok(())
}

#[test]
fn test_config_from_env() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("grouptab.toml");
    std::fs::write(&path, "[parallel]\nmin_groups = 7\n")?;

    std::env::set_var(CONFIG_ENV, &path);
    let loaded = GroupConfig::from_env();
    std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
    let fallback = GroupConfig::from_env();
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(loaded.parallel.min_groups, 7);
    assert_eq!(fallback, GroupConfig::default());

    Ok(())
}

#[test]
fn test_parallel_thresholds() {
    let config = ParallelConfig::new().with_min_groups(10).with_max_threads(4);
    assert!(!config.should_parallelize(9));
    assert!(config.should_parallelize(10));

    assert!(!ParallelConfig::sequential().should_parallelize(1_000));
    assert!(!ParallelConfig::new()
        .with_min_groups(1)
        .with_max_threads(1)
        .should_parallelize(1_000));
}

#[test]
fn test_grouped_frame_carries_config() -> Result<()> {
    let config = GroupConfig::new().with_parallel(ParallelConfig::sequential());
    let grouped = GroupedDataFrame::with_config(setup_sales_df()?, ["group"], config.clone())?;

    assert_eq!(grouped.config(), &config);
    assert_eq!(grouped.subset(["group", "value"])?.config(), &config);
    assert_eq!(grouped.group(["price"])?.config(), &config);
    assert_eq!(
        grouped
            .modify(&CumulativeSum, "running", ["value"])?
            .config(),
        &config
    );

    let reset = setup_test_df()?.group_by(["a"])?.set_config(config.clone());
    assert_eq!(reset.config(), &config);

    Ok(())
}
