//! Integration tests for data directory resolution

use ncaa_points_plus::{
    cli::CommonArgs,
    commands::DataPaths,
    config::resolve_data_dir,
    Season, DATA_DIR_ENV_VAR,
};
use std::path::PathBuf;
use std::sync::Mutex;

// Tests in this file mutate the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_resolve_data_dir_from_flag() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, "/from/env");

    let dir = resolve_data_dir(Some(PathBuf::from("/from/flag"))).unwrap();
    assert_eq!(dir, PathBuf::from("/from/flag"));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_resolve_data_dir_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, "/from/env");

    let dir = resolve_data_dir(None).unwrap();
    assert_eq!(dir, PathBuf::from("/from/env"));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_blank_env_falls_through_to_cache_dir() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, "   ");

    // No cache dir on some CI hosts; either way the blank value is ignored.
    match resolve_data_dir(None) {
        Ok(dir) => assert!(dir.ends_with("ncaa-points-plus")),
        Err(e) => assert!(e.to_string().contains(DATA_DIR_ENV_VAR)),
    }

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_data_paths_resolve() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, "/srv/points-plus");

    let common = CommonArgs {
        season: Season::default(),
        data_dir: None,
        output_dir: None,
    };
    let paths = DataPaths::resolve(&common).unwrap();
    assert_eq!(paths.data_dir, PathBuf::from("/srv/points-plus"));
    assert_eq!(paths.output_dir, PathBuf::from("/srv/points-plus/output"));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}
