//! Integration tests for build directory resolution against a real filesystem.
//!
//! Modification times are set explicitly so ordering never depends on how
//! fast the directories were created.

#![cfg(unix)]

use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use proptest::prelude::*;
use wrench_headless_core::{HeadlessError, PlatformKind, configure, resolve};

/// Create `<release>/build/<name>` with the given modification time.
fn make_dep(release: &Path, name: &str, modified: SystemTime) -> PathBuf {
    let dir = release.join("build").join(name);
    fs::create_dir_all(&dir).unwrap();
    File::open(&dir).unwrap().set_modified(modified).unwrap();
    dir
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

fn fake_release() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let release = tmp.path().join("target").join("release");
    fs::create_dir_all(&release).unwrap();
    (tmp, release)
}

#[test]
fn newest_osmesa_build_wins() {
    let (_tmp, release) = fake_release();
    make_dep(&release, "osmesa-src-20230101", at(1_672_531_200));
    let newer = make_dep(&release, "osmesa-src-20230615", at(1_686_787_200));

    let found = resolve("osmesa-src", &release.join("wrench")).unwrap();
    assert_eq!(found, Some(newer));
}

#[test]
fn newest_wins_regardless_of_name_order() {
    let (_tmp, release) = fake_release();
    let newer = make_dep(&release, "osmesa-src-0000", at(2_000));
    make_dep(&release, "osmesa-src-ffff", at(1_000));

    let found = resolve("osmesa-src", &release.join("wrench")).unwrap();
    assert_eq!(found, Some(newer));
}

#[test]
fn unrelated_packages_are_ignored() {
    let (_tmp, release) = fake_release();
    let osmesa = make_dep(&release, "osmesa-src-1", at(1_000));
    make_dep(&release, "servo-freetype-sys-2", at(9_000));
    make_dep(&release, "osmesa-sys-3", at(9_000));

    let found = resolve("osmesa-src", &release.join("wrench")).unwrap();
    assert_eq!(found, Some(osmesa));
}

#[test]
fn no_matches_resolves_to_none() {
    let (_tmp, release) = fake_release();
    make_dep(&release, "servo-freetype-sys-2", at(9_000));

    assert_eq!(resolve("osmesa-src", &release.join("wrench")).unwrap(), None);
}

#[test]
fn missing_build_dir_resolves_to_none() {
    let (_tmp, release) = fake_release();
    assert_eq!(resolve("osmesa-src", &release.join("wrench")).unwrap(), None);
}

#[test]
fn binary_need_not_exist() {
    let (_tmp, release) = fake_release();
    let dep = make_dep(&release, "osmesa-src-1", at(1_000));
    let binary = release.join("wrench");
    assert!(!binary.exists());

    assert_eq!(resolve("osmesa-src", &binary).unwrap(), Some(dep));
}

#[test]
fn working_directory_is_unchanged_after_resolve() {
    let before = std::env::current_dir().unwrap();

    let (_tmp, release) = fake_release();
    make_dep(&release, "osmesa-src-1", at(1_000));
    resolve("osmesa-src", &release.join("wrench")).unwrap();
    assert_eq!(std::env::current_dir().unwrap(), before);

    fs::write(release.join("blocked"), b"").unwrap();
    let err = resolve("osmesa-src", &release.join("blocked").join("wrench")).unwrap_err();
    assert!(matches!(err, HeadlessError::FilesystemAccess { .. }));
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn linux_configuration_points_at_newest_build() {
    let (_tmp, release) = fake_release();
    make_dep(&release, "osmesa-src-old", at(1_000));
    let newer = make_dep(&release, "osmesa-src-new", at(2_000));

    let overrides = configure(PlatformKind::Linux, &release.join("wrench")).unwrap();
    let expected = newer.join("out").join("lib").join("gallium");
    assert_eq!(overrides.get("LD_LIBRARY_PATH"), Some(expected.as_os_str()));
    assert_eq!(overrides.get("GALLIUM_DRIVER"), Some(OsStr::new("softpipe")));
    assert_eq!(overrides.get("DYLD_LIBRARY_PATH"), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn resolve_returns_entry_with_max_mtime(
        times in prop::collection::btree_set(1u64..1_000_000, 1..8)
    ) {
        let (_tmp, release) = fake_release();
        let mut expected = None;
        // Distinct times; shuffle the name order against time order.
        for (i, secs) in times.iter().rev().enumerate() {
            let dir = make_dep(&release, &format!("osmesa-src-{i:02}"), at(*secs));
            if i == 0 {
                expected = Some(dir);
            }
        }

        let found = resolve("osmesa-src", &release.join("wrench")).unwrap();
        prop_assert_eq!(found, expected);
    }
}
