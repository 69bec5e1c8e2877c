//! Software-rendering environment for headless wrench.
//!
//! wrench's headless feature links against OSMesa, which the `osmesa-src`
//! build script compiles into its `OUT_DIR`. The dynamic loader has to be
//! pointed at that output, and Gallium told to use the softpipe driver.
//!
//! The environment is computed, not applied: [`configure`] returns an
//! [`EnvironmentOverrides`] which the caller hands to the processes it spawns.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{HeadlessError, HeadlessResult};
use crate::platform::PlatformKind;
use crate::resolver;

/// Package whose build output contains the OSMesa libraries.
pub const OSMESA_PACKAGE: &str = "osmesa-src";

pub const LD_LIBRARY_PATH: &str = "LD_LIBRARY_PATH";
pub const DYLD_LIBRARY_PATH: &str = "DYLD_LIBRARY_PATH";
pub const GALLIUM_DRIVER: &str = "GALLIUM_DRIVER";

/// Gallium driver selecting pure software rasterization.
pub const SOFTPIPE_DRIVER: &str = "softpipe";

/// Environment variables to set on processes launched after configuration.
///
/// Values are kept as OS strings so library paths reach the child byte for
/// byte. Later writes to the same variable replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentOverrides {
    vars: BTreeMap<String, OsString>,
}

impl EnvironmentOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(key).map(OsString::as_os_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Set every override on `cmd`'s environment.
    pub fn apply_to<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.envs(self.vars.iter().map(|(k, v)| (OsStr::new(k), v.as_os_str())))
    }
}

/// `KEY=VALUE` lines for display; non-UTF-8 bytes are shown lossily.
impl std::fmt::Display for EnvironmentOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.vars {
            writeln!(f, "{key}={}", value.to_string_lossy())?;
        }
        Ok(())
    }
}

/// OSMesa library directory inside the `osmesa-src` output on Linux.
fn linux_osmesa_lib_dir(dep: &Path) -> PathBuf {
    dep.join("out").join("lib").join("gallium")
}

/// OSMesa library directory inside the `osmesa-src` output on macOS.
fn macos_osmesa_lib_dir(dep: &Path) -> PathBuf {
    dep.join("out")
        .join("src")
        .join("gallium")
        .join("targets")
        .join("osmesa")
        .join(".libs")
}

/// Shared glapi library directory inside the `osmesa-src` output on macOS.
fn macos_glapi_lib_dir(dep: &Path) -> PathBuf {
    dep.join("out")
        .join("src")
        .join("mapi")
        .join("shared-glapi")
        .join(".libs")
}

/// Join library directories into a loader search path.
///
/// Fails if a directory contains the list separator, since the loader would
/// split it into two entries.
fn search_path(dirs: &[PathBuf]) -> HeadlessResult<OsString> {
    std::env::join_paths(dirs).map_err(|source| HeadlessError::InvalidSearchPath {
        paths: dirs.to_vec(),
        source,
    })
}

/// Compute the software-rendering environment for `platform`.
///
/// `binary_path` is the wrench binary; the `osmesa-src` output is looked up
/// in the `build` directory next to it. Linux and macOS fail with
/// `DependencyNotFound` if it is missing. Windows and other platforms get no
/// overrides.
pub fn configure(platform: PlatformKind, binary_path: &Path) -> HeadlessResult<EnvironmentOverrides> {
    let mut overrides = EnvironmentOverrides::new();

    match platform {
        PlatformKind::Linux => {
            let osmesa = linux_osmesa_lib_dir(&resolver::require(OSMESA_PACKAGE, binary_path)?);
            info!(path = %osmesa.display(), "Using OSMesa libraries");

            overrides.set(LD_LIBRARY_PATH, search_path(&[osmesa])?);
            overrides.set(GALLIUM_DRIVER, SOFTPIPE_DRIVER);
        }
        PlatformKind::MacOS => {
            let osmesa = macos_osmesa_lib_dir(&resolver::require(OSMESA_PACKAGE, binary_path)?);
            let glapi = macos_glapi_lib_dir(&resolver::require(OSMESA_PACKAGE, binary_path)?);
            info!(
                osmesa = %osmesa.display(),
                glapi = %glapi.display(),
                "Using OSMesa libraries"
            );

            overrides.set(DYLD_LIBRARY_PATH, search_path(&[osmesa, glapi])?);
            overrides.set(GALLIUM_DRIVER, SOFTPIPE_DRIVER);
        }
        PlatformKind::Windows | PlatformKind::Other => {
            info!(%platform, "Software rendering setup is not supported, launching with the inherited environment");
        }
    }

    Ok(overrides)
}
