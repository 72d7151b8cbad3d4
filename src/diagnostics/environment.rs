// SPDX-License-Identifier: GPL-3.0-or-later
//! Version/environment queries backing the diagnostic report.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use sysinfo::System;

use crate::error::QueryError;

/// Version triple of the hooking library the explorer hook links against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl fmt::Display for HookVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Detours build the hook is compiled against.
pub const DETOURS_VERSION: HookVersion = HookVersion {
    major: 4,
    minor: 0,
    revision: 6,
};

/// Major.minor of the JSON library the settings layer embeds.
pub const JSON_LIB_VERSION: &str = "1.0";

/// Diagnostic sources consumed by report assembly.
///
/// Methods returning `Result` are the genuinely fallible queries; their
/// failures are substituted inline into the report, never propagated.
pub trait Environment {
    /// Printable name of the host processor architecture.
    fn processor_architecture(&self) -> String;

    /// Whether the process runs with a package identity (store install).
    fn has_package_identity(&self) -> bool;

    /// Version of the installed package. Only meaningful when
    /// [`Environment::has_package_identity`] returns true.
    ///
    /// # Errors
    ///
    /// Fails when the package manifest cannot be located or parsed.
    fn package_version(&self) -> Result<String, QueryError>;

    /// Application version, anchored to the running executable on disk.
    ///
    /// # Errors
    ///
    /// Fails when the executable cannot be resolved.
    fn app_version(&self) -> Result<String, QueryError>;

    /// Host OS build string.
    ///
    /// # Errors
    ///
    /// Fails when the OS refuses to identify itself.
    fn os_build(&self) -> Result<String, QueryError>;

    /// Hooking-library version triple. Available by contract.
    fn hook_version(&self) -> HookVersion;

    /// Compile-time version of the embedded JSON library.
    fn json_library_version(&self) -> &'static str;
}

/// Production environment, backed by OS queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostEnvironment;

impl HostEnvironment {
    fn manifest_path() -> Result<PathBuf, QueryError> {
        let exe = std::env::current_exe().map_err(|err| QueryError::from_io(&err))?;
        let dir = exe
            .parent()
            .ok_or_else(|| QueryError::Message("executable has no parent directory".to_string()))?;
        Ok(dir.join("AppxManifest.xml"))
    }
}

impl Environment for HostEnvironment {
    fn processor_architecture(&self) -> String {
        System::cpu_arch()
    }

    fn has_package_identity(&self) -> bool {
        // Packaged installs run out of the store's WindowsApps tree.
        std::env::current_exe().is_ok_and(|exe| {
            exe.components()
                .any(|c| c.as_os_str().eq_ignore_ascii_case("WindowsApps"))
        })
    }

    fn package_version(&self) -> Result<String, QueryError> {
        read_package_version(&Self::manifest_path()?)
    }

    fn app_version(&self) -> Result<String, QueryError> {
        // The build stamps the crate version into the binary; the query still
        // fails like the file-version read it stands in for when the
        // executable cannot be located.
        std::env::current_exe()
            .map(|_| env!("CARGO_PKG_VERSION").to_string())
            .map_err(|err| QueryError::from_io(&err))
    }

    fn os_build(&self) -> Result<String, QueryError> {
        System::long_os_version()
            .ok_or_else(|| QueryError::Message("OS build string unavailable".to_string()))
    }

    fn hook_version(&self) -> HookVersion {
        DETOURS_VERSION
    }

    fn json_library_version(&self) -> &'static str {
        JSON_LIB_VERSION
    }
}

/// Reads the `Version` attribute of the `<Identity>` element of a package
/// manifest.
///
/// # Errors
///
/// Fails when the manifest is unreadable, not well-formed, or carries no
/// versioned identity.
pub fn read_package_version(manifest: &Path) -> Result<String, QueryError> {
    let xml = fs::read_to_string(manifest).map_err(|err| QueryError::from_io(&err))?;
    identity_version(&xml)
}

fn identity_version(xml: &str) -> Result<String, QueryError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag) | Event::Empty(tag))
                if tag.local_name().as_ref() == b"Identity" =>
            {
                for attr in tag.attributes().flatten() {
                    if attr.key.local_name().as_ref() == b"Version" {
                        return attr
                            .unescape_value()
                            .map(|value| value.into_owned())
                            .map_err(|err| QueryError::Message(err.to_string()));
                    }
                }
                return Err(QueryError::Message(
                    "package identity carries no version".to_string(),
                ));
            }
            Ok(Event::Eof) => {
                return Err(QueryError::Message(
                    "no package identity in manifest".to_string(),
                ))
            }
            Err(err) => return Err(QueryError::Message(err.to_string())),
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Package xmlns="http://schemas.microsoft.com/appx/manifest/foundation/windows10">
  <Identity Name="28017LevaitaCernauteanu.TranslucentTB"
            Publisher="CN=RealLifeDynamics"
            Version="2025.1.0.0" />
</Package>"#;

    #[test]
    fn identity_version_reads_version_attribute() {
        assert_eq!(identity_version(MANIFEST).unwrap(), "2025.1.0.0");
    }

    #[test]
    fn identity_version_without_version_attribute_fails() {
        let xml = r#"<Package><Identity Name="x" /></Package>"#;
        let err = identity_version(xml).unwrap_err();
        assert!(format!("{err}").contains("no version"));
    }

    #[test]
    fn identity_version_without_identity_fails() {
        let err = identity_version("<Package></Package>").unwrap_err();
        assert!(format!("{err}").contains("no package identity"));
    }

    #[test]
    fn identity_version_handles_namespaced_manifest() {
        let xml = r#"<m:Package xmlns:m="urn:x"><m:Identity Version="1.2.3.4" /></m:Package>"#;
        assert_eq!(identity_version(xml).unwrap(), "1.2.3.4");
    }

    #[test]
    fn read_package_version_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("AppxManifest.xml");
        fs::write(&path, MANIFEST).expect("write manifest");

        assert_eq!(read_package_version(&path).unwrap(), "2025.1.0.0");
    }

    #[test]
    fn read_package_version_missing_file_yields_os_code() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_package_version(&dir.path().join("AppxManifest.xml")).unwrap_err();
        assert!(matches!(err, QueryError::Code(_)));
    }

    #[test]
    fn hook_version_renders_dotted() {
        assert_eq!(DETOURS_VERSION.to_string(), "4.0.6");
    }

    #[test]
    fn host_environment_architecture_is_printable() {
        let env = HostEnvironment;
        assert!(!env.processor_architecture().is_empty());
    }

    #[test]
    fn host_environment_app_version_matches_crate() {
        let env = HostEnvironment;
        assert_eq!(env.app_version().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn host_environment_is_not_packaged_under_cargo() {
        let env = HostEnvironment;
        assert!(!env.has_package_identity());
    }
}
