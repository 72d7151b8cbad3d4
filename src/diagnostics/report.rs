// SPDX-License-Identifier: GPL-3.0-or-later
//! Assembly of the human-readable version/environment report.

use std::fmt;

use super::environment::Environment;
use crate::error::QueryError;

/// Build profile the binary was compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildConfig {
    Release,
    Debug,
    Unknown,
}

impl BuildConfig {
    /// Profile of the current binary, resolved at compile time.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildConfig::Debug
        } else {
            BuildConfig::Release
        }
    }

    const fn label(self) -> &'static str {
        match self {
            BuildConfig::Release => "Release",
            BuildConfig::Debug => "Debug",
            BuildConfig::Unknown => "Unknown",
        }
    }
}

/// CPU family the binary targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArch {
    X64,
    X86,
    Arm64,
    Arm,
    Unknown,
}

impl TargetArch {
    /// Target family of the current binary, resolved at compile time.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_arch = "x86_64") {
            TargetArch::X64
        } else if cfg!(target_arch = "x86") {
            TargetArch::X86
        } else if cfg!(target_arch = "aarch64") {
            TargetArch::Arm64
        } else if cfg!(target_arch = "arm") {
            TargetArch::Arm
        } else {
            TargetArch::Unknown
        }
    }

    const fn label(self) -> &'static str {
        match self {
            TargetArch::X64 => "x64",
            TargetArch::X86 => "x86",
            TargetArch::Arm64 => "ARM64",
            TargetArch::Arm => "ARM",
            TargetArch::Unknown => "Unknown",
        }
    }
}

/// One labeled line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFact {
    pub label: &'static str,
    pub value: String,
}

impl VersionFact {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for VersionFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Assembles the diagnostic report, one fact per line.
///
/// Total function: a failing source degrades to its rendered failure text in
/// place of the value instead of aborting the aggregation. Idempotent for an
/// unchanged environment.
#[must_use]
pub fn build_report(env: &dyn Environment) -> String {
    let facts = collect_facts(env);
    let lines: Vec<String> = facts.iter().map(ToString::to_string).collect();
    lines.join("\n")
}

/// Gathers every applicable fact in the fixed report order.
fn collect_facts(env: &dyn Environment) -> Vec<VersionFact> {
    let mut facts = Vec::with_capacity(7);

    facts.push(VersionFact::new(
        "Build configuration",
        format!(
            "{} ({})",
            BuildConfig::current().label(),
            TargetArch::current().label()
        ),
    ));
    facts.push(VersionFact::new(
        "System architecture",
        env.processor_architecture(),
    ));

    // Package version only exists for store installs.
    if env.has_package_identity() {
        facts.push(VersionFact::new(
            "Package version",
            render(env.package_version()),
        ));
    }

    facts.push(VersionFact::new(
        "TranslucentTB version",
        render(env.app_version()),
    ));
    facts.push(VersionFact::new("Windows version", render(env.os_build())));
    facts.push(VersionFact::new(
        "Microsoft Detours version",
        env.hook_version().to_string(),
    ));
    facts.push(VersionFact::new(
        "serde_json version",
        env.json_library_version(),
    ));

    facts
}

fn render(query: Result<String, QueryError>) -> String {
    match query {
        Ok(value) => value,
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::HookVersion;

    struct FakeEnvironment {
        packaged: bool,
        package_version: Result<String, QueryError>,
        app_version: Result<String, QueryError>,
        os_build: Result<String, QueryError>,
    }

    impl FakeEnvironment {
        fn unpackaged() -> Self {
            Self {
                packaged: false,
                package_version: Err(QueryError::Message("not packaged".to_string())),
                app_version: Ok("2.5.0".to_string()),
                os_build: Ok("Windows 10.0.19045".to_string()),
            }
        }
    }

    impl Environment for FakeEnvironment {
        fn processor_architecture(&self) -> String {
            "AMD64".to_string()
        }

        fn has_package_identity(&self) -> bool {
            self.packaged
        }

        fn package_version(&self) -> Result<String, QueryError> {
            self.package_version.clone()
        }

        fn app_version(&self) -> Result<String, QueryError> {
            self.app_version.clone()
        }

        fn os_build(&self) -> Result<String, QueryError> {
            self.os_build.clone()
        }

        fn hook_version(&self) -> HookVersion {
            HookVersion {
                major: 4,
                minor: 0,
                revision: 6,
            }
        }

        fn json_library_version(&self) -> &'static str {
            "1.0"
        }
    }

    fn labels(report: &str) -> Vec<String> {
        report
            .lines()
            .map(|line| {
                line.split_once(": ")
                    .map(|(label, _)| label.to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn unpackaged_report_has_fixed_line_order() {
        let report = build_report(&FakeEnvironment::unpackaged());

        assert_eq!(
            labels(&report),
            vec![
                "Build configuration",
                "System architecture",
                "TranslucentTB version",
                "Windows version",
                "Microsoft Detours version",
                "serde_json version",
            ]
        );
    }

    #[test]
    fn packaged_report_inserts_package_line_after_architecture() {
        let env = FakeEnvironment {
            packaged: true,
            package_version: Ok("2025.1.0.0".to_string()),
            ..FakeEnvironment::unpackaged()
        };

        let report = build_report(&env);

        assert_eq!(labels(&report)[2], "Package version");
        assert!(report.contains("Package version: 2025.1.0.0"));
    }

    #[test]
    fn package_line_absent_without_identity() {
        let report = build_report(&FakeEnvironment::unpackaged());
        assert!(!report.contains("Package version:"));
    }

    #[test]
    fn example_scenario_lines_match() {
        let report = build_report(&FakeEnvironment::unpackaged());

        assert!(report.contains("TranslucentTB version: 2.5.0"));
        assert!(report.contains("Windows version: Windows 10.0.19045"));
        assert!(report.contains("Microsoft Detours version: 4.0.6"));
    }

    #[test]
    fn report_is_idempotent() {
        let env = FakeEnvironment::unpackaged();
        assert_eq!(build_report(&env), build_report(&env));
    }

    #[test]
    fn failed_app_version_substitutes_rendered_code() {
        let env = FakeEnvironment {
            app_version: Err(QueryError::Code(0x8000_4005_u32 as i32)),
            ..FakeEnvironment::unpackaged()
        };

        let report = build_report(&env);

        assert!(report.contains("TranslucentTB version: error 0x80004005"));
        assert!(!report.contains("TranslucentTB version: \n"));
    }

    #[test]
    fn failed_os_build_substitutes_message() {
        let env = FakeEnvironment {
            os_build: Err(QueryError::Message("OS build string unavailable".to_string())),
            ..FakeEnvironment::unpackaged()
        };

        let report = build_report(&env);
        assert!(report.contains("Windows version: OS build string unavailable"));
    }

    #[test]
    fn failed_package_version_substitutes_message() {
        let env = FakeEnvironment {
            packaged: true,
            package_version: Err(QueryError::Message("manifest is unreadable".to_string())),
            ..FakeEnvironment::unpackaged()
        };

        let report = build_report(&env);
        assert!(report.contains("Package version: manifest is unreadable"));
    }

    #[test]
    fn build_configuration_line_combines_profile_and_arch() {
        let report = build_report(&FakeEnvironment::unpackaged());
        let first = report.lines().next().expect("non-empty report");

        assert!(first.starts_with("Build configuration: "));
        assert!(first.ends_with(&format!("({})", TargetArch::current().label())));
    }

    #[test]
    fn current_build_config_matches_profile() {
        let expected = if cfg!(debug_assertions) {
            BuildConfig::Debug
        } else {
            BuildConfig::Release
        };
        assert_eq!(BuildConfig::current(), expected);
    }

    #[test]
    fn version_fact_renders_label_colon_value() {
        let fact = VersionFact::new("Windows version", "Windows 11");
        assert_eq!(fact.to_string(), "Windows version: Windows 11");
    }
}
