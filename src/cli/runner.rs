//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::compat::{
    compatibility_table, supported_versions_text, unsupported_attributes, PlatformVersion,
};
use crate::config::load_resource_check;
use crate::diag::Diagnostics;
use crate::error::{Result, ResultExt};
use crate::taxonomy::{
    connection_message, security_system_message, ErrorCategory, ErrorCodeGenerator,
};
use crate::translate::{reverse_translate_in, translate_in, TranslationTable};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Exit status for a command that ran cleanly
pub const EXIT_OK: i32 = 0;

/// Exit status when a check produced error diagnostics
pub const EXIT_FAILED: i32 = 1;

/// Output of one command in both renderings
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub json: Value,
    pub text: String,
    pub exit_code: i32,
}

impl Report {
    fn ok(json: Value, text: String) -> Self {
        Self {
            json,
            text,
            exit_code: EXIT_OK,
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, print its report and return the exit status
    pub fn run(&self) -> Result<i32> {
        let report = match &self.cli.command {
            Commands::Check {
                config,
                platform_version,
            } => check_report(config, platform_version.as_deref())?,
            Commands::Translate {
                table,
                value,
                reverse,
            } => translate_report(table, value, *reverse)?,
            Commands::ErrorCode {
                connector,
                security_system,
                category,
                sequence,
            } => error_code_report(connector.as_deref(), *security_system, category, *sequence)?,
            Commands::Versions => versions_report(),
        };

        self.output(&report);
        Ok(report.exit_code)
    }

    fn output(&self, report: &Report) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&report.json).unwrap_or_default());
            }
            OutputFormat::Pretty => println!("{}", report.text),
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Check a resource-check document
pub fn check_report(path: &Path, platform_version: Option<&str>) -> Result<Report> {
    let check = load_resource_check(path)?;
    let diags = check.check(platform_version);
    let version = check.effective_version(platform_version);
    let resource_type = check.compat_resource_type();

    info!(
        path = %path.display(),
        resource = %check.resource,
        errors = diags.error_count(),
        warnings = diags.warning_count(),
        "Resource check finished"
    );

    let json = json!({
        "type": "CHECK",
        "file": path.display().to_string(),
        "resource": check.resource,
        "resource_type": resource_type,
        "platform_version": version,
        "errors": diags.error_count(),
        "warnings": diags.warning_count(),
        "diagnostics": diags,
    });

    Ok(Report {
        json,
        text: render_diagnostics(&path.display().to_string(), &diags),
        exit_code: if diags.has_error() { EXIT_FAILED } else { EXIT_OK },
    })
}

fn render_diagnostics(file: &str, diags: &Diagnostics) -> String {
    let mut text = String::new();
    for diag in diags {
        let _ = writeln!(text, "{diag}");
    }
    let _ = write!(
        text,
        "{file}: {} error(s), {} warning(s)",
        diags.error_count(),
        diags.warning_count()
    );
    text
}

/// Translate a value through a named table
pub fn translate_report(table: &str, value: &str, reverse: bool) -> Result<Report> {
    let table: TranslationTable = table.parse()?;
    let output = if reverse {
        reverse_translate_in(value, table)
    } else {
        translate_in(value, table)
    };

    Ok(Report::ok(
        json!({
            "type": "TRANSLATION",
            "table": table.name(),
            "reverse": reverse,
            "input": value,
            "output": output,
        }),
        output.to_string(),
    ))
}

/// Generate an error code and look up its standard message
pub fn error_code_report(
    connector: Option<&str>,
    security_system: bool,
    category: &str,
    sequence: u32,
) -> Result<Report> {
    let category: ErrorCategory = category.parse().context("invalid --category")?;
    let (code, message) = if security_system {
        let code = ErrorCodeGenerator::for_security_system().generate(category, sequence);
        let message = security_system_message(&code);
        (code, message)
    } else {
        let code = ErrorCodeGenerator::for_connector(connector.unwrap_or_default())
            .generate(category, sequence);
        let message = connection_message(&code);
        (code, message)
    };

    Ok(Report::ok(
        json!({
            "type": "ERROR_CODE",
            "code": code,
            "category": category,
            "message": message,
        }),
        format!("{code}  {message}"),
    ))
}

/// Recognized platform versions with their tokens and unsupported attributes
pub fn versions_report() -> Report {
    let resource_types: BTreeSet<&str> = compatibility_table()
        .iter()
        .map(|entry| entry.resource_type)
        .collect();

    let versions: Vec<Value> = PlatformVersion::ALL
        .iter()
        .map(|v| {
            let unsupported: Vec<Value> = resource_types
                .iter()
                .flat_map(|resource_type| unsupported_attributes(*v, resource_type))
                .map(|entry| {
                    json!({
                        "attribute": entry.attribute_name,
                        "resource_type": entry.resource_type,
                    })
                })
                .collect();
            json!({
                "version": v.label(),
                "tokens": v.tokens(),
                "unsupported": unsupported,
            })
        })
        .collect();

    let mut text = String::new();
    for v in PlatformVersion::ALL {
        let _ = writeln!(text, "{}  ({})", v.label(), v.tokens().join(", "));
    }
    let _ = write!(text, "Supported versions: {}", supported_versions_text());

    Report::ok(
        json!({
            "type": "VERSIONS",
            "versions": versions,
        }),
        text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_doc(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_report_failure() {
        let file = write_doc(
            "resource: entitlement\nattributes:\n  owners:\n    - owner_name: alice\n      rank: \"28\"\n",
        );
        let report = check_report(file.path(), None).unwrap();
        assert_eq!(report.exit_code, EXIT_FAILED);
        assert_eq!(report.json["errors"], json!(1));
        assert_eq!(report.json["diagnostics"][0]["summary"], json!("Value Out of Range"));
        assert_eq!(
            report.json["diagnostics"][0]["attribute"],
            json!("owners[0].rank")
        );
        assert!(report.text.ends_with("1 error(s), 0 warning(s)"));
    }

    #[test]
    fn test_check_report_unknown_version_warns_only() {
        let file = write_doc(
            "resource: connection\nconnection_type: AD\nattributes:\n  pam_config: '{}'\n",
        );
        let report = check_report(file.path(), Some("26.Zurich")).unwrap();
        assert_eq!(report.exit_code, EXIT_OK);
        assert_eq!(report.json["warnings"], json!(1));
        assert_eq!(report.json["platform_version"], json!("26.Zurich"));
    }

    #[test]
    fn test_translate_report() {
        let report = translate_report("role_type", "ENTERPRISE", false).unwrap();
        assert_eq!(report.text, "5");

        let report = translate_report("risk-level", "4", true).unwrap();
        assert_eq!(report.text, "HIGH");
        assert_eq!(report.json["table"], json!("risk_level"));

        assert!(translate_report("colours", "RED", false).is_err());
    }

    #[test]
    fn test_error_code_report() {
        let report = error_code_report(Some("AD"), false, "api", 3).unwrap();
        assert_eq!(report.json["code"], json!("AD_CONN_203"));
        assert_eq!(report.json["category"], json!("api_operation"));
        assert_eq!(report.text, "AD_CONN_203  Read connection API call failed");

        let report = error_code_report(None, true, "business", 3).unwrap();
        assert_eq!(report.json["code"], json!("SECSYS_103"));
        assert_eq!(report.json["message"], json!("Security system not found"));

        assert!(error_code_report(Some("AD"), false, "network", 1).is_err());
    }

    #[test]
    fn test_versions_report() {
        let report = versions_report();
        let versions = report.json["versions"].as_array().unwrap();
        assert_eq!(versions.len(), 3);
        assert_eq!(versions[0]["version"], json!("25.Brisbane"));
        assert_eq!(versions[0]["unsupported"], json!([]));

        let amsterdam = versions[1]["unsupported"].as_array().unwrap();
        assert!(amsterdam.contains(&json!({
            "attribute": "ApplicationDiscoveryJSON",
            "resource_type": "REST",
        })));
        assert!(!amsterdam.iter().any(|e| e["attribute"] == json!("PamConfig")
            && e["resource_type"] == json!("AD")));
        assert_eq!(versions[2]["unsupported"].as_array().unwrap().len(), 22);
        assert!(report.text.starts_with("25.Brisbane  (25.brisbane, 25.b)"));
    }
}
