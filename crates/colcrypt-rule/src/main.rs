//! colcrypt-rule: encrypt rule file lint.
//!
//! Usage: `colcrypt-rule [PATH]` (default `encrypt-rule.yaml`).
//! Validates the file and prints a JSON summary per table. Encryptors are not
//! instantiated, so no cipher plugins are needed.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use colcrypt_rule::config;
use colcrypt_rule::report::RuleReport;

const DEFAULT_RULE_FILE: &str = "encrypt-rule.yaml";

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RULE_FILE.to_string());

    let rule = match config::load_from_file(&path) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(path = %path, code = e.code().as_str(), error = %e, "rule file invalid");
            return ExitCode::FAILURE;
        }
    };

    let report = RuleReport::from_rule(&rule);
    match serde_json::to_string_pretty(&report) {
        Ok(s) => {
            println!("{s}");
            tracing::info!(path = %path, tables = report.tables.len(), "rule file ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "render report failed");
            ExitCode::FAILURE
        }
    }
}
