//! Validation Report Generation
//!
//! Wraps the diagnostics of one validation pass in a report with
//! summary statistics, for CI (JSON) or terminal (human-readable)
//! consumption. The full ordered diagnostic list is always carried;
//! reports never truncate to the first failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::{Outcome, Severity};

/// Validation report for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Timestamp of the validation run (RFC 3339)
    pub timestamp: String,
    /// Summary statistics
    pub summary: ValidationSummary,
    /// Every diagnostic, in document order
    pub diagnostics: Vec<Diagnostic>,
}

/// Summary of validation results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Total number of diagnostics
    pub total: usize,
    /// Number of error-severity diagnostics
    pub errors: usize,
    /// Number of warning-severity diagnostics
    pub warnings: usize,
    /// Diagnostic counts keyed by stable code
    pub by_code: BTreeMap<String, usize>,
}

impl ValidationReport {
    /// Build a report from a diagnostic list
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let mut by_code: BTreeMap<String, usize> = BTreeMap::new();
        for diagnostic in &diagnostics {
            *by_code.entry(diagnostic.kind.code().to_string()).or_default() += 1;
        }
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ValidationSummary {
                total: diagnostics.len(),
                errors,
                warnings: diagnostics.len() - errors,
                by_code,
            },
            diagnostics,
        }
    }

    /// Build a report from a validation outcome
    pub fn from_outcome<T>(outcome: &Outcome<T>) -> Self {
        Self::new(outcome.diagnostics().to_vec())
    }

    /// Whether the validated document passed (no errors; warnings
    /// allowed)
    pub fn is_success(&self) -> bool {
        self.summary.errors == 0
    }

    /// Serialize the report as pretty JSON for CI integration
    pub fn to_json(&self) -> eva_domain::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report for terminal output
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "validation: {} ({} error(s), {} warning(s))\n",
            if self.is_success() { "PASS" } else { "FAIL" },
            self.summary.errors,
            self.summary.warnings,
        ));
        for diagnostic in &self.diagnostics {
            out.push_str(&format!("  {diagnostic}\n"));
        }
        for (code, count) in &self.summary.by_code {
            out.push_str(&format!("  {code}: {count}\n"));
        }
        out
    }
}

impl ValidationSummary {
    /// Count of diagnostics at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
        }
    }
}
