//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for diagnostic reports
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Findings grouped under each stage, plus the summary line
    Full,
    /// Finding lines followed by the summary line (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
