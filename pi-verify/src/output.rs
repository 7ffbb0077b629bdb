//! Output formatting for the verifier

use colored::*;
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;

use crate::error::CliError;
use crate::verify::{AccountSummary, OperationSummary, ReportSink, Section, TransactionSummary};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output format
    Json,
    /// Human-readable text format
    Text,
}

impl OutputFormat {
    /// Map the `--json` flag to a format
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Prints each section in text form as soon as it is emitted
#[derive(Debug, Default)]
pub struct TextReport;

impl ReportSink for TextReport {
    fn emit(&mut self, section: Section) {
        println!("{}", render_section(&section));
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(data: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
    );
}

/// Report a failed run in the requested format
pub fn print_error(err: &CliError, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&format_error_json(err)),
        OutputFormat::Text => eprintln!("{} {}", "Error:".bold().red(), err),
    }
}

fn format_error_json(err: &CliError) -> serde_json::Value {
    let mut error_obj = json!({
        "type": err.error_type(),
        "message": err.to_string(),
    });

    if let CliError::Request(request_error) = err {
        if let Some(obj) = error_obj.as_object_mut() {
            if let Some(status) = request_error.status() {
                obj.insert("status".to_string(), json!(status));
            }
            if let Some(url) = request_error.url() {
                obj.insert("url".to_string(), json!(url));
            }
        }
    }

    json!({ "error": error_obj })
}

/// Format an optional field, using `null` for absent values
fn format_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

fn field(name: &str, value: impl Display) -> String {
    format!("  {}: {}", name.cyan(), value)
}

/// Render one section as text
pub fn render_section(section: &Section) -> String {
    match section {
        Section::Fetching { url } => format!("{} {}", "Fetching operation:".dimmed(), url),
        Section::Operation(summary) => render_operation(summary),
        Section::Transaction {
            summary,
            hash_match,
        } => {
            let hash_line = if *hash_match {
                "true".green()
            } else {
                "false".red()
            };
            format!(
                "{}\n\n{} {}",
                render_transaction(summary),
                "Hash match:".bold(),
                hash_line
            )
        }
        Section::NoTransaction => format!("\n{}", "No transaction_hash found on operation.".yellow()),
        Section::Effects { count } => format!("\n{} {}", "Effects count:".bold(), count),
        Section::Account {
            summary,
            starting_balance,
            current_native_balance,
        } => format!(
            "{}\n\n{} {}\n{} {}",
            render_account(summary),
            "Starting balance (operation):".bold(),
            format_opt(starting_balance),
            "Current native balance:".bold(),
            format_opt(current_native_balance)
        ),
        Section::NoAccount => format!(
            "\n{}",
            "No account id available in operation to fetch account details.".yellow()
        ),
    }
}

fn render_operation(summary: &OperationSummary) -> String {
    [
        format!("\n{}", "Operation Summary".bold().green()),
        field("id", format_opt(&summary.id)),
        field("type", format_opt(&summary.op_type)),
        field("created_at", format_opt(&summary.created_at)),
        field(
            "transaction_successful",
            format_opt(&summary.transaction_successful),
        ),
        field("transaction_hash", format_opt(&summary.transaction_hash)),
        field("funder", format_opt(&summary.funder)),
        field("account", format_opt(&summary.account)),
        field("starting_balance", format_opt(&summary.starting_balance)),
    ]
    .join("\n")
}

fn render_transaction(summary: &TransactionSummary) -> String {
    [
        format!("\n{}", "Transaction Summary".bold().green()),
        field("hash", format_opt(&summary.hash)),
        field("successful", format_opt(&summary.successful)),
        field("ledger", format_opt(&summary.ledger)),
        field("created_at", format_opt(&summary.created_at)),
        field("operation_count", format_opt(&summary.operation_count)),
    ]
    .join("\n")
}

fn render_account(summary: &AccountSummary) -> String {
    [
        format!("\n{}", "Account Summary".bold().green()),
        field("account", format_opt(&summary.account)),
        field("sequence", format_opt(&summary.sequence)),
        field("native_balance", format_opt(&summary.native_balance)),
        field("num_signers", summary.num_signers),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use pi_horizon_client::{HorizonError, HttpError};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_operation_with_absent_fields() {
        plain();
        let text = render_section(&Section::Operation(OperationSummary {
            id: Some("12".to_string()),
            op_type: Some("payment".to_string()),
            transaction_successful: Some(true),
            ..Default::default()
        }));

        assert!(text.contains("Operation Summary"));
        assert!(text.contains("  id: 12"));
        assert!(text.contains("  type: payment"));
        assert!(text.contains("  transaction_successful: true"));
        assert!(text.contains("  funder: null"));
        assert!(text.contains("  starting_balance: null"));
    }

    #[test]
    fn test_render_hash_match() {
        plain();
        let matched = render_section(&Section::Transaction {
            summary: TransactionSummary {
                hash: Some("H".to_string()),
                ledger: Some(9),
                ..Default::default()
            },
            hash_match: true,
        });
        assert!(matched.contains("  ledger: 9"));
        assert!(matched.contains("Hash match: true"));

        let mismatched = render_section(&Section::Transaction {
            summary: TransactionSummary::default(),
            hash_match: false,
        });
        assert!(mismatched.contains("Hash match: false"));
    }

    #[test]
    fn test_render_account_without_native_balance() {
        plain();
        let text = render_section(&Section::Account {
            summary: AccountSummary {
                account: Some("GNEW".to_string()),
                sequence: Some("7".to_string()),
                native_balance: None,
                num_signers: 2,
            },
            starting_balance: Some("1.0".to_string()),
            current_native_balance: None,
        });

        assert!(text.contains("  native_balance: null"));
        assert!(text.contains("  num_signers: 2"));
        assert!(text.contains("Starting balance (operation): 1.0"));
        assert!(text.contains("Current native balance: null"));
    }

    #[test]
    fn test_render_notices() {
        plain();
        assert!(
            render_section(&Section::NoTransaction)
                .contains("No transaction_hash found on operation.")
        );
        assert!(
            render_section(&Section::NoAccount)
                .contains("No account id available in operation to fetch account details.")
        );
        assert!(render_section(&Section::Effects { count: 0 }).contains("Effects count: 0"));
    }

    #[test]
    fn test_format_from_json_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }

    #[test]
    fn test_error_json() {
        let err = CliError::from(HorizonError::Http(HttpError::RequestFailed {
            status: 404,
            reason: "Not Found".to_string(),
            url: "http://localhost/operations/1".to_string(),
        }));
        let value = format_error_json(&err);
        assert_eq!(value["error"]["type"], "http");
        assert_eq!(value["error"]["status"], 404);
        assert_eq!(value["error"]["url"], "http://localhost/operations/1");
        assert!(value["error"]["message"].as_str().unwrap().contains("404"));

        let err = CliError::from(ConfigError::InvalidUrl("x".to_string()));
        let value = format_error_json(&err);
        assert_eq!(value["error"]["type"], "config");
        assert!(value["error"].get("status").is_none());
    }
}
