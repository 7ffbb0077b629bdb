//! The ordered verification run
//!
//! Each step is a single GET whose result is handed to a [`ReportSink`] as
//! soon as it arrives. The first failing request ends the run.

use pi_horizon_client::{Account, Client, Operation, Transaction};
use serde::Serialize;

use crate::error::CliError;

/// Fields of interest from the operation record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationSummary {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub op_type: Option<String>,
    pub created_at: Option<String>,
    pub transaction_successful: Option<bool>,
    pub transaction_hash: Option<String>,
    pub funder: Option<String>,
    pub account: Option<String>,
    pub starting_balance: Option<String>,
}

impl From<&Operation> for OperationSummary {
    fn from(op: &Operation) -> Self {
        Self {
            id: op.id.clone(),
            op_type: op.op_type.clone(),
            created_at: op.created_at.clone(),
            transaction_successful: op.transaction_successful,
            transaction_hash: op.transaction_hash().map(str::to_string),
            funder: op.funder_or_source().map(str::to_string),
            account: op.account().map(str::to_string),
            starting_balance: op.starting_balance.clone(),
        }
    }
}

/// Fields of interest from the parent transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub hash: Option<String>,
    pub successful: Option<bool>,
    pub ledger: Option<u64>,
    pub created_at: Option<String>,
    pub operation_count: Option<u32>,
}

impl From<&Transaction> for TransactionSummary {
    fn from(tx: &Transaction) -> Self {
        Self {
            hash: tx.hash.clone(),
            successful: tx.successful,
            ledger: tx.ledger,
            created_at: tx.created_at.clone(),
            operation_count: tx.operation_count,
        }
    }
}

/// Fields of interest from the account record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSummary {
    pub account: Option<String>,
    pub sequence: Option<String>,
    pub native_balance: Option<String>,
    pub num_signers: usize,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            account: account.account_id().map(str::to_string),
            sequence: account.sequence.clone(),
            native_balance: account.native_balance().map(str::to_string),
            num_signers: account.num_signers(),
        }
    }
}

/// One piece of the verification output, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// About to fetch the operation
    Fetching { url: String },
    /// The operation was fetched
    Operation(OperationSummary),
    /// The parent transaction was fetched
    Transaction {
        summary: TransactionSummary,
        /// Requested hash equals the returned one; informational only
        hash_match: bool,
    },
    /// The operation has no transaction hash
    NoTransaction,
    /// The first effects page was fetched
    Effects { count: usize },
    /// The operation's account was fetched
    Account {
        summary: AccountSummary,
        starting_balance: Option<String>,
        current_native_balance: Option<String>,
    },
    /// The operation names no account
    NoAccount,
}

/// Receives sections as the run produces them
pub trait ReportSink {
    fn emit(&mut self, section: Section);
}

impl ReportSink for Vec<Section> {
    fn emit(&mut self, section: Section) {
        self.push(section);
    }
}

/// Collected results of a successful run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationReport {
    pub operation: Option<OperationSummary>,
    pub transaction: Option<TransactionSummary>,
    pub hash_match: Option<bool>,
    pub effects_count: usize,
    pub account: Option<AccountSummary>,
    pub starting_balance: Option<String>,
    pub current_native_balance: Option<String>,
}

impl ReportSink for VerificationReport {
    fn emit(&mut self, section: Section) {
        match section {
            Section::Fetching { .. } | Section::NoTransaction | Section::NoAccount => {}
            Section::Operation(summary) => self.operation = Some(summary),
            Section::Transaction {
                summary,
                hash_match,
            } => {
                self.transaction = Some(summary);
                self.hash_match = Some(hash_match);
            }
            Section::Effects { count } => self.effects_count = count,
            Section::Account {
                summary,
                starting_balance,
                current_native_balance,
            } => {
                self.account = Some(summary);
                self.starting_balance = starting_balance;
                self.current_native_balance = current_native_balance;
            }
        }
    }
}

/// Verify one operation, emitting each section to `sink`
pub async fn run<S: ReportSink>(
    client: &Client,
    operation_id: &str,
    sink: &mut S,
) -> Result<(), CliError> {
    sink.emit(Section::Fetching {
        url: client.operation_url(operation_id).to_string(),
    });

    let operation = client.get_operation(operation_id).await?;
    let summary = OperationSummary::from(&operation);
    tracing::debug!("operation {} is {:?}", operation_id, summary.op_type);
    sink.emit(Section::Operation(summary.clone()));

    match operation.transaction_hash() {
        Some(hash) => {
            let tx = client.get_transaction(hash).await?;
            let hash_match = tx.hash_matches(hash);
            if !hash_match {
                tracing::warn!(
                    "transaction hash mismatch: requested {}, got {:?}",
                    hash,
                    tx.hash
                );
            }
            sink.emit(Section::Transaction {
                summary: TransactionSummary::from(&tx),
                hash_match,
            });
        }
        None => sink.emit(Section::NoTransaction),
    }

    let effects = client.get_operation_effects(operation_id).await?;
    sink.emit(Section::Effects {
        count: effects.len(),
    });

    match operation.account() {
        Some(account_id) => {
            let account = client.get_account(account_id).await?;
            let account_summary = AccountSummary::from(&account);
            let current_native_balance = account_summary.native_balance.clone();
            sink.emit(Section::Account {
                summary: account_summary,
                starting_balance: summary.starting_balance,
                current_native_balance,
            });
        }
        None => sink.emit(Section::NoAccount),
    }

    Ok(())
}
