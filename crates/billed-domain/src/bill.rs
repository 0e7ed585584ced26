//! Expense report records submitted by employees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Dated;

/// Workflow state of a submitted bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Wire name of the status, also used verbatim in rendered rows.
    pub fn as_str(self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One expense entry as returned by the bills store.
///
/// Field names follow the store's camelCase JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display override for the date column. Never used for ordering.
    #[serde(
        default,
        rename = "formatedDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_date: Option<String>,
}

impl Bill {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        status: BillStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            date: date.into(),
            amount,
            status,
            file_url: None,
            file_name: None,
            vat: None,
            pct: None,
            commentary: None,
            comment_admin: None,
            email: None,
            formatted_date: None,
        }
    }

    pub fn with_file(mut self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.file_url = Some(url.into());
        self.file_name = Some(name.into());
        self
    }

    /// Returns the receipt URL when one is attached. Blank URLs count as absent.
    pub fn receipt_url(&self) -> Option<&str> {
        self.file_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// String shown in the date column: the formatted override, else the raw date.
    pub fn display_date(&self) -> &str {
        self.formatted_date.as_deref().unwrap_or(&self.date)
    }
}

impl Dated for Bill {
    fn raw_date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {} [{}]",
            self.name, self.kind, self.date, self.amount, self.status
        )
    }
}
