//! Bills page rendering.
//!
//! [`render`] turns a page state into a [`BillsView`]: a plain description of
//! what the page shows, with no markup. Presentation layers in [`text`] and
//! [`html`] turn that description into terminal output or HTML.

pub mod html;
pub mod table;
pub mod text;

use billed_domain::Bill;
use serde::Serialize;

use crate::{app::Route, ordering::sort_by_date_desc};

pub const PAGE_TITLE: &str = "Mes notes de frais";
pub const NEW_BILL_LABEL: &str = "Nouvelle note de frais";
pub const PREVIEW_TITLE: &str = "Justificatif";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TITLE: &str = "Erreur";
pub const COLUMN_HEADERS: [&str; 6] = ["Type", "Nom", "Date", "Montant", "Statut", "Actions"];

/// Inputs of a single render call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillsState<'a> {
    pub records: Option<&'a [Bill]>,
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl<'a> BillsState<'a> {
    pub fn loaded(records: &'a [Bill]) -> Self {
        Self {
            records: Some(records),
            ..Self::default()
        }
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn failed(message: &'a str) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

/// Display settings threaded from the user configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub currency_symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".into(),
        }
    }
}

impl From<&billed_config::Config> for RenderOptions {
    fn from(config: &billed_config::Config) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

/// What the page shows after one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BillsView {
    Loading,
    Error { message: String },
    Normal(BillsPage),
}

impl BillsView {
    pub fn page(&self) -> Option<&BillsPage> {
        match self {
            BillsView::Normal(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BillsView::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BillsView::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Affordance that sends the user to the new-bill form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBillAction {
    pub label: String,
    pub route: Route,
}

/// The bills list page in normal mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillsPage {
    pub title: String,
    pub new_bill: NewBillAction,
    pub table: BillsTable,
    pub preview_title: String,
}

impl BillsPage {
    pub fn rows(&self) -> &[BillRow] {
        &self.table.rows
    }

    /// Values of one field across all rows, top to bottom.
    pub fn column(&self, field: RowField) -> Vec<&str> {
        self.table
            .rows
            .iter()
            .filter_map(|row| row.field(field))
            .collect()
    }
}

/// Row container. Present even when it holds no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillsTable {
    pub headers: Vec<String>,
    pub rows: Vec<BillRow>,
}

/// Opens the attached receipt in the file viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFileAction {
    pub url: String,
}

/// One rendered bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRow {
    pub bill_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub status: String,
    pub view_file: Option<ViewFileAction>,
}

/// Queryable row fields, named after the page's test ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Type,
    Name,
    Date,
    Amount,
    Status,
    FileUrl,
}

impl RowField {
    pub fn test_id(self) -> &'static str {
        match self {
            RowField::Type => "type",
            RowField::Name => "name",
            RowField::Date => "date",
            RowField::Amount => "amount",
            RowField::Status => "status",
            RowField::FileUrl => "icon-eye",
        }
    }
}

impl BillRow {
    pub fn from_bill(bill: &Bill, options: &RenderOptions) -> Self {
        Self {
            bill_id: bill.id.clone(),
            kind: bill.kind.clone(),
            name: bill.name.clone(),
            date: bill.display_date().to_string(),
            amount: format_amount(bill.amount, &options.currency_symbol),
            status: bill.status.to_string(),
            view_file: bill.receipt_url().map(|url| ViewFileAction {
                url: url.to_string(),
            }),
        }
    }

    pub fn field(&self, field: RowField) -> Option<&str> {
        match field {
            RowField::Type => Some(&self.kind),
            RowField::Name => Some(&self.name),
            RowField::Date => Some(&self.date),
            RowField::Amount => Some(&self.amount),
            RowField::Status => Some(&self.status),
            RowField::FileUrl => self.view_file.as_ref().map(|action| action.url.as_str()),
        }
    }

    pub fn has_file(&self) -> bool {
        self.view_file.is_some()
    }
}

/// Amount with the currency suffix, e.g. `400 €` or `12.5 €`.
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if currency_symbol.is_empty() {
        amount.to_string()
    } else {
        format!("{amount} {currency_symbol}")
    }
}

/// Renders the bills page. Precedence is loading, then error, then the list.
pub fn render(state: BillsState<'_>, options: &RenderOptions) -> BillsView {
    if state.loading {
        return BillsView::Loading;
    }
    if let Some(message) = state.error.filter(|message| !message.is_empty()) {
        return BillsView::Error {
            message: message.to_string(),
        };
    }

    let records = state.records.unwrap_or_default();
    let rows = sort_by_date_desc(records)
        .into_iter()
        .map(|bill| BillRow::from_bill(bill, options))
        .collect();

    BillsView::Normal(BillsPage {
        title: PAGE_TITLE.to_string(),
        new_bill: NewBillAction {
            label: NEW_BILL_LABEL.to_string(),
            route: Route::NewBill,
        },
        table: BillsTable {
            headers: COLUMN_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        },
        preview_title: PREVIEW_TITLE.to_string(),
    })
}
