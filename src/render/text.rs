//! Terminal presentation of a [`BillsView`].

use colored::Colorize;

use super::{
    table::{Alignment, Table, TableColumn},
    BillRow, BillsPage, BillsView, ERROR_TITLE, LOADING_TEXT,
};

const FILE_MARKER: &str = "[voir]";

pub fn render_text(view: &BillsView, plain: bool) -> String {
    match view {
        BillsView::Loading => LOADING_TEXT.to_string(),
        BillsView::Error { message } => {
            let title = if plain {
                ERROR_TITLE.to_string()
            } else {
                ERROR_TITLE.bright_red().bold().to_string()
            };
            format!("{title}\n{message}")
        }
        BillsView::Normal(page) => render_page(page, plain),
    }
}

fn render_page(page: &BillsPage, plain: bool) -> String {
    let title = if plain {
        page.title.clone()
    } else {
        page.title.bold().to_string()
    };

    let mut columns: Vec<TableColumn> = page
        .table
        .headers
        .iter()
        .map(|header| TableColumn::new(header.clone(), Alignment::Left))
        .collect();
    if let Some(name) = columns.get_mut(1) {
        *name = name.clone().max_width(32);
    }
    if let Some(amount) = columns.get_mut(3) {
        amount.alignment = Alignment::Right;
    }

    let table = Table {
        columns,
        rows: page.rows().iter().map(|row| cells(row, plain)).collect(),
        padding: 1,
        plain,
    };

    format!("{title}\n[{}]\n\n{}", page.new_bill.label, table.render())
}

fn cells(row: &BillRow, plain: bool) -> Vec<String> {
    vec![
        row.kind.clone(),
        row.name.clone(),
        row.date.clone(),
        row.amount.clone(),
        styled_status(&row.status, plain),
        if row.has_file() {
            FILE_MARKER.to_string()
        } else {
            String::new()
        },
    ]
}

fn styled_status(status: &str, plain: bool) -> String {
    if plain {
        return status.to_string();
    }
    match status {
        "accepted" => status.green().to_string(),
        "refused" => status.red().to_string(),
        _ => status.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use billed_domain::{Bill, BillStatus};

    use super::*;
    use crate::render::{render, BillsState, RenderOptions};

    #[test]
    fn loading_and_error_modes() {
        assert_eq!(render_text(&BillsView::Loading, true), "Loading...");
        let view = BillsView::Error {
            message: "Erreur 404".into(),
        };
        assert_eq!(render_text(&view, true), "Erreur\nErreur 404");
    }

    #[test]
    fn plain_page_lists_rows_under_headers() {
        let bills = vec![
            Bill::new("a", "Transports", "taxi", "2001-01-01", 100.0, BillStatus::Refused),
            Bill::new("b", "Hôtel et logement", "encore", "2004-04-04", 400.0, BillStatus::Pending)
                .with_file("https://files.tld/b.jpg", "b.jpg"),
        ];
        let view = render(BillsState::loaded(&bills), &RenderOptions::default());
        let text = render_text(&view, true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Mes notes de frais");
        assert_eq!(lines[1], "[Nouvelle note de frais]");
        assert!(lines[3].contains("Type") && lines[3].contains("Actions"));
        assert!(lines[4].chars().all(|ch| ch == '-'));
        assert!(lines[5].contains("encore") && lines[5].contains("400 €") && lines[5].contains(FILE_MARKER));
        assert!(lines[6].contains("taxi") && !lines[6].contains(FILE_MARKER));
        assert_eq!(lines.len(), 7);
    }
}
