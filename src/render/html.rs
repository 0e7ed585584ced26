//! HTML presentation of a [`BillsView`], tagged with `data-testid` hooks.

use maud::{html, Markup};

use super::{BillRow, BillsPage, BillsView, ERROR_TITLE, LOADING_TEXT};

pub fn render_html(view: &BillsView) -> String {
    let markup = match view {
        BillsView::Loading => html! {
            div #loading { (LOADING_TEXT) }
        },
        BillsView::Error { message } => html! {
            div #"error-page" {
                div."error-title" { (ERROR_TITLE) }
                div data-testid="error-message" { (message) }
            }
        },
        BillsView::Normal(page) => render_page(page),
    };
    markup.into_string()
}

fn render_page(page: &BillsPage) -> Markup {
    html! {
        div.layout {
            div.content {
                div."content-header" {
                    div."content-title" { (page.title) }
                    button type="button" data-testid="btn-new-bill" data-route=(page.new_bill.route.path()) class="btn btn-primary" {
                        (page.new_bill.label)
                    }
                }
                div #"data-table" {
                    table #example class="table table-striped" {
                        thead {
                            tr {
                                @for header in &page.table.headers {
                                    th { (header) }
                                }
                            }
                        }
                        tbody data-testid="tbody" {
                            @for row in page.rows() {
                                (render_row(row))
                            }
                        }
                    }
                }
            }
            (preview_modal(&page.preview_title))
        }
    }
}

fn render_row(row: &BillRow) -> Markup {
    html! {
        tr data-testid="bill" data-bill-id=(row.bill_id) {
            td data-testid="type" { (row.kind) }
            td data-testid="name" { (row.name) }
            td data-testid="date" { (row.date) }
            td data-testid="amount" { (row.amount) }
            td data-testid="status" { (row.status) }
            td {
                div."icon-actions" {
                    @if let Some(action) = &row.view_file {
                        div data-testid="icon-eye" data-bill-url=(action.url) { "Voir" }
                    } @else {
                        span data-testid="icon-eye-disabled" aria-disabled="true" {}
                    }
                }
            }
        }
    }
}

fn preview_modal(title: &str) -> Markup {
    html! {
        div.modal.fade #modaleFile tabindex="-1" role="dialog" aria-hidden="true" {
            div."modal-dialog" role="document" {
                div."modal-content" {
                    div."modal-header" {
                        h5."modal-title" { (title) }
                    }
                    div."modal-body" {}
                }
            }
        }
    }
}
