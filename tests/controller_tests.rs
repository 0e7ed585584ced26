mod common;

use std::cell::RefCell;

use billed_core::{
    app::{BillsController, FilePreview, Navigator, Route},
    render::{BillsView, RenderOptions, RowField},
    store::{BillStore, JsonBillStore, MockStore},
};
use common::{fixture_bills, write_bills_file, RECEIPT_URL};

#[derive(Default)]
struct SpyNavigator {
    routes: RefCell<Vec<Route>>,
}

impl Navigator for SpyNavigator {
    fn navigate_to(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
struct SpyPreview {
    shown: RefCell<Vec<(String, String)>>,
}

impl FilePreview for SpyPreview {
    fn show(&self, url: &str, title: &str) {
        self.shown.borrow_mut().push((url.to_string(), title.to_string()));
    }
}

#[test]
fn view_fetches_once_and_renders_sorted_rows() {
    let navigator = SpyNavigator::default();
    let preview = SpyPreview::default();
    let controller = BillsController::new(
        MockStore::new(fixture_bills()),
        &navigator,
        &preview,
        RenderOptions::default(),
    );

    let view = controller.view();
    assert_eq!(controller.store().calls(), 1);

    let page = view.page().expect("normal mode");
    assert_eq!(page.rows().len(), 4);
    assert_eq!(
        page.column(RowField::Date),
        vec!["4 Avr. 04", "1 Jan. 03", "2 Fév. 02", "1 Jan. 01"]
    );
}

#[test]
fn store_failure_surfaces_message_verbatim() {
    let controller = BillsController::new(
        MockStore::failing("Erreur 404"),
        SpyNavigator::default(),
        SpyPreview::default(),
        RenderOptions::default(),
    );

    assert_eq!(
        controller.view(),
        BillsView::Error {
            message: "Erreur 404".into()
        }
    );
}

#[test]
fn clicking_eye_opens_receipt_preview() {
    let preview = SpyPreview::default();
    let controller = BillsController::new(
        MockStore::new(fixture_bills()),
        SpyNavigator::default(),
        &preview,
        RenderOptions::default(),
    );

    let view = controller.view();
    let first = &view.page().expect("normal mode").rows()[0];

    assert!(controller.handle_click_icon_eye(first));
    assert_eq!(
        *preview.shown.borrow(),
        vec![(RECEIPT_URL.to_string(), "Justificatif".to_string())]
    );
}

#[test]
fn clicking_eye_without_receipt_does_nothing() {
    let mut bills = fixture_bills();
    bills[2].file_url = None;
    let preview = SpyPreview::default();
    let controller = BillsController::new(
        MockStore::new(bills),
        SpyNavigator::default(),
        &preview,
        RenderOptions::default(),
    );

    let view = controller.view();
    let hotel = &view.page().expect("normal mode").rows()[0];
    assert_eq!(hotel.name, "encore");

    assert!(!controller.handle_click_icon_eye(hotel));
    assert!(preview.shown.borrow().is_empty());
}

#[test]
fn clicking_new_bill_navigates_to_form() {
    let navigator = SpyNavigator::default();
    let controller = BillsController::new(
        MockStore::new(Vec::new()),
        &navigator,
        SpyPreview::default(),
        RenderOptions::default(),
    );

    controller.handle_click_new_bill();
    assert_eq!(*navigator.routes.borrow(), vec![Route::NewBill]);
}

#[test]
fn json_store_reads_and_validates_file() {
    let bills = fixture_bills();
    let (_dir, path) = write_bills_file(&bills);

    let store = JsonBillStore::new(&path);
    assert_eq!(store.list().expect("list bills"), bills);
}

#[test]
fn json_store_failure_becomes_error_view() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bills.json");
    std::fs::write(&path, r#"[{"id":"a","type":"t","date":"2001-01-01","amount":1,"status":"pending"}]"#)
        .expect("write bills");

    let controller = BillsController::new(
        JsonBillStore::new(&path),
        SpyNavigator::default(),
        SpyPreview::default(),
        RenderOptions::default(),
    );
    let view = controller.view();
    let message = view.error_message().expect("error mode");
    assert!(message.contains("index 0"), "unexpected message: {message}");
}

#[test]
fn currency_symbol_comes_from_options() {
    let controller = BillsController::new(
        MockStore::new(fixture_bills()),
        SpyNavigator::default(),
        SpyPreview::default(),
        RenderOptions {
            currency_symbol: "EUR".into(),
        },
    );
    let view = controller.view();
    assert_eq!(
        view.page().expect("normal mode").rows()[0].amount,
        "400 EUR"
    );
}

#[test]
fn malformed_bill_from_any_store_rejects_the_batch() {
    let mut bills = fixture_bills();
    bills.push(billed_core::Bill::new(
        "a",
        "",
        "",
        "2020-01-01",
        -5.0,
        billed_core::BillStatus::Pending,
    ));
    let controller = BillsController::new(
        MockStore::new(bills),
        SpyNavigator::default(),
        SpyPreview::default(),
        RenderOptions::default(),
    );

    let view = controller.view();
    let message = view.error_message().expect("error mode");
    assert!(message.contains("index 4"), "unexpected message: {message}");
    assert!(message.contains("`type`"), "unexpected message: {message}");
    assert!(view.page().is_none());
}

#[test]
fn negative_amount_rejects_the_batch() {
    let mut bills = fixture_bills();
    bills[1].amount = -1.0;
    let controller = BillsController::new(
        MockStore::new(bills),
        SpyNavigator::default(),
        SpyPreview::default(),
        RenderOptions::default(),
    );

    let message = controller.view().error_message().map(str::to_string).expect("error mode");
    assert!(message.contains("index 1"), "unexpected message: {message}");
    assert!(message.contains("non-negative"), "unexpected message: {message}");
}
