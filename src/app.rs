//! Bills page controller: wires the store, navigation and the receipt viewer
//! around the pure renderer.

use std::fmt;

use billed_domain::Bill;
use serde::Serialize;

use crate::{
    ordering::{format_short, normalize},
    render::{render, BillRow, BillsState, BillsView, RenderOptions, PREVIEW_TITLE},
    errors::BillsError,
    store::{self, BillStore},
};

/// Pages the front end can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator {
    fn navigate_to(&self, route: Route);
}

/// Receipt viewer. Showing the file itself is the implementor's business.
pub trait FilePreview {
    fn show(&self, url: &str, title: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate_to(&self, route: Route) {
        (**self).navigate_to(route);
    }
}

impl<T: FilePreview + ?Sized> FilePreview for &T {
    fn show(&self, url: &str, title: &str) {
        (**self).show(url, title);
    }
}

pub struct BillsController<S, N, P> {
    store: S,
    navigator: N,
    preview: P,
    options: RenderOptions,
}

impl<S, N, P> BillsController<S, N, P>
where
    S: BillStore,
    N: Navigator,
    P: FilePreview,
{
    pub fn new(store: S, navigator: N, preview: P, options: RenderOptions) -> Self {
        Self {
            store,
            navigator,
            preview,
            options,
        }
    }

    /// Fetches the current bills and renders them.
    ///
    /// A store failure becomes the error view carrying the store's message.
    pub fn view(&self) -> BillsView {
        match self.fetch_bills() {
            Ok(bills) => render(BillsState::loaded(&bills), &self.options),
            Err(message) => render(BillsState::failed(&message), &self.options),
        }
    }

    /// Bills as served by the store, with the short display date filled in
    /// for every record whose date parses.
    ///
    /// The whole batch is rejected on the first bill that fails validation.
    pub fn fetch_bills(&self) -> Result<Vec<Bill>, String> {
        let bills = self.store.list().map_err(|err| {
            tracing::warn!(error = %err, "failed to fetch bills");
            err.message().to_string()
        })?;
        for (index, bill) in bills.iter().enumerate() {
            store::validate(bill).map_err(|reason| {
                tracing::warn!(index, %reason, "rejecting bill batch");
                BillsError::MalformedRecord { index, reason }.to_string()
            })?;
        }
        tracing::info!(count = bills.len(), "fetched bills");
        Ok(bills.into_iter().map(with_display_date).collect())
    }

    pub fn handle_click_new_bill(&self) {
        tracing::debug!(route = %Route::NewBill, "navigating to new bill form");
        self.navigator.navigate_to(Route::NewBill);
    }

    /// Opens the receipt of `row`. Returns `false` when the row has no file.
    pub fn handle_click_icon_eye(&self, row: &BillRow) -> bool {
        match &row.view_file {
            Some(action) => {
                tracing::debug!(bill = %row.bill_id, url = %action.url, "opening receipt preview");
                self.preview.show(&action.url, PREVIEW_TITLE);
                true
            }
            None => false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn with_display_date(mut bill: Bill) -> Bill {
    if bill.formatted_date.is_none() {
        if let Ok(date) = normalize(&bill.date) {
            bill.formatted_date = Some(format_short(date));
        }
    }
    bill
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use billed_domain::BillStatus;

    use super::*;
    use crate::store::MockStore;

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<Route>>);

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, route: Route) {
            self.0.borrow_mut().push(route);
        }
    }

    struct NoPreview;

    impl FilePreview for NoPreview {
        fn show(&self, _url: &str, _title: &str) {}
    }

    #[test]
    fn display_dates_are_shortened_but_sorting_uses_raw_dates() {
        let store = MockStore::new(vec![
            Bill::new("a", "Transports", "taxi", "2001-01-01", 1.0, BillStatus::Pending),
            Bill::new("b", "Transports", "train", "2023-04-04", 1.0, BillStatus::Pending),
            Bill::new("c", "Transports", "bus", "bientôt", 1.0, BillStatus::Pending),
        ]);
        let navigator = RecordingNavigator::default();
        let controller = BillsController::new(store, &navigator, NoPreview, RenderOptions::default());

        let view = controller.view();
        let dates = view.page().expect("normal").column(crate::render::RowField::Date);
        assert_eq!(dates, vec!["4 Avr. 23", "1 Jan. 01", "bientôt"]);
    }

    #[test]
    fn new_bill_navigates_once() {
        let navigator = RecordingNavigator::default();
        let controller = BillsController::new(
            MockStore::default(),
            &navigator,
            NoPreview,
            RenderOptions::default(),
        );
        controller.handle_click_new_bill();
        assert_eq!(*navigator.0.borrow(), vec![Route::NewBill]);
    }

    #[test]
    fn routes_have_hash_paths() {
        assert_eq!(Route::NewBill.path(), "#employee/bill/new");
        assert_eq!(Route::Bills.to_string(), "#employee/bills");
    }
}
