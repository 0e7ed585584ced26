//! Command line front end: renders a bills file to the terminal or to HTML.

use std::{
    cell::RefCell,
    io::{self, Write},
    path::PathBuf,
};

use billed_config::{Config, ConfigManager};

use crate::{
    app::{BillsController, FilePreview, Navigator, Route},
    errors::BillsError,
    render::{html::render_html, render, text::render_text, BillsState, BillsView, RenderOptions},
    store::{JsonBillStore, NetworkError},
    utils::build_info,
};

const USAGE: &str = "usage: billed_cli [--html] [--plain] [--loading] [--error MSG] \
[--config PATH] [--new-bill] [--view ROW] [BILLS_JSON]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub html: bool,
    pub plain: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub config: Option<PathBuf>,
    pub new_bill: bool,
    /// 1-based row whose receipt should be opened.
    pub view_row: Option<usize>,
    pub bills: Option<PathBuf>,
    pub show_version: bool,
    pub show_help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, BillsError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => options.html = true,
            "--plain" => options.plain = true,
            "--loading" => options.loading = true,
            "--new-bill" => options.new_bill = true,
            "--version" | "-V" => options.show_version = true,
            "--help" | "-h" => options.show_help = true,
            "--error" => options.error = Some(value_for(&arg, args.next())?),
            "--config" => options.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--view" => {
                let raw = value_for(&arg, args.next())?;
                let row = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row > 0)
                    .ok_or_else(|| {
                        BillsError::InvalidArgument(format!("`--view` expects a row number, got `{raw}`"))
                    })?;
                options.view_row = Some(row);
            }
            flag if flag.starts_with('-') => {
                return Err(BillsError::InvalidArgument(format!(
                    "unknown option `{flag}`\n{USAGE}"
                )))
            }
            path => {
                if options.bills.replace(PathBuf::from(path)).is_some() {
                    return Err(BillsError::InvalidArgument(format!(
                        "only one bills file may be given\n{USAGE}"
                    )));
                }
            }
        }
    }
    Ok(options)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, BillsError> {
    value.ok_or_else(|| BillsError::InvalidArgument(format!("`{flag}` expects a value")))
}

/// Entry point used by the `billed_cli` binary.
pub fn run_cli() -> Result<(), BillsError> {
    let options = parse_args(std::env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&options, &mut out)
}

pub fn run<W: Write>(options: &CliOptions, out: &mut W) -> Result<(), BillsError> {
    if options.show_help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    if options.show_version {
        let build = build_info::current();
        writeln!(out, "billed_cli {} ({} {})", build.version, build.git_hash, build.profile)?;
        return Ok(());
    }

    let config = load_config(options)?;
    let render_options = RenderOptions::from(&config);
    let plain = options.plain || config.plain_mode;

    if options.loading {
        return present(&render(BillsState::loading(), &render_options), options.html, plain, out);
    }
    if let Some(message) = &options.error {
        return present(&render(BillsState::failed(message), &render_options), options.html, plain, out);
    }

    let bills_path = options
        .bills
        .clone()
        .or_else(|| config.store_path.clone())
        .ok_or_else(|| BillsError::InvalidArgument(format!("no bills file given\n{USAGE}")))?;

    let navigator = TerminalNavigator::default();
    let preview = TerminalPreview::default();
    let controller = BillsController::new(
        JsonBillStore::new(bills_path),
        &navigator,
        &preview,
        render_options,
    );

    if options.new_bill {
        controller.handle_click_new_bill();
        if let Some(route) = navigator.last.borrow().as_ref() {
            writeln!(out, "-> {route}")?;
        }
        return Ok(());
    }

    let view = controller.view();
    if let Some(message) = view.error_message() {
        present(&view, options.html, plain, out)?;
        return Err(NetworkError::new(message).into());
    }
    if let Some(row_number) = options.view_row {
        return open_receipt(&controller, &view, row_number, &preview, out);
    }
    present(&view, options.html, plain, out)
}

fn load_config(options: &CliOptions) -> Result<Config, BillsError> {
    let manager = match &options.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::from_default_location()?,
    };
    let config = manager.load()?;
    tracing::debug!(path = %manager.config_path().display(), "configuration loaded");
    Ok(config)
}

fn present<W: Write>(view: &BillsView, html: bool, plain: bool, out: &mut W) -> Result<(), BillsError> {
    let rendered = if html {
        render_html(view)
    } else {
        render_text(view, plain)
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn open_receipt<W: Write>(
    controller: &BillsController<JsonBillStore, &TerminalNavigator, &TerminalPreview>,
    view: &BillsView,
    row_number: usize,
    preview: &TerminalPreview,
    out: &mut W,
) -> Result<(), BillsError> {
    let Some(page) = view.page() else {
        return present(view, false, true, out);
    };
    let row = row_number
        .checked_sub(1)
        .and_then(|idx| page.rows().get(idx));
    let row = row.ok_or_else(|| {
        BillsError::InvalidArgument(format!(
            "row {row_number} does not exist ({} bills)",
            page.rows().len()
        ))
    })?;
    if !controller.handle_click_icon_eye(row) {
        writeln!(out, "{}: no receipt attached", row.name)?;
        return Ok(());
    }
    if let Some((title, url)) = preview.shown.borrow().as_ref() {
        writeln!(out, "{title}: {url}")?;
    }
    Ok(())
}

#[derive(Default)]
struct TerminalNavigator {
    last: RefCell<Option<Route>>,
}

impl Navigator for TerminalNavigator {
    fn navigate_to(&self, route: Route) {
        self.last.replace(Some(route));
    }
}

#[derive(Default)]
struct TerminalPreview {
    shown: RefCell<Option<(String, String)>>,
}

impl FilePreview for TerminalPreview {
    fn show(&self, url: &str, title: &str) {
        self.shown.replace(Some((title.to_string(), url.to_string())));
    }
}
