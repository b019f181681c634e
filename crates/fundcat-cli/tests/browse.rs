//! Scripted sessions against the bundled dataset.

use fundcat_cli::browse::{CatalogBrowser, catalog_session};
use fundcat_filter::PageRequest;
use fundcat_model::{CatalogKind, FundingSource, PageResponse};
use fundcat_source::{PageSource, SourceError, StaticSource};

fn browser(query: &str, page_size: u32) -> CatalogBrowser<StaticSource> {
    let session = catalog_session(CatalogKind::Accelerators, query, page_size).unwrap();
    let source = StaticSource::bundled(CatalogKind::Accelerators).unwrap();
    CatalogBrowser::new(session, source)
}

fn run<S: PageSource<FundingSource>>(browser: &mut CatalogBrowser<S>, script: &str) -> String {
    let mut out = Vec::new();
    browser.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn names<S>(browser: &CatalogBrowser<S>) -> Vec<&str>
where
    S: PageSource<FundingSource>,
{
    browser
        .session()
        .items()
        .iter()
        .map(|item| item.name.as_str())
        .collect()
}

struct Unreachable;

impl PageSource<FundingSource> for Unreachable {
    fn fetch_page(
        &self,
        _request: &PageRequest,
    ) -> fundcat_source::Result<PageResponse<FundingSource>> {
        Err(SourceError::Network("connection refused".to_string()))
    }
}

#[test]
fn dropdown_toggle_then_apply() {
    let mut browser = browser("", 3);
    let out = run(&mut browser, "open tags\ntoggle tags Grant\napply\nmore\nquit\nshow\n");

    assert!(out.contains("[x] Grant"), "{out}");
    assert!(out.contains("/accelerators?tags=Grant\n"), "{out}");
    assert!(out.contains("Filters: Tag: Grant\n"), "{out}");
    assert!(out.contains("Showing 3 of 3 (page 1 of 1)."), "{out}");
    assert!(out.contains("Nothing more to load."), "{out}");
    assert_eq!(
        names(&browser),
        ["Civic Tech Accelerator", "Campus Ventures", "GreenPath Climate"]
    );
    assert_eq!(browser.session().dropdowns().open_name(), None);
    // Nothing after `quit` runs.
    assert_eq!(out.matches("/accelerators?tags=Grant\n").count(), 1);
}

#[test]
fn staged_edits_are_listed_until_applied() {
    let mut browser = browser("tags=Equity", 12);
    let out = run(&mut browser, "toggle tags Grant\nshow\ndiscard\nshow\n");
    assert!(out.contains("Grant checked. Type `apply` to use it."), "{out}");
    assert_eq!(out.matches("Not applied: +Tag: Grant").count(), 1, "{out}");
    assert!(!browser.session().has_pending_changes());
}

#[test]
fn load_more_walks_every_page() {
    let mut browser = browser("", 3);
    browser.open();
    assert_eq!(browser.session().items().len(), 3);
    assert!(browser.load_more());
    assert!(browser.load_more());
    assert_eq!(browser.session().items().len(), 7);
    assert!(!browser.load_more());
    assert!(browser.render().contains("Showing 7 of 7 (page 3 of 3)."));
}

#[test]
fn search_and_navigation() {
    let mut browser = browser("", 12);
    let out = run(&mut browser, "search  fintech \nsubmit\n");
    assert!(out.contains("/accelerators?search=fintech\n"), "{out}");
    assert_eq!(names(&browser), ["Northstar Launchpad", "Seedline"]);

    run(&mut browser, "nav tags=Grant\n");
    let session = browser.session();
    assert_eq!(session.url(), "/accelerators?tags=Grant");
    assert_eq!(session.search_text(), "");
    assert_eq!(session.location().history_len(), 1);

    let out = run(&mut browser, "back\nback\n");
    assert!(out.contains("/accelerators?search=fintech\n"), "{out}");
    assert!(out.contains("Nothing to go back to."), "{out}");
    let session = browser.session();
    assert_eq!(session.applied().search_term(), Some("fintech"));
    assert_eq!(session.search_text(), "fintech");
    assert_eq!(names(&browser), ["Northstar Launchpad", "Seedline"]);
}

#[test]
fn chip_removal_and_clearing() {
    let mut browser = browser("tags=Equity,Grant&search=climate", 12);
    let out = run(&mut browser, "remove tags Equity\nclear\nclear\nclear-search\n");
    assert!(out.contains("/accelerators?tags=Grant&search=climate\n"), "{out}");
    assert!(out.contains("/accelerators?search=climate\n"), "{out}");
    assert!(out.contains("Filters unchanged."), "{out}");
    assert_eq!(browser.session().url(), "/accelerators");
    assert_eq!(browser.session().items().len(), 7);
}

#[test]
fn mistakes_are_reported_and_the_session_continues() {
    let mut browser = browser("", 12);
    let out = run(
        &mut browser,
        "toggle stage Seed\nopen search\nfly\nremove tags Equity\nreset\n",
    );
    assert!(out.contains("error: unknown category: stage"), "{out}");
    assert!(out.contains("error: `search` has no options"), "{out}");
    assert!(out.contains("error: unknown command `fly`, type `help`"), "{out}");
    assert_eq!(out.matches("Filters unchanged.").count(), 2, "{out}");
}

#[test]
fn unreachable_source_shows_placeholder() {
    let session = catalog_session(CatalogKind::Accelerators, "tags=Grant", 12).unwrap();
    let mut browser = CatalogBrowser::new(session, Unreachable);
    let out = run(&mut browser, "quit\n");

    assert!(
        out.contains(
            "Could not load results (network error: connection refused). Showing sample listings."
        ),
        "{out}"
    );
    assert_eq!(names(&browser)[0], "Sample Accelerator");
    assert!(!browser.session().results().has_more());
    assert_eq!(browser.session().url(), "/accelerators?tags=Grant");
}
