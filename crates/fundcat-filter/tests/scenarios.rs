//! End-to-end behaviour of a catalog view over the bundled domain presets.

use fundcat_filter::{CatalogSession, MemoryLocation, Resolution, query};
use fundcat_model::{CatalogKind, FilterSet, PageResponse, QueryRecord};

fn session(kind: CatalogKind, query: &str) -> CatalogSession<u32, MemoryLocation> {
    let domain = kind.domain().unwrap();
    let location = MemoryLocation::new(domain.path.clone()).with_query(QueryRecord::parse(query));
    CatalogSession::new(domain, location, 12).with_placeholder(vec![900, 901])
}

fn page(range: std::ops::Range<u32>, current_page: u32, total_pages: u32) -> PageResponse<u32> {
    PageResponse {
        items: range.collect(),
        total_count: 30,
        current_page,
        total_pages,
    }
}

#[test]
fn decode_fills_every_category_of_the_accelerator_preset() {
    let schema = CatalogKind::Accelerators.domain().unwrap().schema;
    let decoded = query::decode(
        &QueryRecord::parse("affiliation=Govt-backed,Private&tags=Equity"),
        &schema,
    );

    let mut expected = FilterSet::empty(&schema);
    expected.insert("affiliation", "Govt-backed").unwrap();
    expected.insert("affiliation", "Private").unwrap();
    expected.insert("tags", "Equity").unwrap();
    assert_eq!(decoded, expected);

    let categories: Vec<&str> = decoded.iter().map(|(name, _)| name).collect();
    assert_eq!(
        categories,
        [
            "affiliation",
            "applicationStatus",
            "tags",
            "equityRange",
            "fundingRange",
            "durationRange",
            "search",
        ]
    );
}

#[test]
fn removing_a_chip_leaves_the_other_tag() {
    let mut session = session(CatalogKind::Accelerators, "tags=Equity,Grant");
    session.mount();

    let request = session.remove_value("tags", "Equity").unwrap();
    assert!(request.is_some());
    assert_eq!(session.applied().values("tags"), ["Grant"]);

    let chips = session.chips();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].label, "Tag: Grant");
    assert_eq!(session.url(), "/accelerators?tags=Grant");
}

#[test]
fn empty_option_keeps_url_and_applied_in_step() {
    let mut session = session(CatalogKind::Accelerators, "tags=Equity");
    session.mount();

    assert!(session.toggle_option("tags", "").is_err());
    assert!(session.apply_staged().is_none());
    assert_eq!(session.url(), "/accelerators?tags=Equity");

    let applied = session.applied().clone();
    session.location_changed();
    assert_eq!(session.applied(), &applied);
}

#[test]
fn back_navigation_restores_the_previous_filters() {
    let mut session = session(CatalogKind::Incubators, "tags=Grant");
    session.mount();
    session
        .location_mut()
        .navigate(QueryRecord::parse("affiliation=Private"));
    session.location_changed();
    assert!(session.applied().values("tags").is_empty());

    assert!(session.location_mut().back());
    let request = session.location_changed();
    assert_eq!(request.filters.values("tags"), ["Grant"]);
    assert_eq!(session.url(), "/incubators?tags=Grant");
}

#[test]
fn load_more_accumulates_thirty_items() {
    let mut session = session(CatalogKind::Accelerators, "");
    let request = session.mount();
    session.resolve(request.token, Ok::<_, String>(page(0..12, 1, 3)));
    assert!(session.results().has_more());
    assert_eq!(session.items().len(), 12);

    let request = session.load_more().unwrap();
    assert_eq!(request.page, 2);
    session.resolve(request.token, Ok::<_, String>(page(12..24, 2, 3)));
    assert_eq!(session.items().len(), 24);
    assert!(session.results().has_more());

    let request = session.load_more().unwrap();
    session.resolve(request.token, Ok::<_, String>(page(24..30, 3, 3)));
    assert_eq!(session.items().len(), 30);
    assert!(!session.results().has_more());
    assert!(session.load_more().is_none());
}

#[test]
fn superseded_response_is_never_rendered() {
    let mut session = session(CatalogKind::Accelerators, "");
    session.mount();

    session.toggle_option("tags", "Equity").unwrap();
    let first = session.apply_staged().unwrap();
    session.toggle_option("tags", "Grant").unwrap();
    let second = session.apply_staged().unwrap();
    assert_ne!(first.token, second.token);
    assert_eq!(session.results().current_token(), second.token);

    let late = session.resolve(first.token, Ok::<_, String>(page(100..112, 1, 1)));
    assert_eq!(late, Resolution::Stale);
    assert!(session.items().is_empty());

    session.resolve(second.token, Ok::<_, String>(page(0..12, 1, 1)));
    assert_eq!(session.items().first(), Some(&0));
    assert!(!session.items().contains(&100));
}

#[test]
fn clear_filters_keeps_the_applied_search() {
    let mut session = session(
        CatalogKind::Accelerators,
        "tags=Equity&affiliation=Private&search=seed",
    );
    session.mount();

    session.clear_filters().unwrap();
    let applied = session.applied();
    assert!(!applied.has_active_filters());
    assert_eq!(applied.values("search"), ["seed"]);
    assert_eq!(session.url(), "/accelerators?search=seed");
}

#[test]
fn first_page_failure_falls_back_without_touching_filters() {
    let mut session = session(CatalogKind::Incubators, "tags=Grant");
    let request = session.mount();

    let resolution =
        session.resolve(request.token, Err::<PageResponse<u32>, _>("connection refused"));
    assert_eq!(resolution, Resolution::Placeholder);
    assert_eq!(session.items(), [900, 901]);
    assert!(!session.results().has_more());
    assert!(session.error().is_some_and(|failure| failure.placeholder));
    assert_eq!(session.applied().values("tags"), ["Grant"]);
    assert_eq!(session.url(), "/incubators?tags=Grant");
}

#[test]
fn search_lane_is_independent_of_apply() {
    let mut session = session(CatalogKind::MicroInvestors, "");
    session.mount();

    session.set_search_text("  climate ");
    session.toggle_option("stage", "Seed").unwrap();
    assert!(session.apply_staged().is_some());
    assert!(!session.has_active_search());

    assert!(session.commit_search().unwrap().is_some());
    assert_eq!(session.applied().search_term(), Some("climate"));
    assert_eq!(session.url(), "/micro-investors?stage=Seed&search=climate");

    assert!(session.clear_search().is_some());
    assert!(!session.has_active_search());
    assert!(session.has_active_filters());
}

#[test]
fn views_do_not_share_dropdown_state() {
    let mut accelerators = session(CatalogKind::Accelerators, "");
    let mut incubators = session(CatalogKind::Incubators, "");
    accelerators.dropdowns_mut().toggle("tags");
    incubators.dropdowns_mut().toggle("fundingRange");
    assert!(accelerators.dropdowns().is_open("tags"));
    assert!(incubators.dropdowns().is_open("fundingRange"));
}

#[test]
fn url_and_chip_row_after_a_full_edit() {
    let mut session = session(CatalogKind::Accelerators, "");
    session.mount();
    session.toggle_option("affiliation", "Govt-backed").unwrap();
    session.toggle_option("affiliation", "Private").unwrap();
    session.toggle_option("tags", "Equity").unwrap();
    session.apply_staged().unwrap();
    session.set_search_text("fintech");
    session.commit_search().unwrap().unwrap();

    insta::assert_snapshot!(
        session.url(),
        @"/accelerators?affiliation=Govt-backed%2CPrivate&tags=Equity&search=fintech"
    );

    let row: Vec<String> = session.chips().into_iter().map(|chip| chip.label).collect();
    insta::assert_snapshot!(
        row.join(" | "),
        @"Affiliation: Govt-backed | Affiliation: Private | Tag: Equity | Search: fintech"
    );
}
