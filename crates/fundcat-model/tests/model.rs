//! Tests for fundcat-model types.

use fundcat_model::{
    CatalogKind, Category, CategorySchema, FilterSet, FundingSource, ModelError, PageResponse,
    QueryRecord,
};

#[test]
fn presets_share_status_options() {
    let accelerators = CatalogKind::Accelerators.domain().unwrap();
    let investors = CatalogKind::MicroInvestors.domain().unwrap();
    assert_eq!(
        accelerators.schema.get("applicationStatus").unwrap().options,
        investors.schema.get("applicationStatus").unwrap().options
    );
    assert!(investors.schema.get("affiliation").is_none());
}

#[test]
fn filter_set_over_preset_schema() {
    let domain = CatalogKind::Incubators.domain().unwrap();
    let mut filters = FilterSet::empty(&domain.schema);
    filters.toggle("tags", "Lab Access").unwrap();
    filters.toggle("fundingRange", "Under $50K").unwrap();
    assert!(filters.has_active_filters());
    assert_eq!(filters.values("fundingRange"), ["Under $50K"]);
    assert_eq!(
        filters.toggle("equityRange", "0%"),
        Err(ModelError::UnknownCategory {
            name: "equityRange".to_string()
        })
    );
}

#[test]
fn schema_from_custom_categories() {
    let schema = CategorySchema::new(vec![
        Category::multi_select("region", "Region", ["EU", "US"]),
        Category::search(),
    ])
    .unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.get("region").unwrap().label, "Region");
}

#[test]
fn page_response_of_funding_sources() {
    let json = r#"{
        "items": [
            {"id": "inc-1", "name": "Campus Forge", "affiliation": "University", "tags": ["Lab Access"]}
        ],
        "totalCount": 1,
        "currentPage": 1,
        "totalPages": 1
    }"#;
    let page: PageResponse<FundingSource> = serde_json::from_str(json).unwrap();
    assert_eq!(page.items[0].name, "Campus Forge");
    assert_eq!(page.items[0].facet_values("affiliation"), ["University"]);
    assert!(!page.has_more());
}

#[test]
fn query_record_round_trips_through_string() {
    let record = QueryRecord::parse("affiliation=Govt-backed,Private&tags=Equity&search=fintech");
    let again = QueryRecord::parse(&record.to_query_string());
    assert_eq!(record, again);
    assert_eq!(again.get("search"), Some("fintech"));
}
