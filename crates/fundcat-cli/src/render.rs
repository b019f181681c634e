//! Terminal rendering of catalog views.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fundcat_filter::{CatalogSession, Chip, Location, PaginatedResultCache};
use fundcat_model::{
    CatalogKind, Category, CategorySchema, FilterChange, FilterSet, FundingSource, ModelError,
    PageResponse,
};

/// Every catalog with its facet categories.
pub fn domains_table() -> Result<Table, ModelError> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Catalog"),
        header_cell("Path"),
        header_cell("Filters"),
    ]);
    apply_table_style(&mut table);
    for kind in CatalogKind::ALL {
        let domain = kind.domain()?;
        let filters = domain
            .schema
            .iter()
            .map(|category| category.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(domain.title()).add_attribute(Attribute::Bold),
            Cell::new(&domain.path),
            Cell::new(filters),
        ]);
    }
    Ok(table)
}

/// One row per record, one column per facet of the schema.
pub fn results_table(items: &[FundingSource], schema: &CategorySchema) -> Table {
    let mut header = vec![header_cell("#"), header_cell("Name")];
    header.extend(schema.multi_select().map(|category| header_cell(&category.label)));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, item) in items.iter().enumerate() {
        let mut row = vec![dim_cell(index + 1), Cell::new(&item.name)];
        row.extend(schema.multi_select().map(|category| {
            let values = item.facet_values(&category.name);
            if values.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(values.join(", "))
            }
        }));
        table.add_row(row);
    }
    table
}

/// `Tag: Grant · Search: lab`, or `none`.
pub fn chip_line(chips: &[Chip]) -> String {
    if chips.is_empty() {
        return "none".to_string();
    }
    chips
        .iter()
        .map(|chip| chip.label.as_str())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Staged edits as `+Tag: Grant, -Tag: Equity`, or `None` when there are none.
pub fn pending_line(changes: &[FilterChange], schema: &CategorySchema) -> Option<String> {
    if changes.is_empty() {
        return None;
    }
    let line = changes
        .iter()
        .map(|change| {
            let sign = match change {
                FilterChange::Added { .. } => '+',
                FilterChange::Removed { .. } => '-',
            };
            let label = schema
                .get(change.category())
                .map_or(change.category(), |category| category.label.as_str());
            format!("{sign}{label}: {}", change.value())
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(line)
}

/// An open facet dropdown with the staged checked state.
pub fn dropdown_menu(category: &Category, staged: &FilterSet) -> String {
    let mut menu = format!("{} ▾\n", category.label);
    for option in &category.options {
        let mark = if staged.contains(&category.name, option) {
            'x'
        } else {
            ' '
        };
        let _ = writeln!(menu, "  [{mark}] {option}");
    }
    menu
}

/// Loaded/total counts and any fetch failure.
pub fn status_line<T: Clone>(results: &PaginatedResultCache<T>) -> String {
    if let Some(failure) = results.error() {
        return if failure.placeholder {
            format!(
                "Could not load results ({}). Showing sample listings.",
                failure.message
            )
        } else {
            format!(
                "Could not load page {} ({}). Loaded results are kept; try again.",
                failure.page, failure.message
            )
        };
    }
    if results.is_loading() {
        return "Loading…".to_string();
    }
    if results.items().is_empty() {
        return "No funding sources match these filters.".to_string();
    }
    let pages = PageResponse::<T>::page_count(results.total_count(), results.page_size());
    let mut line = format!(
        "Showing {} of {} (page {} of {}).",
        results.items().len(),
        results.total_count(),
        results.page(),
        pages
    );
    if results.has_more() {
        line.push_str(" More available.");
    }
    line
}

/// The full view: URL, active filters, pending edits, results and status.
pub fn view<L: Location>(session: &CatalogSession<FundingSource, L>) -> String {
    let schema = &session.domain().schema;
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.url());
    let _ = writeln!(out, "Filters: {}", chip_line(&session.chips()));
    if let Some(pending) = pending_line(&session.pending_changes(), schema) {
        let _ = writeln!(out, "Not applied: {pending}");
    }
    if !session.items().is_empty() {
        let _ = writeln!(out, "{}", results_table(session.items(), schema));
    }
    let _ = writeln!(out, "{}", status_line(session.results()));
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(180);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
