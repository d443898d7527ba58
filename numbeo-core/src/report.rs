//! Console rendering of a [`CityPricesResult`].
//!
//! Pure string building, no I/O and no failure paths: any well-formed
//! result renders, with absent fields shown as "N/A".

use std::fmt::Write;

use crate::model::{CityPricesResult, PriceItem};

const NA: &str = "N/A";

const NAME_WIDTH: usize = 50;
const AVG_WIDTH: usize = 12;
const RANGE_WIDTH: usize = 22;
const POINTS_WIDTH: usize = 12;

// " name │ avg │ range │ points " between the ║ borders.
const INNER_WIDTH: usize = NAME_WIDTH + AVG_WIDTH + RANGE_WIDTH + POINTS_WIDTH + 11;

const BANNER_WIDTH: usize = 78;

/// Renders the full report: banner, header block, then the price table
/// (or a "no data" line when the item list is empty).
pub fn format_report(result: &CityPricesResult) -> String {
    let mut out = String::new();

    push_banner(&mut out);
    push_header(&mut out, result);

    if result.prices.is_empty() {
        out.push_str("No price data available for this city.\n");
        return out;
    }

    push_table(&mut out, result);

    let _ = writeln!(out);
    let _ = writeln!(out, "Total items: {}", result.prices.len());

    out
}

fn push_banner(out: &mut String) {
    let _ = writeln!(out, "╔{}╗", "═".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "║{:^BANNER_WIDTH$}║", "NUMBEO PRICE INFORMATION");
    let _ = writeln!(out, "╚{}╝", "═".repeat(BANNER_WIDTH));
    let _ = writeln!(out);
}

fn push_header(out: &mut String, result: &CityPricesResult) {
    let _ = writeln!(out, "City:        {}", result.city_name.as_deref().unwrap_or(NA));
    let _ = writeln!(out, "Country:     {}", result.country.as_deref().unwrap_or(NA));
    let _ = writeln!(out, "Currency:    {}", result.currency.as_deref().unwrap_or(NA));

    if let (Some(month), Some(year)) = (result.month_last_update, result.year_last_update) {
        let _ = writeln!(out, "Last Update: {month}/{year}");
    }
    if let Some(contributors) = result.contributors_12months {
        let _ = writeln!(out, "Contributors (12 months): {contributors}");
    }

    let _ = writeln!(out);
}

fn push_table(out: &mut String, result: &CityPricesResult) {
    let currency = result.currency.as_deref().unwrap_or(NA);

    let _ = writeln!(out, "╔{}╗", "═".repeat(INNER_WIDTH));
    let _ = writeln!(out, "║{:^INNER_WIDTH$}║", "PRICES");
    let _ = writeln!(out, "╠{}╣", "═".repeat(INNER_WIDTH));
    let _ = writeln!(
        out,
        "║ {:<NAME_WIDTH$} │ {:<AVG_WIDTH$} │ {:<RANGE_WIDTH$} │ {:<POINTS_WIDTH$} ║",
        "Item", "Average", "Range (Low - High)", "Data Points"
    );
    let _ = writeln!(out, "╠{}╣", "═".repeat(INNER_WIDTH));

    // Consecutive items with the same category form one section; unset
    // counts as its own category.
    let mut current_category: Option<Option<&str>> = None;

    for item in &result.prices {
        let category = item.category.as_deref();
        if current_category != Some(category) {
            current_category = Some(category);
            push_category_header(out, category.unwrap_or(NA));
        }
        push_item_row(out, item, currency);
    }

    let _ = writeln!(out, "╚{}╝", "═".repeat(INNER_WIDTH));
}

fn push_category_header(out: &mut String, category: &str) {
    let label = format!("  {}", category.to_uppercase());
    let _ = writeln!(out, "╟{}╢", "─".repeat(INNER_WIDTH));
    let _ = writeln!(out, "║ {:<width$} ║", label, width = INNER_WIDTH - 2);
    let _ = writeln!(out, "╟{}╢", "─".repeat(INNER_WIDTH));
}

fn push_item_row(out: &mut String, item: &PriceItem, currency: &str) {
    let name = truncate(item.item_name.as_deref().unwrap_or(NA), NAME_WIDTH);

    let average = item
        .average_price
        .map_or_else(|| NA.to_string(), |avg| format!("{currency} {avg:.2}"));

    let range = match (item.lowest_price, item.highest_price) {
        (Some(low), Some(high)) => format!("{low:.2} - {high:.2}"),
        _ => NA.to_string(),
    };

    let data_points = item
        .data_points
        .map_or_else(|| NA.to_string(), |points| points.to_string());

    let _ = writeln!(
        out,
        "║ {name:<NAME_WIDTH$} │ {average:<AVG_WIDTH$} │ {range:<RANGE_WIDTH$} │ {data_points:>POINTS_WIDTH$} ║"
    );
}

/// Truncates to `max` characters, replacing the tail with "..." when the
/// input is longer. Counts chars, not bytes, so multi-byte names are safe.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max - 3).collect();
    format!("{head}...")
}
