use std::fmt::Write as _;

use crate::client::list_controller::ListController;
use crate::services::advocate_query::SortOrder;

const SPECIALTIES_SHOWN: usize = 2;

/// `(555) 123-4567` for ten digits, anything else verbatim.
pub fn format_phone(raw: &str) -> String {
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("({}) {}-{}", &raw[..3], &raw[3..6], &raw[6..])
    } else {
        raw.to_string()
    }
}

/// First two specialties plus a `+N more` suffix.
pub fn summarize_specialties(specialties: &[String]) -> String {
    let shown = specialties
        .iter()
        .take(SPECIALTIES_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    match specialties.len().saturating_sub(SPECIALTIES_SHOWN) {
        0 => shown,
        more => format!("{shown} +{more} more"),
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn render(controller: &ListController) -> String {
    let mut out = String::new();

    if !controller.has_searched() {
        out.push_str("No search yet. Set filters and run `search`.\n");
        return out;
    }
    if controller.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }

    let sort_label = match controller.sort() {
        Some(s) => format!(
            "{} {}",
            s.column.as_str(),
            if s.order == SortOrder::Desc { "↓" } else { "↑" }
        ),
        None => "none".to_string(),
    };

    let _ = writeln!(
        out,
        "{:<12} {:<12} {:<16} {:<6} {:<44} {:>4} {:<14}",
        "First", "Last", "City", "Degree", "Specialties", "Yrs", "Phone"
    );
    for a in controller.results() {
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:<16} {:<6} {:<44} {:>4} {:<14}",
            truncate(&a.first_name, 12),
            truncate(&a.last_name, 12),
            truncate(&a.city, 16),
            truncate(&a.degree, 6),
            truncate(&summarize_specialties(&a.specialties), 44),
            a.years_of_experience,
            format_phone(&a.phone_number),
        );
    }
    if controller.results().is_empty() {
        out.push_str("No advocates match these filters.\n");
    }

    let p = controller.pagination();
    let _ = writeln!(
        out,
        "page {}/{} · {} per page · {} total · sort {}",
        p.page,
        p.total_pages.max(1),
        p.page_size,
        p.total_count,
        sort_label
    );
    out
}
