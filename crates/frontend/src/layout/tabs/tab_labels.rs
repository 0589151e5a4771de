//! Tab labels - single source of truth for tab titles.

/// Returns the human-readable tab title for a given key.
///
/// Fallback: empty string (callers fall back to the key itself).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_project" => "Projects",
        "a002_cost_index" => "Cost indexes",
        "a003_estimation" => "Estimation workbench",
        "a004_cost_category" => "Cost categories",
        "a005_cost_record" => "Cost records",

        // ── Use cases (u5xx) ──────────────────────────────────────────────
        "u501_tender_check" => "Tender quality check",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_cost_overview" => "Cost overview",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Builds a detail tab title: `<entity> · <identifier>`.
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
