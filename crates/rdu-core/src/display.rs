use chrono::{DateTime, NaiveDateTime};

const EMPTY_DATE: &str = "—";

/// Whole rupees with Indian digit grouping: `₹12,34,567`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(rounded.abs() as u64))
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// `19 Oct 2026, 02:30 pm`. Timestamps keep the wall-clock time they were
/// written in; empty or unparseable input renders as a dash.
pub fn format_date(iso: Option<&str>) -> String {
    let Some(raw) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return EMPTY_DATE.to_string();
    };

    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-d %b %Y, %I:%M %P").to_string(),
        None => {
            tracing::debug!(value = raw, "Unparseable timestamp");
            EMPTY_DATE.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn program_type_label(program_type: &str) -> &str {
    match program_type {
        "SELF_PACED" => "Self-Paced",
        "LIVE" => "Live Sessions",
        "MENTORSHIP" => "1-to-1 Mentorship",
        other => other,
    }
}

pub fn program_type_badge(program_type: &str) -> &'static str {
    match program_type {
        "SELF_PACED" => "badge-green",
        "LIVE" => "badge-blue",
        "MENTORSHIP" => "badge-gold",
        _ => "badge-neutral",
    }
}

pub fn status_label(status: &str) -> &str {
    match status {
        "PAID" => "Active",
        "PENDING" => "Pending Payment",
        other => other,
    }
}

pub fn status_badge(status: &str) -> &'static str {
    match status {
        "PAID" => "badge-green",
        "PENDING" => "badge-gold",
        _ => "badge-neutral",
    }
}
