//! Markup fragment rendering for admin-panel collections.
//!
//! # Responsibility
//! - Turn record sequences into HTML fragments for the admin views.
//! - Read fields by name and tolerate records with missing optional fields.
//!
//! # Invariants
//! - All field text is HTML-escaped before interpolation.
//! - Rendering never fails; absent fields render as placeholder text.

use crate::model::record::Record;
use std::fmt::Write;

const MISSING: &str = "&mdash;";

/// Escapes text for safe interpolation into an HTML fragment.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn text_cell(record: &Record, name: &str) -> String {
    record
        .text(name)
        .map(escape_html)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Renders the employee roster as table rows.
pub fn employee_rows(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = write!(
            out,
            "<tr data-id=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            record.id,
            text_cell(record, "name"),
            text_cell(record, "position"),
            text_cell(record, "department"),
            text_cell(record, "email"),
            text_cell(record, "phone"),
        );
    }
    out
}

/// Renders candidate profiles as cards with a skill tag list.
pub fn candidate_cards(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let skills = record
            .list("skills")
            .unwrap_or(&[])
            .iter()
            .map(|skill| format!("<span class=\"tag\">{}</span>", escape_html(skill)))
            .collect::<String>();
        let experience = record
            .number("experience_years")
            .map(|years| format!("{years} yrs"))
            .unwrap_or_else(|| MISSING.to_string());

        let _ = write!(
            out,
            "<article class=\"candidate-card\" data-id=\"{}\">\
             <h3>{}</h3>\
             <p class=\"role\">{}</p>\
             <p class=\"experience\">{}</p>\
             <div class=\"skills\">{}</div>\
             <span class=\"status\">{}</span>\
             </article>",
            record.id,
            text_cell(record, "name"),
            text_cell(record, "applied_for"),
            experience,
            skills,
            text_cell(record, "status"),
        );
    }
    out
}

/// Renders schedule events as list entries ordered as stored.
pub fn schedule_entries(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = write!(
            out,
            "<li class=\"schedule-entry\" data-id=\"{}\">\
             <time>{} {}</time>\
             <span class=\"title\">{}</span>\
             <span class=\"location\">{}</span>\
             </li>",
            record.id,
            text_cell(record, "date"),
            text_cell(record, "time"),
            text_cell(record, "title"),
            text_cell(record, "location"),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{candidate_cards, employee_rows, escape_html};
    use crate::model::record::{FieldValue, Record};

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<b>\"R&D\" dept's</b>"),
            "&lt;b&gt;&quot;R&amp;D&quot; dept&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn sparse_record_renders_placeholders_without_panicking() {
        let record = Record::new(
            9,
            [("name".to_string(), FieldValue::text("Solo Field"))].into(),
        );

        let rows = employee_rows(&[record.clone()]);
        assert!(rows.contains("Solo Field"));
        assert!(rows.contains("&mdash;"));

        let cards = candidate_cards(&[record]);
        assert!(cards.contains("data-id=\"9\""));
        assert!(cards.contains("&mdash;"));
    }

    #[test]
    fn field_text_is_escaped() {
        let record = Record::new(
            1,
            [("name".to_string(), FieldValue::text("<script>alert(1)</script>"))].into(),
        );
        let rows = employee_rows(&[record]);
        assert!(!rows.contains("<script>"));
        assert!(rows.contains("&lt;script&gt;"));
    }
}
