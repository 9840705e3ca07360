//! Record display formatting
//!
//! Formats records for terminal output in table and detail views. Secrets are
//! masked unless explicitly requested.

use crate::models::Record;

const MASK: &str = "********";

fn secret_text(record: &Record, show_secrets: bool) -> &str {
    if show_secrets {
        &record.secret
    } else if record.secret.is_empty() {
        ""
    } else {
        MASK
    }
}

fn column_width<'r>(values: impl Iterator<Item = &'r str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Format numbered records as a table
///
/// Each row carries the record's 1-based store position, which is what
/// `show`, `edit` and `remove` take.
pub fn format_record_list(rows: &[(usize, &Record)], show_secrets: bool) -> String {
    if rows.is_empty() {
        return "No records found.".to_string();
    }

    let num_width = rows
        .iter()
        .map(|(pos, _)| pos.to_string().len())
        .max()
        .unwrap_or(1);
    let title_width = column_width(rows.iter().map(|(_, r)| r.title.as_str()), "Title");
    let account_width = column_width(rows.iter().map(|(_, r)| r.account.as_str()), "Account");
    let secret_width =
        column_width(rows.iter().map(|(_, r)| secret_text(r, show_secrets)), "Secret");

    let mut output = String::new();
    output.push_str(&format!(
        "{:>num_width$}  {:<title_width$}  {:<account_width$}  {:<secret_width$}  {}\n",
        "#", "Title", "Account", "Secret", "Category",
    ));
    output.push_str(&format!(
        "{:->num_width$}  {:-<title_width$}  {:-<account_width$}  {:-<secret_width$}  {:-<8}\n",
        "", "", "", "", "",
    ));

    for (position, record) in rows {
        output.push_str(&format!(
            "{:>num_width$}  {:<title_width$}  {:<account_width$}  {:<secret_width$}  {}\n",
            position,
            record.title,
            record.account,
            secret_text(record, show_secrets),
            record.category,
        ));
    }

    output.push_str(&format!("\n{} record(s)\n", rows.len()));
    output
}

/// Format a single record's details
pub fn format_record_details(position: usize, record: &Record, show_secrets: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Record #{}: {}\n", position, record.title));
    output.push_str(&format!("  Account:  {}\n", record.account));
    output.push_str(&format!("  Secret:   {}\n", secret_text(record, show_secrets)));
    output.push_str(&format!("  Category: {}\n", record.category));

    if !record.notes.is_empty() {
        output.push('\n');
        output.push_str("  Notes:\n");
        for line in record.notes.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }

    output
}

/// Format the category list, one per line
pub fn format_category_list(categories: &[String]) -> String {
    let mut output = String::new();
    for category in categories {
        output.push_str(&format!("  {}\n", category));
    }
    output
}
