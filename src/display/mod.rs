//! Terminal rendering for summaries
//!
//! Stands in for the dashboard's charting layer: summary tables plus simple
//! bar charts drawn with block characters.

use crate::reports::Summary;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render the full summary for terminal display
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();
    let currency = summary.currency.as_str();

    // Expense rows
    output.push_str("Expenses\n");
    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:<28} {:>12} {:<16}\n",
        "Date", "Description", "Amount", "Category"
    ));
    for txn in &summary.expenses {
        output.push_str(&format!(
            "{:<12} {:<28} {:>12} {:<16}\n",
            txn.date.format("%d/%m/%Y"),
            truncate(&txn.description, 28),
            txn.amount.to_string(),
            truncate(&txn.category, 16)
        ));
    }
    output.push('\n');

    // Category totals with a bar chart in place of the pie chart
    output.push_str("Expense Summary\n");
    output.push_str(&separator(72));
    output.push('\n');
    let max_total = summary
        .category_totals
        .first()
        .map(|c| c.total.cents() as f64)
        .unwrap_or(0.0);
    for cat in &summary.category_totals {
        output.push_str(&format!(
            "{:<20} {:>12} {:>6.1}%  {}\n",
            truncate(&cat.category, 20),
            cat.total.to_string(),
            cat.percentage,
            format_bar(cat.total.cents() as f64, max_total, 20)
        ));
    }
    output.push_str(&format!(
        "{:<20} {:>12}\n\n",
        "Total Expenses:",
        summary.total_expenses.format_with_currency(currency)
    ));

    // Account totals
    output.push_str("Expenses by Account\n");
    output.push_str(&separator(72));
    output.push('\n');
    for acct in &summary.account_totals {
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            truncate(&acct.account, 20),
            acct.total.to_string()
        ));
    }
    output.push('\n');

    // Daily totals as a bar chart in place of the line plot
    output.push_str("Daily Expenses\n");
    output.push_str(&separator(72));
    output.push('\n');
    let max_daily = summary
        .daily_totals
        .iter()
        .map(|d| d.total.cents())
        .max()
        .unwrap_or(0) as f64;
    for day in &summary.daily_totals {
        output.push_str(&format!(
            "{:<12} {:>12}  {}\n",
            day.date.format("%d/%m/%Y"),
            day.total.to_string(),
            format_bar(day.total.cents() as f64, max_daily, 30)
        ));
    }
    output.push('\n');

    // Income
    output.push_str("Income Summary\n");
    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "Total Income: {}\n",
        summary.total_income.format_with_currency(currency)
    ));
    for txn in &summary.income {
        output.push_str(&format!(
            "{:<12} {:<28} {:>12} {:<16}\n",
            txn.date.format("%d/%m/%Y"),
            truncate(&txn.description, 28),
            txn.amount.to_string(),
            truncate(&txn.account, 16)
        ));
    }

    output
}
