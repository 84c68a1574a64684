use colored::Colorize;

use crate::core::report::{CategoryReport, Figures, LineReport, PortfolioReport};
use crate::currency::format_whole_dollars;

use super::palette::StatusPalette;
use super::progress::{render_bar, usage_caption};
use super::table_renderer::{horizontal_rule, Alignment, Table, TableColumn};

const UNCATEGORIZED: &str = "(uncategorized)";

/// Display settings for one rendering pass.
pub struct DashboardView<'a> {
    pub title: &'a str,
    pub bar_width: usize,
    pub plain: bool,
    pub palette: &'a dyn StatusPalette,
}

pub fn render_dashboard(report: &PortfolioReport, view: &DashboardView<'_>) -> String {
    let mut out = Vec::new();
    out.push(title_line(view));
    out.push(metrics_line("Total", &report.totals));
    out.push(horizontal_rule(&[40], 0, view.plain));

    if report.categories.is_empty() {
        out.push("No budget rows found.".to_string());
    }

    for category in &report.categories {
        out.push(String::new());
        out.push(render_category(category, view));
    }
    out.join("\n")
}

pub fn render_category(category: &CategoryReport, view: &DashboardView<'_>) -> String {
    let name = if category.category.is_empty() {
        UNCATEGORIZED
    } else {
        category.category.as_str()
    };
    let header = if view.plain {
        format!("=== {name} ===")
    } else {
        format!("📂 {}", name.bold())
    };

    let mut table = Table::new(
        vec![
            TableColumn::new("Subcategory", Alignment::Left).min_width(12),
            TableColumn::new("Budget", Alignment::Right),
            TableColumn::new("Spent", Alignment::Right),
            TableColumn::new("Remaining", Alignment::Right),
            TableColumn::new("Used", Alignment::Left),
            TableColumn::new("Status", Alignment::Left),
        ],
        view.plain,
    );
    for line in &category.lines {
        table.push_row(line_cells(line, view));
    }

    [
        header,
        metrics_line("Subtotal", &category.subtotal),
        table.render(),
    ]
    .join("\n")
}

fn line_cells(line: &LineReport, view: &DashboardView<'_>) -> Vec<String> {
    let figures = &line.figures;
    let status = figures.status;
    let remaining = view
        .palette
        .paint(status, &format_whole_dollars(figures.remaining));
    let usage = format!(
        "{} {}",
        render_bar(&figures.percent_used, view.bar_width, view.plain),
        view.palette
            .paint(status, &usage_caption(&figures.percent_used))
    );
    vec![
        line.subcategory.clone(),
        format_whole_dollars(figures.budget),
        format_whole_dollars(figures.spent),
        remaining,
        usage,
        view.palette.paint(status, view.palette.label(status)),
    ]
}

fn title_line(view: &DashboardView<'_>) -> String {
    if view.plain {
        format!("=== {} ===", view.title)
    } else {
        format!("💰 {}", view.title.bold())
    }
}

fn metrics_line(prefix: &str, figures: &Figures) -> String {
    format!(
        "{prefix} Budget: {} | {prefix} Spent: {} | {prefix} Remaining: {}",
        format_whole_dollars(figures.budget),
        format_whole_dollars(figures.spent),
        format_whole_dollars(figures.remaining),
    )
}
