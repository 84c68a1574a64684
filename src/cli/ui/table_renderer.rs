/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            alignment,
        }
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

/// A table of pre-formatted cells. Cells may carry ANSI color codes; widths
/// are measured on visible characters only.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
    pub plain: bool,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>, plain: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
            plain,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cells = self.rows.iter().filter_map(|row| row.get(idx));
                cells
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header).max(column.min_width), usize::max)
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    /// Renders headers, a rule, then every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&headers, &widths),
            horizontal_rule(&widths, self.padding, self.plain),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Counts characters, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if chars.next() == Some('[') {
                for next in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&next) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let gap = width.saturating_sub(visible_width(text));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{text}{}{pad}", " ".repeat(gap)),
        Alignment::Right => format!("{pad}{}{text}{pad}", " ".repeat(gap)),
    }
}

pub fn horizontal_rule(widths: &[usize], padding: usize, plain: bool) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if plain { '-' } else { '─' };
    ch.to_string().repeat(total)
}
