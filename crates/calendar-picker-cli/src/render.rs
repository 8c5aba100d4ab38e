use std::io::{self, IsTerminal, Write};

use calendar_picker_core::{DayCell, DayType, HeaderModel, MonthGrid};
use unicode_width::UnicodeWidthStr;

const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && io::stdout().is_terminal(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn print_month<W: Write>(
        &self,
        mut out: W,
        header: &HeaderModel,
        weekdays: &[String],
        grid: &MonthGrid,
        highlight_today: bool,
    ) -> anyhow::Result<()> {
        let line_width = CELL_WIDTH * weekdays.len();
        let prev = if header.prev_disabled { " " } else { "<" };
        let next = if header.next_disabled { " " } else { ">" };
        let title = center(&header.label, line_width.saturating_sub(4));
        writeln!(out, "{prev} {title} {next}")?;

        let labels: String = weekdays
            .iter()
            .map(|label| center(label, CELL_WIDTH))
            .collect();
        writeln!(out, "{labels}")?;

        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Some(cell) => self.render_cell(cell, highlight_today),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect();
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn render_cell(&self, cell: &DayCell, highlight_today: bool) -> String {
        let day = cell.day;
        let text = match cell.kind {
            DayType::Single => format!("[{day:>2}]"),
            DayType::StartRange => format!("[{day:>2}="),
            DayType::EndRange => format!("={day:>2}]"),
            DayType::InRange => format!("={day:>2}="),
            DayType::None if cell.disabled => format!(" {day:>2}-"),
            DayType::None if highlight_today && cell.is_today => format!("*{day:>2} "),
            DayType::None => format!(" {day:>2} "),
        };

        if cell.selected() {
            self.paint(&text, "7")
        } else if cell.disabled {
            self.paint(&text, "2")
        } else if highlight_today && cell.is_today {
            self.paint(&text, "1")
        } else {
            text
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn center(text: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(text);
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use calendar_picker_core::date::DateBounds;
    use calendar_picker_core::grid::{GridParams, build_month_grid};
    use calendar_picker_core::PickerOptions;
    use chrono::{NaiveDate, Weekday};

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn prints_range_markers_without_color() {
        let options = PickerOptions::default();
        let grid = build_month_grid(&GridParams {
            year: 2024,
            month0: 0,
            start: Some(ymd(2024, 1, 2)),
            end: Some(ymd(2024, 1, 4)),
            bounds: DateBounds::default(),
            week_start: Weekday::Sun,
            today: None,
        })
        .expect("grid");
        let header = HeaderModel::new(2024, 0, &DateBounds::default(), &options);

        let mut out = Vec::new();
        Renderer { color: false }
            .print_month(&mut out, &header, &options.weekday_labels(), &grid, true)
            .expect("render");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("January 2024"));
        assert!(lines[1].starts_with("Sun Mon"));
        assert_eq!(lines[2], "      1 [ 2== 3== 4]  5   6");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn centers_by_display_width() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
    }
}
