use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::app_state::{App, Focus};
use crate::notification::render_notification;
use crate::render;
use crate::stats::StatsTable;
use crate::theme;

/// Tallest the per-source error panel gets, borders included
const MAX_ERRORS_HEIGHT: u16 = 8;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let error_count = self
            .report
            .as_ref()
            .map_or(0, |report| report.diagnostics.len());
        let errors_height = errors_panel_height(error_count);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(errors_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

        crate::input::input_render::render_field(self, frame, layout[0]);
        self.render_results(frame, layout[1]);
        if errors_height > 0 {
            self.render_errors(frame, layout[2]);
        }
        render_help_line(frame, layout[3]);

        render_notification(frame, &mut self.notification);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::Results {
            theme::results::BORDER_FOCUSED
        } else {
            theme::results::BORDER_UNFOCUSED
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme::results::BACKGROUND));

        if self.is_calculating() {
            let message = Paragraph::new(Span::styled(
                "Calculating...",
                Style::default().fg(theme::results::PENDING),
            ))
            .block(
                block
                    .title(" Results ")
                    .border_style(Style::default().fg(border)),
            );
            frame.render_widget(message, area);
            return;
        }

        let Some(report) = &self.report else {
            let message = Paragraph::new(Span::styled(
                "Enter a folder of match JSON files and press Enter to calculate stats.",
                Style::default().fg(theme::results::PENDING),
            ))
            .wrap(Wrap { trim: true })
            .block(
                block
                    .title(" Results ")
                    .border_style(Style::default().fg(border)),
            );
            frame.render_widget(message, area);
            return;
        };

        match &report.outcome {
            Err(e) => {
                let message = Paragraph::new(Span::styled(
                    e.to_string(),
                    Style::default().fg(theme::results::ERROR_TEXT),
                ))
                .wrap(Wrap { trim: true })
                .block(
                    block
                        .title(" Results ")
                        .border_style(Style::default().fg(theme::results::BORDER_ERROR)),
                );
                frame.render_widget(message, area);
            }
            Ok(table) => {
                let title = format!(
                    " Results: {} players from {} of {} files ",
                    table.len(),
                    report.sources_used,
                    report.sources_total
                );
                // Borders and the header row
                let viewport = area.height.saturating_sub(3);
                self.results_scroll.update_bounds(table.len(), viewport);

                let widget = stats_table_widget(
                    table,
                    self.precision,
                    self.results_scroll.offset as usize,
                    viewport as usize,
                )
                .block(block.title(title).border_style(Style::default().fg(border)));
                frame.render_widget(widget, area);
            }
        }
    }

    fn render_errors(&self, frame: &mut Frame, area: Rect) {
        let Some(report) = &self.report else {
            return;
        };

        let lines: Vec<Line> = report
            .diagnostics
            .iter()
            .map(|e| {
                Line::from(Span::styled(
                    e.to_string(),
                    Style::default().fg(theme::errors::TEXT),
                ))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Skipped ({}) ", report.diagnostics.len()))
            .border_style(Style::default().fg(theme::errors::BORDER));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Panel height for `count` diagnostics; 0 hides the panel
pub(super) fn errors_panel_height(count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(MAX_ERRORS_HEIGHT)
}

/// Rows `offset..offset + visible` of `table`, laid out like the text output
fn stats_table_widget(
    table: &StatsTable,
    precision: usize,
    offset: usize,
    visible: usize,
) -> Table<'static> {
    let header = render::header(table);
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .skip(offset)
        .take(visible)
        .map(|row| render::cells(row, precision))
        .collect();

    let mut widths: Vec<u16> = header.iter().map(|h| h.chars().count() as u16).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count() as u16);
        }
    }

    let header_row = Row::new(
        header
            .into_iter()
            .enumerate()
            .map(|(i, text)| Cell::from(aligned(text, i))),
    )
    .style(theme::results::HEADER);
    let body = rows.into_iter().map(|row| {
        Row::new(row.into_iter().enumerate().map(|(i, text)| {
            let color = if i == 0 {
                theme::results::PLAYER
            } else {
                theme::results::NUMBER
            };
            Cell::from(aligned(text, i)).style(Style::default().fg(color))
        }))
    });

    Table::new(body, widths.into_iter().map(Constraint::Length))
        .header(header_row)
        .column_spacing(2)
}

/// Player column left, statistics right
fn aligned(text: String, column: usize) -> Line<'static> {
    let line = Line::from(text);
    if column == 0 { line } else { line.right_aligned() }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(theme::help_line::KEY);
    let desc = Style::default().fg(theme::help_line::DESCRIPTION);

    let line = Line::from(vec![
        Span::styled(" Enter", key),
        Span::styled(" calculate  ", desc),
        Span::styled("Tab", key),
        Span::styled(" switch pane  ", desc),
        Span::styled("j/k", key),
        Span::styled(" scroll  ", desc),
        Span::styled("Esc", key),
        Span::styled(" quit", desc),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
