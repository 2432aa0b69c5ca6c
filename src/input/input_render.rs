use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

/// Draw the folder field; the border follows focus
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::FolderInput;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Folder ")
        .border_style(Style::default().fg(border_color));

    if focused {
        block = block.title_top(
            Line::from(Span::styled(
                " Enter to calculate stats ",
                Style::default().fg(theme::input::HINT),
            ))
            .alignment(Alignment::Right),
        );
    }

    app.input.textarea.set_block(block);
    app.input.textarea.set_cursor_style(if focused {
        theme::input::CURSOR
    } else {
        Style::default()
    });

    frame.render_widget(&app.input.textarea, area);
}
