use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area in the top-right corner of `frame_area`, `margin` cells from both
/// edges. Width and height are clamped to what fits.
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let height = height.min(frame_area.height.saturating_sub(margin * 2));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y: frame_area.y + margin,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
