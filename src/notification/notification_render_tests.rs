//! Tests for notification_render

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_notification_to_string(
    notification: &mut NotificationState,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_notification_is_drawn_top_right() {
    let mut notification = NotificationState::new();
    notification.show("Calculated 2 players");

    let output = render_notification_to_string(&mut notification, 80, 24);
    let lines: Vec<&str> = output.lines().collect();

    // TestBackend quotes each row
    assert!(lines[3].contains("Calculated 2 players"));
    let col = lines[3].find("Calculated").unwrap();
    assert!(col > 40, "expected notification on the right, got column {}", col);
}

#[test]
fn test_no_notification_draws_nothing() {
    let mut notification = NotificationState::new();

    let output = render_notification_to_string(&mut notification, 40, 10);

    assert!(output.lines().all(|l| l.trim_matches('"').trim().is_empty()));
}

#[test]
fn test_error_notification_stays_after_render() {
    let mut notification = NotificationState::new();
    notification.show_error("No valid data found in the specified sources.");

    let output = render_notification_to_string(&mut notification, 80, 10);

    assert!(output.contains("No valid data found"));
    assert!(notification.current().is_some());
}

#[test]
fn test_tiny_frame_skips_render() {
    let mut notification = NotificationState::new();
    notification.show("hello");

    let output = render_notification_to_string(&mut notification, 6, 4);

    assert!(!output.contains("hello"));
}
