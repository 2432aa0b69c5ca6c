use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Poll before waiting so a finished run shows on the next frame
        self.poll_runner();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.focus == Focus::FolderInput {
            self.input.insert_str(&text);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.dismiss_error_notification();

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter => {
                self.calculate();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::FolderInput => Focus::Results,
                    Focus::Results => Focus::FolderInput,
                };
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::FolderInput => {
                self.input.textarea.input(key);
            }
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.results_scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.results_scroll.scroll_up(1),
            KeyCode::Char('J') => self.results_scroll.scroll_down(10),
            KeyCode::Char('K') => self.results_scroll.scroll_up(10),
            KeyCode::PageDown => self.results_scroll.page_down(),
            KeyCode::PageUp => self.results_scroll.page_up(),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.results_scroll.page_down()
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.results_scroll.page_up()
            }
            KeyCode::Char('g') | KeyCode::Home => self.results_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.results_scroll.jump_to_bottom(),
            KeyCode::Char('i') | KeyCode::Char('/') => self.focus = Focus::FolderInput,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
