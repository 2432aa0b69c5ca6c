//! Shared test utilities for the interactive mode

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::pipeline::{Report, Settings};
    use crate::stats::SortKey;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::Path;
    use std::thread;
    use std::time::Duration;

    /// Two matches in which player "A" bats twice
    pub const MATCH_ONE: &str = r#"[
        {"batsman": "A", "runs": 30, "balls": 20},
        {"batsman": "B", "runs": 5, "balls": 9}
    ]"#;
    pub const MATCH_TWO: &str = r#"[{"batsman": "A", "runs": 20, "balls": 10}]"#;

    /// App with default settings and the given folder text
    pub fn test_app(folder: &str) -> App {
        App::new(folder, Settings::default(), 2, SortKey::Player)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Write the two sample matches into `dir`
    pub fn write_matches(dir: &Path) {
        std::fs::write(dir.join("m1.json"), MATCH_ONE).unwrap();
        std::fs::write(dir.join("m2.json"), MATCH_TWO).unwrap();
    }

    /// Poll the app until its background run finishes
    pub fn wait_for_run(app: &mut App) -> bool {
        for _ in 0..500 {
            app.poll_runner();
            if !app.is_calculating() {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        false
    }

    /// Run the pipeline synchronously over in-memory sources
    pub fn report_for(docs: &[(&str, &str)]) -> Report {
        let sources: Vec<crate::input::Source> = docs
            .iter()
            .map(|(name, json)| crate::input::Source::memory(*name, json.as_bytes().to_vec()))
            .collect();
        crate::pipeline::run(&sources, &Settings::default())
    }
}
