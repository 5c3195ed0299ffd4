//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        execute!(stdout(), terminal::EnterAlternateScreen)
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        self.raw_mode_enabled = true;

        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(stdout(), cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn read_key(&mut self) -> Result<Key, String> {
        loop {
            match event::read().map_err(|e| format!("Failed to read event: {e}"))? {
                Event::Key(key_event) => {
                    if key_event.kind == event::KeyEventKind::Press {
                        if let Some(key) = translate_key_event(key_event) {
                            return Ok(key);
                        }
                    }
                    // Ignore key releases and unmapped keys
                }
                Event::Resize(cols, rows) => return Ok(Key::Resize(cols, rows)),
                _ => {}
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        stdout()
            .write_all(bytes)
            .map_err(|e| format!("Write failed: {e}"))?;
        stdout().flush().map_err(|e| format!("Flush failed: {e}"))?;
        Ok(())
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) =
            terminal::size().map_err(|e| format!("Failed to get terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        execute!(stdout(), terminal::Clear(ClearType::All))
            .map_err(|e| format!("Failed to clear screen: {e}"))?;
        execute!(stdout(), cursor::MoveTo(0, 0))
            .map_err(|e| format!("Failed to move cursor: {e}"))?;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        execute!(stdout(), cursor::MoveTo(col, row))
            .map_err(|e| format!("Failed to move cursor: {e}"))?;
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<(), String> {
        execute!(stdout(), terminal::Clear(ClearType::UntilNewLine))
            .map_err(|e| format!("Failed to clear to end of line: {e}"))?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        execute!(stdout(), cursor::Show).map_err(|e| format!("Failed to show cursor: {e}"))?;
        Ok(())
    }
}

/// Translate a crossterm key event into our Key type
fn translate_key_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key_event.code {
            return Some(Key::Ctrl(c.to_ascii_lowercase()));
        }
    }

    match key_event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}
