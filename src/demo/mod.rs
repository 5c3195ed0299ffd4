//! Interactive demo
//! A single-line scratch editor wired to the repeat controller

use anyhow::anyhow;
use unicode_width::UnicodeWidthStr;

use crate::command::Invocation;
use crate::controller::{Intercept, RepeatController, SessionState};
use crate::host::{Host, ViewId};
use crate::key::Key;
use crate::scratch::{ScratchHost, CMD_LEFT_DELETE, CMD_MOVE_LEFT, CMD_MOVE_RIGHT};
use crate::term::TerminalBackend;

/// The demo application: one scratch view, one repeat controller.
///
/// The demo plays the host's role: it routes user-issued commands through
/// `on_command_attempt`, executes the ones that pass, and notifies the
/// controller after every buffer modification.
pub struct Demo<T: TerminalBackend> {
    terminal: T,
    host: ScratchHost,
    controller: RepeatController,
    view: ViewId,
    should_quit: bool,
}

impl<T: TerminalBackend> Demo<T> {
    /// Create a new demo instance over an empty scratch view
    pub fn new(mut terminal: T) -> anyhow::Result<Self> {
        terminal
            .init()
            .map_err(|e| anyhow!("Failed to initialize terminal: {e}"))?;
        terminal
            .clear_screen()
            .map_err(|e| anyhow!("Failed to clear screen: {e}"))?;

        let mut host = ScratchHost::new();
        let view = host.add_view("");

        Ok(Demo {
            terminal,
            host,
            controller: RepeatController::new(),
            view,
            should_quit: false,
        })
    }

    /// Run the demo main loop
    pub fn run(&mut self) -> anyhow::Result<()> {
        while !self.should_quit {
            render(&mut self.terminal, &self.host, &self.controller, self.view)
                .map_err(|e| anyhow!("Render failed: {e}"))?;

            let key = self
                .terminal
                .read_key()
                .map_err(|e| anyhow!("Failed to read key: {e}"))?;
            self.handle_key(key)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: Key) -> anyhow::Result<()> {
        match key {
            Key::Ctrl('q') => self.should_quit = true,
            Key::Ctrl('u') => {
                let trigger = self.controller.config().trigger_command.clone();
                self.issue(Invocation::bare(&trigger))?;
            }
            Key::Escape => {
                let cancel = self.controller.config().cancel_command.clone();
                self.issue(Invocation::bare(&cancel))?;
            }
            Key::Backspace => self.issue(Invocation::bare(CMD_LEFT_DELETE))?,
            Key::ArrowLeft => self.issue(Invocation::bare(CMD_MOVE_LEFT))?,
            Key::ArrowRight => self.issue(Invocation::bare(CMD_MOVE_RIGHT))?,
            Key::Char(ch) => self.type_char(ch),
            _ => {}
        }
        Ok(())
    }

    /// Route a user-issued command through the controller, then execute it
    /// if it passed. A modification by a passed command is reported back.
    fn issue(&mut self, inv: Invocation) -> anyhow::Result<()> {
        let decision =
            self.controller
                .on_command_attempt(&mut self.host, self.view, &inv.name, &inv.args)?;
        if decision == Intercept::Pass {
            let before = self.host.revision(self.view);
            self.host.dispatch(self.view, &inv.name, &inv.args)?;
            if self.host.revision(self.view) != before {
                self.controller.on_buffer_modified(&mut self.host, self.view);
            }
        }
        Ok(())
    }

    /// Raw keystroke: the host inserts first, then notifies.
    fn type_char(&mut self, ch: char) {
        self.host.type_char(self.view, ch);
        self.controller.on_buffer_modified(&mut self.host, self.view);
    }
}

impl<T: TerminalBackend> Drop for Demo<T> {
    fn drop(&mut self) {
        self.terminal.deinit();
    }
}

/// Draw the buffer line and the status line, then park the cursor at the
/// first caret.
pub fn render<T: TerminalBackend>(
    term: &mut T,
    host: &ScratchHost,
    controller: &RepeatController,
    view: ViewId,
) -> Result<(), String> {
    let text = host.text(view);

    term.move_cursor(0, 0)?;
    term.clear_to_end_of_line()?;
    term.write(text.as_bytes())?;

    term.move_cursor(1, 0)?;
    term.clear_to_end_of_line()?;
    term.write(status_line(controller).as_bytes())?;

    let caret = host
        .current_selections(view)
        .first()
        .map_or(0, |region| region.begin());
    let prefix: String = text.chars().take(caret).collect();
    term.move_cursor(0, prefix.width() as u16)?;
    term.show_cursor()?;
    Ok(())
}

/// One-line summary of the controller for the status row
pub fn status_line(controller: &RepeatController) -> String {
    match controller.state() {
        SessionState::Listening => {
            "ctrl-u: repeat  esc: cancel  ctrl-q: quit".to_string()
        }
        SessionState::Running => {
            format!("-- REPEAT x{} --", controller.resolved_repeat_count())
        }
        SessionState::Paused => "-- REPEAT (busy) --".to_string(),
    }
}
