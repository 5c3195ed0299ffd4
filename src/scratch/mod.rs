//! In-memory reference host
//! A small multi-view host used by the demo binary and the test suite

/// ## scratch/ Invariants
///
/// - Buffers are `Vec<char>`; every offset in the API is a char offset.
/// - Every view keeps at least one region at all times.
/// - Edits shift every selection offset at or after the edit point.
/// - The dispatch log records every attempted dispatch, including ones that
///   fail, in issue order.
use crate::command::{CommandArgs, ARG_CHARACTERS};
use crate::error::UargError;
use crate::host::{Host, ViewId};
use crate::region::Region;

/// Insert the `characters` argument at every caret.
pub const CMD_INSERT: &str = "insert";
/// Delete the char before every caret.
pub const CMD_LEFT_DELETE: &str = "left_delete";
/// Collapse every region to a caret one char to the left.
pub const CMD_MOVE_LEFT: &str = "move_left";
/// Collapse every region to a caret one char to the right.
pub const CMD_MOVE_RIGHT: &str = "move_right";

/// One attempted dispatch, as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub view: ViewId,
    pub name: String,
    pub args: CommandArgs,
}

struct ViewState {
    buffer: Vec<char>,
    selections: Vec<Region>,
    revision: u64,
}

/// An in-memory host with a handful of built-in commands.
///
/// `ViewId`s handed out by [`add_view`](Self::add_view) index into this host
/// and are not valid across hosts.
#[derive(Default)]
pub struct ScratchHost {
    views: Vec<ViewState>,
    log: Vec<DispatchRecord>,
}

impl ScratchHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view holding `text`, with a single caret at the end.
    pub fn add_view(&mut self, text: &str) -> ViewId {
        let buffer: Vec<char> = text.chars().collect();
        let caret = buffer.len();
        self.views.push(ViewState {
            buffer,
            selections: vec![Region::caret(caret)],
            revision: 0,
        });
        ViewId(self.views.len() - 1)
    }

    pub fn text(&self, view: ViewId) -> String {
        self.view(view).buffer.iter().collect()
    }

    /// Bumped on every buffer mutation; lets a host loop detect that a
    /// dispatched command modified the view.
    pub fn revision(&self, view: ViewId) -> u64 {
        self.view(view).revision
    }

    pub fn dispatch_log(&self) -> &[DispatchRecord] {
        &self.log
    }

    /// How many dispatches of `name` the host has seen.
    pub fn dispatch_count(&self, name: &str) -> usize {
        self.log.iter().filter(|rec| rec.name == name).count()
    }

    /// Collapse the view to a single caret at `pos`.
    pub fn set_caret(&mut self, view: ViewId, pos: usize) {
        self.view_mut(view).selections = vec![Region::caret(pos)];
    }

    /// Raw keystroke insertion: one char typed at every caret, bypassing
    /// command dispatch (the host notifies the controller separately).
    pub fn type_char(&mut self, view: ViewId, ch: char) {
        self.insert_at_carets(view, &ch.to_string());
    }

    fn view(&self, view: ViewId) -> &ViewState {
        &self.views[view.0]
    }

    fn view_mut(&mut self, view: ViewId) -> &mut ViewState {
        &mut self.views[view.0]
    }

    /// Insert `text` at every caret/selection begin, back-to-front so the
    /// earlier offsets stay valid while inserting.
    fn insert_at_carets(&mut self, view: ViewId, text: &str) {
        let mut begins: Vec<usize> = self
            .view(view)
            .selections
            .iter()
            .map(Region::begin)
            .collect();
        begins.sort_unstable();
        for begin in begins.iter().rev() {
            self.insert_at(view, *begin, text);
        }
    }

    fn delete_before_carets(&mut self, view: ViewId) {
        let mut begins: Vec<usize> = self
            .view(view)
            .selections
            .iter()
            .map(Region::begin)
            .filter(|begin| *begin > 0)
            .collect();
        begins.sort_unstable();
        for begin in begins.iter().rev() {
            self.delete_char_before(view, *begin);
        }
    }

    fn move_carets(&mut self, view: ViewId, delta: isize) {
        let len = self.view(view).buffer.len();
        let state = self.view_mut(view);
        state.selections = state
            .selections
            .iter()
            .map(|region| {
                let pos = if delta < 0 {
                    region.begin().saturating_sub(delta.unsigned_abs())
                } else {
                    (region.finish() + delta.unsigned_abs()).min(len)
                };
                Region::caret(pos)
            })
            .collect();
    }
}

impl Host for ScratchHost {
    fn dispatch(&mut self, view: ViewId, name: &str, args: &CommandArgs) -> Result<(), UargError> {
        self.log.push(DispatchRecord {
            view,
            name: name.to_string(),
            args: args.clone(),
        });
        match name {
            CMD_INSERT => {
                let text = args.get(ARG_CHARACTERS).cloned().unwrap_or_default();
                self.insert_at_carets(view, &text);
                Ok(())
            }
            CMD_LEFT_DELETE => {
                self.delete_before_carets(view);
                Ok(())
            }
            CMD_MOVE_LEFT => {
                self.move_carets(view, -1);
                Ok(())
            }
            CMD_MOVE_RIGHT => {
                self.move_carets(view, 1);
                Ok(())
            }
            _ => Err(UargError::unknown_command(name)),
        }
    }

    fn insert_at(&mut self, view: ViewId, pos: usize, text: &str) {
        let inserted: Vec<char> = text.chars().collect();
        let len = inserted.len();
        if len == 0 {
            return;
        }
        let state = self.view_mut(view);
        let pos = pos.min(state.buffer.len());
        state.buffer.splice(pos..pos, inserted);
        for region in &mut state.selections {
            if region.start >= pos {
                region.start += len;
            }
            if region.end >= pos {
                region.end += len;
            }
        }
        state.revision += 1;
    }

    fn delete_char_before(&mut self, view: ViewId, pos: usize) {
        let state = self.view_mut(view);
        if pos == 0 || pos > state.buffer.len() {
            return;
        }
        state.buffer.remove(pos - 1);
        for region in &mut state.selections {
            if region.start >= pos {
                region.start -= 1;
            }
            if region.end >= pos {
                region.end -= 1;
            }
        }
        state.revision += 1;
    }

    fn current_selections(&self, view: ViewId) -> Vec<Region> {
        self.view(view).selections.clone()
    }

    fn set_selections(&mut self, view: ViewId, regions: &[Region]) {
        let state = self.view_mut(view);
        state.selections = if regions.is_empty() {
            // A view never goes caret-less.
            vec![Region::caret(0)]
        } else {
            regions.to_vec()
        };
    }

    fn text_in(&self, view: ViewId, region: Region) -> String {
        let state = self.view(view);
        let begin = region.begin().min(state.buffer.len());
        let finish = region.finish().min(state.buffer.len());
        state.buffer[begin..finish].iter().collect()
    }
}
