//! The editor surface the controller drives
//! Hosts implement this trait to give the controller buffer and dispatch access

/// ## host/ Invariants
///
/// - `dispatch` executes a command directly; it never re-enters the
///   controller's interception path. Hosts route only user-issued commands
///   through `RepeatController::on_command_attempt`.
/// - Hosts keep selections adjusted across edits: insertions and deletions
///   shift every region at or after the edit point.
/// - Every view always has at least one region (a bare caret counts).
/// - Offsets are char offsets, never byte offsets.
use crate::command::CommandArgs;
use crate::error::UargError;
use crate::region::Region;

/// Identifies one editor view within a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub usize);

/// The mutable editing surface: buffer access, selections, command dispatch.
pub trait Host {
    /// Execute a command against a view. May fail; the failure surfaces to
    /// whoever issued the dispatch (for replay, through the controller).
    fn dispatch(&mut self, view: ViewId, name: &str, args: &CommandArgs) -> Result<(), UargError>;

    /// Insert `text` at char offset `pos`.
    fn insert_at(&mut self, view: ViewId, pos: usize, text: &str);

    /// Delete the single char immediately before char offset `pos`.
    fn delete_char_before(&mut self, view: ViewId, pos: usize);

    /// The view's regions, in buffer order.
    fn current_selections(&self, view: ViewId) -> Vec<Region>;

    /// Replace the view's regions wholesale.
    fn set_selections(&mut self, view: ViewId, regions: &[Region]);

    /// The text covered by `region`.
    fn text_in(&self, view: ViewId, region: Region) -> String;
}
