//! Repeat controller
//! The state machine behind universal-argument repeat

/// ## controller/ Invariants
///
/// - `Listening` ⇔ no bound view ⇔ empty number string ⇔ call count 0.
/// - The number string holds only ASCII digits and never starts with '0'.
/// - The selection snapshot is non-empty only while a session is active.
/// - `Paused` is a reentrancy guard: the controller's own edits and replay
///   dispatches must never feed back into its interception logic.
/// - Reset always runs, even when a replay dispatch fails; the controller
///   can never get stuck in `Paused`.
use crate::command::{self, CommandArgs};
use crate::error::UargError;
use crate::host::{Host, ViewId};
use crate::region::Region;

/// The controller's position in the repeat protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Idle; waiting for the trigger command. Everything else passes through.
    Listening,
    /// A session is open; watching for triggers, digits, or the repeat target.
    Running,
    /// The controller is performing its own edits and ignores notifications.
    Paused,
}

/// What the host should do with an intercepted command attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    /// Let the command execute as issued
    Pass,
    /// Drop the command; the host must not execute it
    Suppress,
}

/// Tunables for a repeat controller
#[derive(Debug, Clone)]
pub struct RepeatConfig {
    /// Command name that starts or continues a session
    pub trigger_command: String,
    /// Command name that aborts a session
    pub cancel_command: String,
    /// Base of the implicit count: `base ^ call_count` when no digits typed
    pub growth_base: u64,
    /// Hard cap on the resolved repeat count. Keeps a pathological count
    /// from locking up the host.
    pub max_repeats: u64,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        RepeatConfig {
            trigger_command: "repeat".to_string(),
            cancel_command: "cancel".to_string(),
            growth_base: 4,
            max_repeats: 1_000_000,
        }
    }
}

/// The repeat session state machine.
///
/// One controller binds to one host view at a time. The host calls
/// `on_command_attempt` before executing any user-issued command and
/// `on_buffer_modified` after every completed buffer modification; the
/// controller answers with pass/suppress decisions and performs its replay
/// through direct `Host` calls.
pub struct RepeatController {
    config: RepeatConfig,
    state: SessionState,
    bound_view: Option<ViewId>,
    number_string: String,
    call_count: u32,
    saved_selection: Vec<Region>,
}

impl Default for RepeatController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepeatController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RepeatConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RepeatConfig) -> Self {
        RepeatController {
            config,
            state: SessionState::Listening,
            bound_view: None,
            number_string: String::new(),
            call_count: 0,
            saved_selection: Vec::new(),
        }
    }

    pub fn config(&self) -> &RepeatConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bound_view(&self) -> Option<ViewId> {
        self.bound_view
    }

    pub fn number_string(&self) -> &str {
        &self.number_string
    }

    pub fn call_count(&self) -> u32 {
        self.call_count
    }

    /// The count the session would replay with right now: the typed digits
    /// if any, else `base ^ call_count`, clamped to `max_repeats`. Overflow
    /// in either path saturates to the clamp.
    #[must_use]
    pub fn resolved_repeat_count(&self) -> u64 {
        let repeats = if self.number_string.is_empty() {
            self.config
                .growth_base
                .checked_pow(self.call_count)
                .unwrap_or(self.config.max_repeats)
        } else {
            self.number_string
                .parse::<u64>()
                .unwrap_or(self.config.max_repeats)
        };
        repeats.min(self.config.max_repeats)
    }

    /// Intercept a user-issued command before the host executes it.
    ///
    /// Returns `Suppress` for everything the session consumes: the trigger,
    /// the cancel command, and the command chosen for replay (the replay
    /// itself happens here, through direct dispatches). A failed replay
    /// dispatch returns the error after the guaranteed reset; the original
    /// command stays suppressed either way.
    pub fn on_command_attempt(
        &mut self,
        host: &mut dyn Host,
        view: ViewId,
        name: &str,
        args: &CommandArgs,
    ) -> Result<Intercept, UargError> {
        match self.state {
            SessionState::Paused => Ok(Intercept::Pass),
            SessionState::Listening => Ok(self.attempt_while_listening(host, view, name)),
            SessionState::Running => {
                if self.bound_view != Some(view) {
                    // Another view started issuing commands mid-session.
                    // Count state never survives a rebind.
                    self.reset(host);
                    return Ok(self.attempt_while_listening(host, view, name));
                }
                if name == self.config.trigger_command {
                    self.call_count += 1;
                    // Third consecutive trigger with a pending explicit
                    // count: forget the digits, start an implicit sequence.
                    if self.call_count >= 3 && !self.number_string.is_empty() {
                        self.number_string.clear();
                        self.call_count = 1;
                    }
                    Ok(Intercept::Suppress)
                } else if name == self.config.cancel_command {
                    self.reset(host);
                    Ok(Intercept::Suppress)
                } else {
                    self.replay(host, view, name, args)?;
                    Ok(Intercept::Suppress)
                }
            }
        }
    }

    /// React to a completed buffer modification on `view`.
    ///
    /// Only meaningful while running on the bound view: the controller pulls
    /// the just-inserted character back out of the buffer, then either
    /// extends the count (digit inside the entry window) or treats the
    /// character as content and inserts the repeated run at every caret.
    pub fn on_buffer_modified(&mut self, host: &mut dyn Host, view: ViewId) {
        if self.state != SessionState::Running || self.bound_view != Some(view) {
            return;
        }
        // Our own corrective edits below must not re-enter this handler.
        self.state = SessionState::Paused;

        let Some(ch) = extract_inserted_char(host, view) else {
            // Nothing to extract (caret at offset 0); ignore the event.
            self.state = SessionState::Running;
            return;
        };

        if command::is_count_digit(ch) && self.call_count < 2 {
            self.number_string.push(ch);
            // A lone leading zero is not a meaningful count.
            if self.number_string == "0" {
                self.number_string.clear();
            }
            self.state = SessionState::Running;
            self.call_count = 1;
        } else {
            let repeats = self.resolved_repeat_count();
            self.restore_selection(host);
            let run: String = std::iter::repeat(ch).take(repeats as usize).collect();
            let mut regions = host.current_selections(view);
            regions.sort_by_key(Region::begin);
            // Back-to-front so earlier offsets stay valid.
            for region in regions.iter().rev() {
                host.insert_at(view, region.begin(), &run);
            }
            self.reset(host);
        }
    }

    /// Return to the Listening defaults, restoring any saved selection first.
    pub fn reset(&mut self, host: &mut dyn Host) {
        self.restore_selection(host);
        self.state = SessionState::Listening;
        self.bound_view = None;
        self.number_string.clear();
        self.call_count = 0;
    }

    fn attempt_while_listening(
        &mut self,
        host: &mut dyn Host,
        view: ViewId,
        name: &str,
    ) -> Intercept {
        if name != self.config.trigger_command {
            return Intercept::Pass;
        }
        self.bound_view = Some(view);
        self.capture_selection(host, view);
        self.state = SessionState::Running;
        self.call_count = 1;
        Intercept::Suppress
    }

    /// Dispatch `name` the resolved number of times, then reset. The reset
    /// runs even when a dispatch fails partway; the buffer then keeps
    /// whatever partial repeats were applied.
    fn replay(
        &mut self,
        host: &mut dyn Host,
        view: ViewId,
        name: &str,
        args: &CommandArgs,
    ) -> Result<(), UargError> {
        let repeats = self.resolved_repeat_count();
        self.state = SessionState::Paused;
        self.restore_selection(host);
        let mut outcome = Ok(());
        for _ in 0..repeats {
            if let Err(err) = host.dispatch(view, name, args) {
                outcome = Err(err);
                break;
            }
        }
        self.reset(host);
        outcome
    }

    /// Snapshot the view's regions, then collapse each to a caret at its end
    /// so no pre-existing selection swallows the session's character input.
    fn capture_selection(&mut self, host: &mut dyn Host, view: ViewId) {
        let regions = host.current_selections(view);
        let carets: Vec<Region> = regions.iter().map(Region::collapsed_to_end).collect();
        host.set_selections(view, &carets);
        self.saved_selection = regions;
    }

    /// Reinstate the snapshotted regions on the bound view and drop the
    /// snapshot. Idempotent: a second call is a no-op.
    fn restore_selection(&mut self, host: &mut dyn Host) {
        if self.saved_selection.is_empty() {
            return;
        }
        let saved = std::mem::take(&mut self.saved_selection);
        if let Some(view) = self.bound_view {
            host.set_selections(view, &saved);
        }
    }
}

/// Read the char immediately before the first caret, then delete it before
/// every caret (raw keystrokes insert at all of them) so it is not duplicated
/// by the repeated insertion. Returns `None` when the first caret sits at
/// offset 0.
fn extract_inserted_char(host: &mut dyn Host, view: ViewId) -> Option<char> {
    let regions = host.current_selections(view);
    let first = regions.first()?.begin();
    if first == 0 {
        return None;
    }
    let text = host.text_in(view, Region::new(first - 1, first));
    let ch = text.chars().next()?;
    let mut begins: Vec<usize> = regions.iter().map(Region::begin).collect();
    begins.sort_unstable();
    begins.dedup();
    for begin in begins.iter().rev() {
        if *begin > 0 {
            host.delete_char_before(view, *begin);
        }
    }
    Some(ch)
}
