//! Key representation for demo host input

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+U)
    Ctrl(char),
    /// Arrow keys
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    /// Editing keys
    Backspace,
    Enter,
    Escape,
    /// System events
    Resize(u16, u16),
}
