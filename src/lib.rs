//! uarg - universal-argument repeat for modal text editors
//!
//! Emulates Emacs' universal-argument: a trigger command opens a repeat
//! session, typed digits build an explicit count, and the next command or
//! character is replayed against the buffer the resolved number of times.

pub mod key;
pub mod region;
pub mod command;
pub mod error;
pub mod host;
pub mod controller;
pub mod scratch;
pub mod term;
pub mod demo;

#[cfg(test)]
pub mod test_utils;
