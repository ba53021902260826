//! Change modes for writable expressions.

use std::fmt;

/// How a change statement modifies an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeMode {
    /// `add x to ...`
    Add,
    /// `set ... to x`
    Set,
    /// `remove x from ...`
    Remove,
    /// `remove all x from ...`
    RemoveAll,
    /// `delete ...` / `clear ...`
    Delete,
    /// `reset ...`
    Reset,
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Set => "set",
            Self::Remove => "remove",
            Self::RemoveAll => "remove all",
            Self::Delete => "delete",
            Self::Reset => "reset",
        })
    }
}
