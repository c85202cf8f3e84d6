//! Notification Instructions
//!
//! The strategies do not touch components directly; they return an ordered
//! list of instructions, and the listener applies them through the
//! component's mutation channels. Keeping the instruction list a plain data
//! structure makes diffs unit-testable and lets hosts log patch streams.

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

/// Ordered list of instructions produced by one strategy invocation.
///
/// Most diffs emit zero or one instruction, so the list lives inline.
pub type Instructions = SmallVec<[Instruction; 4]>;

/// One mutation to apply to a component property path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Replace the value at `path`.
    Set { path: String, value: Value },

    /// Positional array edit at `path`: remove `remove` elements starting at
    /// `start`, then insert `insert` at the same position. Splices for one
    /// diff are emitted in ascending index order and must be applied in that
    /// order; applying them out of order invalidates subsequent indices.
    Splice {
        path: String,
        start: usize,
        remove: usize,
        insert: Vec<Value>,
    },
}

impl Instruction {
    /// The property path this instruction targets.
    pub fn path(&self) -> &str {
        match self {
            Instruction::Set { path, .. } | Instruction::Splice { path, .. } => path,
        }
    }
}
