//! The incremental `ugoa+-=rwxs[,...]` grammar.
//!
//! Each clause is scanned in three steps: a run of selectors naming who
//! is affected, a single operator, and a run of permissions. The clause is
//! then applied and the scanner either moves on to the next clause (after
//! a `,`) or stops at end of string. Spaces inside the selector and
//! permission runs are skipped.

use super::{FileMode, ModeError};
use crate::constants::{
    PERM_EXEC, PERM_READ, PERM_SETID, PERM_WRITE, WHO_ALL, WHO_GROUP, WHO_OTHER, WHO_USER,
};
use tracing::trace;

/// How a clause changes the bits it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Remove,
    Set,
}

impl Op {
    fn from_byte(b: u8) -> Option<Op> {
        match b {
            b'+' => Some(Op::Add),
            b'-' => Some(Op::Remove),
            b'=' => Some(Op::Set),
            _ => None,
        }
    }
}

/// One parsed `who op perms` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    pub affected: FileMode,
    pub op: Op,
    pub perms: FileMode,
}

impl Clause {
    /// Apply this clause to `mode`.
    ///
    /// `+` and `-` with an empty permission run leave `mode` alone; `=`
    /// always resets the affected bits, so `o=` clears the other bits.
    pub fn apply(&self, mode: FileMode) -> FileMode {
        let change = self.perms & self.affected;
        match self.op {
            Op::Add => mode | change,
            Op::Remove => mode & !change,
            Op::Set => (mode & !self.affected) | change,
        }
    }
}

/// Scanner states. `Done` and errors are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningSelectors,
    HaveOperator { affected: FileMode, op: Op },
    ScanningPermissions { affected: FileMode, op: Op, perms: FileMode },
    ApplyAndContinue,
    Done,
}

fn selector_mask(b: u8) -> Option<FileMode> {
    match b {
        b'u' => Some(WHO_USER),
        b'g' => Some(WHO_GROUP),
        b'o' => Some(WHO_OTHER),
        b'a' => Some(WHO_ALL),
        _ => None,
    }
}

fn permission_mask(b: u8) -> Option<FileMode> {
    match b {
        b'r' => Some(PERM_READ),
        b'w' => Some(PERM_WRITE),
        b'x' => Some(PERM_EXEC),
        b's' => Some(PERM_SETID),
        _ => None,
    }
}

/// Apply every clause of `spec` to `current`, left to right.
pub fn apply_symbolic(current: FileMode, spec: &str) -> Result<FileMode, ModeError> {
    let bytes = spec.as_bytes();
    let mut pos = 0;
    let mut mode = current;
    let mut state = State::ScanningSelectors;

    loop {
        state = match state {
            State::ScanningSelectors => {
                let mut affected = 0;
                while let Some(&b) = bytes.get(pos) {
                    if b == b' ' {
                        pos += 1;
                    } else if let Some(mask) = selector_mask(b) {
                        affected |= mask;
                        pos += 1;
                    } else {
                        break;
                    }
                }
                if affected == 0 {
                    affected = WHO_ALL;
                }

                let op = bytes
                    .get(pos)
                    .and_then(|&b| Op::from_byte(b))
                    .ok_or(ModeError::BadOperator)?;
                pos += 1;
                State::HaveOperator { affected, op }
            }

            State::HaveOperator { affected, op } => State::ScanningPermissions {
                affected,
                op,
                perms: 0,
            },

            State::ScanningPermissions {
                affected,
                op,
                mut perms,
            } => {
                while let Some(&b) = bytes.get(pos) {
                    if b == b' ' {
                        pos += 1;
                    } else if let Some(mask) = permission_mask(b) {
                        perms |= mask;
                        pos += 1;
                    } else {
                        break;
                    }
                }

                let next = match bytes.get(pos) {
                    None => State::Done,
                    Some(b',') => State::ApplyAndContinue,
                    Some(_) => return Err(ModeError::BadChangeSyntax),
                };
                pos += 1;

                let clause = Clause { affected, op, perms };
                mode = clause.apply(mode);
                trace!(?clause, mode, "applied mode clause");
                next
            }

            State::ApplyAndContinue => State::ScanningSelectors,

            State::Done => return Ok(mode),
        };
    }
}
