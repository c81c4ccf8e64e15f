use super::{FileMode, ModeError};
use crate::constants::{
    RWX_LEN, RWX_SLOTS, SETGID_SLOT, SETUID_SLOT, STICKY_SLOT, S_ISGID, S_ISUID, S_ISVTX,
    S_IXGRP, S_IXOTH, S_IXUSR,
};

/// Apply a nine-character `rwxrwxrwx` string to `current`.
///
/// Every slot is an absolute assignment: its letter sets the bit, `-`
/// clears it. `s` is accepted in the owner and group execute slots and
/// sets the matching set-ID bit along with execute; anywhere else it is
/// rejected. Any other character leaves its slot's bit as it was. The
/// set-ID bits of `current` are dropped first, so only an explicit `s`
/// keeps them.
///
/// Characters past the ninth are ignored unless `strict` is set.
pub fn apply_rwx(current: FileMode, spec: &str, strict: bool) -> Result<FileMode, ModeError> {
    let bytes = spec.as_bytes();
    if bytes.len() < RWX_LEN || (strict && bytes.len() > RWX_LEN) {
        return Err(ModeError::BadRwxToken);
    }

    let mut mode = current & !(S_ISUID | S_ISGID);

    for (slot, (&c, &(letter, bit))) in bytes.iter().zip(RWX_SLOTS.iter()).enumerate() {
        match c {
            b'-' => mode &= !bit,
            b's' if slot == SETUID_SLOT => mode |= S_ISUID | S_IXUSR,
            b's' if slot == SETGID_SLOT => mode |= S_ISGID | S_IXGRP,
            b's' => return Err(ModeError::BadRwxToken),
            _ if c == letter as u8 => mode |= bit,
            _ => {}
        }
    }

    Ok(mode)
}

/// Render the permission bits of `mode` as `rwxrwxrwx`, ls-style.
///
/// Set-ID bits show as `s` over an execute bit and `S` without one; the
/// sticky bit shows as `t`/`T` in the last slot.
///
/// ```
/// use modemunch::format_mode;
///
/// assert_eq!(format_mode(0o755), "rwxr-xr-x");
/// assert_eq!(format_mode(0o4644), "rwSr--r--");
/// ```
pub fn format_mode(mode: FileMode) -> String {
    let mut out: [char; RWX_LEN] = ['-'; RWX_LEN];
    for (slot, &(letter, bit)) in RWX_SLOTS.iter().enumerate() {
        if mode & bit != 0 {
            out[slot] = letter;
        }
    }

    let specials = [
        (SETUID_SLOT, S_ISUID, S_IXUSR, 's'),
        (SETGID_SLOT, S_ISGID, S_IXGRP, 's'),
        (STICKY_SLOT, S_ISVTX, S_IXOTH, 't'),
    ];
    for (slot, special, exec, c) in specials {
        if mode & special != 0 {
            out[slot] = if mode & exec != 0 {
                c
            } else {
                c.to_ascii_uppercase()
            };
        }
    }

    out.iter().collect()
}
