#![allow(dead_code)]

use crate::modemunch::FileMode;

// ===== Special Mode Bits =====
// Source: include/uapi/linux/stat.h
pub const S_ISUID: FileMode = 0o4000; // Set user ID on execution
pub const S_ISGID: FileMode = 0o2000; // Set group ID on execution
pub const S_ISVTX: FileMode = 0o1000; // Sticky bit

// ===== File Permissions =====
// Source: include/uapi/linux/stat.h
pub const S_IRWXA: FileMode = 0o777; // All permissions for all users
pub const S_IRWXU: FileMode = 0o700; // User read, write, execute
pub const S_IRUSR: FileMode = 0o400; // User read
pub const S_IWUSR: FileMode = 0o200; // User write
pub const S_IXUSR: FileMode = 0o100; // User execute
pub const S_IRWXG: FileMode = 0o070; // Group read, write, execute
pub const S_IRGRP: FileMode = 0o040; // Group read
pub const S_IWGRP: FileMode = 0o020; // Group write
pub const S_IXGRP: FileMode = 0o010; // Group execute
pub const S_IRWXO: FileMode = 0o007; // Others read, write, execute
pub const S_IROTH: FileMode = 0o004; // Others read
pub const S_IWOTH: FileMode = 0o002; // Others write
pub const S_IXOTH: FileMode = 0o001; // Others execute

// Every bit a mode string can address
pub const S_IALLUGO: FileMode = 0o7777;

// ===== Selector Masks (who) =====
// A selector reaches its rwx bits plus the special bit that belongs to it.
pub const WHO_USER: FileMode = S_ISUID | S_IRWXU; // 0o4700
pub const WHO_GROUP: FileMode = S_ISGID | S_IRWXG; // 0o2070
pub const WHO_OTHER: FileMode = S_ISVTX | S_IRWXO; // 0o1007
pub const WHO_ALL: FileMode = S_IALLUGO; // 0o7777

// ===== Permission Masks (what) =====
pub const PERM_READ: FileMode = S_IRUSR | S_IRGRP | S_IROTH; // 0o444
pub const PERM_WRITE: FileMode = S_IWUSR | S_IWGRP | S_IWOTH; // 0o222
pub const PERM_EXEC: FileMode = S_IXUSR | S_IXGRP | S_IXOTH; // 0o111
pub const PERM_SETID: FileMode = S_ISUID | S_ISGID; // 0o6000

// ===== rwxrwxrwx Slot Table =====
// One entry per position in the 9-character form, owner first.
pub const RWX_SLOTS: [(char, FileMode); 9] = [
    ('r', S_IRUSR),
    ('w', S_IWUSR),
    ('x', S_IXUSR),
    ('r', S_IRGRP),
    ('w', S_IWGRP),
    ('x', S_IXGRP),
    ('r', S_IROTH),
    ('w', S_IWOTH),
    ('x', S_IXOTH),
];

pub const RWX_LEN: usize = RWX_SLOTS.len();

// Slots that also render a special bit (s/S, t/T)
pub const SETUID_SLOT: usize = 2;
pub const SETGID_SLOT: usize = 5;
pub const STICKY_SLOT: usize = 8;

// Longest accepted octal mode string
pub const OCTAL_MAX_LEN: usize = 8;
