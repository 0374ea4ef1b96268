use serde::{Deserialize, Serialize};

use crate::mode::FileKind;

/// Portable description of a filesystem entry.
///
/// Every field except `name` and `followed_symlink` comes from the record
/// obtained by following a trailing symlink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Device the entry lives on
    pub dev: u64,
    pub ino: u64,
    /// Hard link count
    pub nlink: u64,
    /// Type and permission bits, unmodified
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    /// Device number for character and block devices
    pub rdev: u64,
    /// Size in bytes
    pub size: u64,
    /// Preferred I/O block size
    pub blksize: u64,
    /// Allocated 512-byte blocks
    pub blocks: u64,
    /// Last access, nanoseconds since the epoch
    pub atime_ns: u64,
    /// Last modification, nanoseconds since the epoch
    pub mtime_ns: u64,
    /// Last status change, nanoseconds since the epoch
    pub ctime_ns: u64,
    /// Final component of the path the entry was looked up by
    pub name: String,
    /// The path named a symlink and the entry describes its target
    pub followed_symlink: bool,
}

impl DirEntry {
    pub fn kind(&self) -> FileKind {
        FileKind::from_mode(self.mode)
    }

    pub fn is_fifo(&self) -> bool {
        self.kind() == FileKind::Fifo
    }

    pub fn is_char_device(&self) -> bool {
        self.kind() == FileKind::CharDevice
    }

    pub fn is_directory(&self) -> bool {
        self.kind() == FileKind::Directory
    }

    pub fn is_block_device(&self) -> bool {
        self.kind() == FileKind::BlockDevice
    }

    pub fn is_regular(&self) -> bool {
        self.kind() == FileKind::Regular
    }

    /// Only true for entries that were not followed: `lstat` of a link, or
    /// `stat` of a link that could not be resolved.
    pub fn is_symlink(&self) -> bool {
        self.kind() == FileKind::Symlink
    }

    pub fn is_socket(&self) -> bool {
        self.kind() == FileKind::Socket
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
