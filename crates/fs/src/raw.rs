//! Platform status records, as the OS-call layer hands them over.

use serde::{Deserialize, Serialize};

/// A `timespec`-style timestamp. Components are signed the way the kernel
/// reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: i64,
}

impl Timespec {
    pub const fn new(sec: i64, nsec: i64) -> Self {
        Self { sec, nsec }
    }
}

/// The fields of a `stat` result that the translator reads.
///
/// Platform adapters implement this for whatever their stat-like call
/// returns; the translator never looks at anything else.
pub trait RawStatus {
    fn dev(&self) -> u64;
    fn ino(&self) -> u64;
    fn nlink(&self) -> u64;
    /// Packed type and permission bits.
    fn mode(&self) -> u32;
    fn uid(&self) -> u32;
    fn gid(&self) -> u32;
    /// Device number, meaningful for character and block devices only.
    fn rdev(&self) -> u64;
    fn size(&self) -> i64;
    fn blksize(&self) -> i64;
    fn blocks(&self) -> i64;
    fn atime(&self) -> Timespec;
    fn mtime(&self) -> Timespec;
    fn ctime(&self) -> Timespec;
}

/// Owned copy of a status record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub dev: u64,
    pub ino: u64,
    pub nlink: u64,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub rdev: u64,
    pub size: i64,
    pub blksize: i64,
    pub blocks: i64,
    pub atime: Timespec,
    pub mtime: Timespec,
    pub ctime: Timespec,
}

impl StatRecord {
    /// Snapshot any record into an owned one.
    pub fn capture<R: RawStatus + ?Sized>(raw: &R) -> Self {
        Self {
            dev: raw.dev(),
            ino: raw.ino(),
            nlink: raw.nlink(),
            mode: raw.mode(),
            uid: raw.uid(),
            gid: raw.gid(),
            rdev: raw.rdev(),
            size: raw.size(),
            blksize: raw.blksize(),
            blocks: raw.blocks(),
            atime: raw.atime(),
            mtime: raw.mtime(),
            ctime: raw.ctime(),
        }
    }
}

impl RawStatus for StatRecord {
    fn dev(&self) -> u64 {
        self.dev
    }
    fn ino(&self) -> u64 {
        self.ino
    }
    fn nlink(&self) -> u64 {
        self.nlink
    }
    fn mode(&self) -> u32 {
        self.mode
    }
    fn uid(&self) -> u32 {
        self.uid
    }
    fn gid(&self) -> u32 {
        self.gid
    }
    fn rdev(&self) -> u64 {
        self.rdev
    }
    fn size(&self) -> i64 {
        self.size
    }
    fn blksize(&self) -> i64 {
        self.blksize
    }
    fn blocks(&self) -> i64 {
        self.blocks
    }
    fn atime(&self) -> Timespec {
        self.atime
    }
    fn mtime(&self) -> Timespec {
        self.mtime
    }
    fn ctime(&self) -> Timespec {
        self.ctime
    }
}

impl<R: RawStatus + ?Sized> RawStatus for &R {
    fn dev(&self) -> u64 {
        (**self).dev()
    }
    fn ino(&self) -> u64 {
        (**self).ino()
    }
    fn nlink(&self) -> u64 {
        (**self).nlink()
    }
    fn mode(&self) -> u32 {
        (**self).mode()
    }
    fn uid(&self) -> u32 {
        (**self).uid()
    }
    fn gid(&self) -> u32 {
        (**self).gid()
    }
    fn rdev(&self) -> u64 {
        (**self).rdev()
    }
    fn size(&self) -> i64 {
        (**self).size()
    }
    fn blksize(&self) -> i64 {
        (**self).blksize()
    }
    fn blocks(&self) -> i64 {
        (**self).blocks()
    }
    fn atime(&self) -> Timespec {
        (**self).atime()
    }
    fn mtime(&self) -> Timespec {
        (**self).mtime()
    }
    fn ctime(&self) -> Timespec {
        (**self).ctime()
    }
}

// std already widens its unsigned fields to u64; the signed ones are
// narrowed back so every adapter presents the same shape.
#[cfg(unix)]
mod unix {
    use std::{fs::Metadata, os::unix::fs::MetadataExt};

    use super::{RawStatus, Timespec};

    impl RawStatus for Metadata {
        fn dev(&self) -> u64 {
            MetadataExt::dev(self)
        }
        fn ino(&self) -> u64 {
            MetadataExt::ino(self)
        }
        fn nlink(&self) -> u64 {
            MetadataExt::nlink(self)
        }
        fn mode(&self) -> u32 {
            MetadataExt::mode(self)
        }
        fn uid(&self) -> u32 {
            MetadataExt::uid(self)
        }
        fn gid(&self) -> u32 {
            MetadataExt::gid(self)
        }
        fn rdev(&self) -> u64 {
            MetadataExt::rdev(self)
        }
        fn size(&self) -> i64 {
            to_signed(MetadataExt::size(self))
        }
        fn blksize(&self) -> i64 {
            to_signed(MetadataExt::blksize(self))
        }
        fn blocks(&self) -> i64 {
            to_signed(MetadataExt::blocks(self))
        }
        fn atime(&self) -> Timespec {
            Timespec::new(MetadataExt::atime(self), MetadataExt::atime_nsec(self))
        }
        fn mtime(&self) -> Timespec {
            Timespec::new(MetadataExt::mtime(self), MetadataExt::mtime_nsec(self))
        }
        fn ctime(&self) -> Timespec {
            Timespec::new(MetadataExt::ctime(self), MetadataExt::ctime_nsec(self))
        }
    }

    fn to_signed(v: u64) -> i64 {
        i64::try_from(v).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
