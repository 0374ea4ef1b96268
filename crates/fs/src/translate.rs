use crate::{
    config::{CtimeNanos, TranslateOptions},
    entry::DirEntry,
    mode::{S_IFLNK, file_type_bits},
    raw::{RawStatus, Timespec},
};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Whether the record's type bits say symbolic link. Unrecognised type bits
/// are not a link.
pub fn is_symbolic_link<R: RawStatus + ?Sized>(record: &R) -> bool {
    file_type_bits(record.mode()) == S_IFLNK
}

/// Build an entry for `path` from the record obtained without following a
/// trailing symlink (`no_follow`) and the one obtained with it (`follow`).
///
/// Scalar fields come from `follow`. The change time takes its nanoseconds
/// from the access time; see [`CtimeNanos`] and [`build_entry_with`].
pub fn build_entry<N, F>(path: &str, no_follow: &N, follow: &F) -> DirEntry
where
    N: RawStatus + ?Sized,
    F: RawStatus + ?Sized,
{
    build_entry_with(path, no_follow, follow, &TranslateOptions::default())
}

/// [`build_entry`] with `opts` choosing where the change time's nanoseconds
/// come from.
pub fn build_entry_with<N, F>(
    path: &str,
    no_follow: &N,
    follow: &F,
    opts: &TranslateOptions,
) -> DirEntry
where
    N: RawStatus + ?Sized,
    F: RawStatus + ?Sized,
{
    let atime = follow.atime();
    let ctime = match opts.ctime_nanos {
        CtimeNanos::AccessTime => Timespec::new(follow.ctime().sec, atime.nsec),
        CtimeNanos::ChangeTime => follow.ctime(),
    };

    DirEntry {
        dev: follow.dev(),
        ino: follow.ino(),
        nlink: follow.nlink(),
        mode: follow.mode(),
        uid: follow.uid(),
        gid: follow.gid(),
        rdev: follow.rdev(),
        size: widen(follow.size()),
        blksize: widen(follow.blksize()),
        blocks: widen(follow.blocks()),
        atime_ns: timestamp_nanos(atime),
        mtime_ns: timestamp_nanos(follow.mtime()),
        ctime_ns: timestamp_nanos(ctime),
        name: base_name(path).to_owned(),
        followed_symlink: is_symbolic_link(no_follow) && !is_symbolic_link(follow),
    }
}

/// Everything after the last `/`, or the whole path when there is none.
/// A trailing slash yields an empty name.
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// `sec * 1e9 + nsec` as an unsigned count. Times before the epoch read as
/// zero and results past `u64::MAX` saturate.
pub fn timestamp_nanos(ts: Timespec) -> u64 {
    // i64::MAX * 1e9 + i64::MAX fits comfortably in i128
    let total = i128::from(ts.sec) * i128::from(NANOS_PER_SEC) + i128::from(ts.nsec);
    if total < 0 {
        return 0;
    }
    u64::try_from(total).unwrap_or(u64::MAX)
}

fn widen(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
