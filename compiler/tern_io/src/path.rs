//! String path manipulation.
//!
//! Extension helpers look at the last `.` anywhere in the path, not only in
//! the file name: `truncate_ext("a.b/c") == "a"`. Use
//! [`file_name_without_ext`] to strip an extension from the file name alone.

use std::fs;
use std::sync::OnceLock;

use crate::IoError;

/// Delimiter used when building paths.
pub const DELIMITER: char = '/';

/// What a path refers to on disk.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PathType {
    File,
    Directory,
}

/// Check if `c` separates path segments (`/` or `\`).
#[inline]
pub fn is_delimiter(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Check if a leading segment names a root: empty (as in `/usr`) or a
/// drive letter (as in `c:/`).
pub fn is_drive_specification(segment: &str) -> bool {
    match segment.as_bytes() {
        [] => true,
        [letter, b':'] => letter.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Strip everything from the last `.`.
pub fn truncate_ext(path: &str) -> &str {
    path.rfind('.').map_or(path, |dot| &path[..dot])
}

/// Replace everything from the last `.` with `.ext`, or append `.ext` if
/// there is no `.`.
pub fn replace_ext(path: &str, ext: &str) -> String {
    format!("{}.{ext}", truncate_ext(path))
}

/// Everything after the last delimiter.
pub fn file_name(path: &str) -> &str {
    path.rfind(is_delimiter).map_or(path, |pos| &path[pos + 1..])
}

/// The file name with its last extension removed.
pub fn file_name_without_ext(path: &str) -> &str {
    truncate_ext(file_name(path))
}

/// Everything after the last `.`, empty if there is none.
pub fn file_ext(path: &str) -> &str {
    path.rfind('.').map_or("", |dot| &path[dot + 1..])
}

/// Everything before the last delimiter, empty if there is none.
pub fn parent_directory(path: &str) -> &str {
    path.rfind(is_delimiter).map_or("", |pos| &path[..pos])
}

fn ends_with_delimiter(path: &str) -> bool {
    path.ends_with(is_delimiter)
}

fn push_with_delimiter(out: &mut String, part: &str) {
    out.push_str(part);
    if !ends_with_delimiter(part) {
        out.push(DELIMITER);
    }
}

/// Join two paths with a delimiter unless `first` already ends in one.
///
/// An empty `first` yields `second` unchanged.
pub fn combine(first: &str, second: &str) -> String {
    if first.is_empty() {
        return second.to_owned();
    }
    let mut out = String::with_capacity(first.len() + second.len() + 1);
    push_with_delimiter(&mut out, first);
    out.push_str(second);
    out
}

/// Join three paths, adding a delimiter after each of the first two unless
/// it already ends in one.
///
/// Unlike [`combine`], empty parts are not skipped: `combine3("", "b", "c")`
/// is `/b/c` and `combine3("a", "", "c")` is `a//c`.
pub fn combine3(first: &str, second: &str, third: &str) -> String {
    let mut out = String::with_capacity(first.len() + second.len() + third.len() + 2);
    push_with_delimiter(&mut out, first);
    push_with_delimiter(&mut out, second);
    out.push_str(third);
    out
}

/// Split a path into its segments.
///
/// A trailing delimiter does not produce a trailing empty segment, unless
/// the path is only a root (`//`, `c://`), whose empty segment is kept so
/// the root stays recognizable.
pub fn split(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split(is_delimiter).collect();
    if segments.last().is_some_and(|last| last.is_empty()) {
        segments.pop();
    }
    if segments.len() > 1
        && segments.last().is_some_and(|last| last.is_empty())
        && !(segments.len() == 2 && is_drive_specification(segments[0]))
    {
        segments.pop();
    }
    segments
}

/// Check if any segment is `.` or `..`.
pub fn is_relative(path: &str) -> bool {
    split(path)
        .iter()
        .any(|&segment| segment == "." || segment == "..")
}

/// Remove `.` segments and fold `name/..` pairs.
///
/// A `..` is kept when it follows another `..` or a leading root. An empty
/// result becomes `.`.
pub fn simplify(path: &str) -> String {
    let mut segments = split(path);

    let mut i = 0;
    while i < segments.len() {
        let segment = segments[i];
        if segment == "." && segments.len() > 1 {
            segments.remove(i);
            continue;
        }
        if segment == ".." && i > 0 {
            let before = segments[i - 1];
            if before != ".." && !(i == 1 && is_drive_specification(before)) {
                segments.drain(i - 1..=i);
                i -= 1;
                continue;
            }
        }
        i += 1;
    }

    if segments.is_empty() {
        return ".".to_owned();
    }
    segments.join("/")
}

/// Whether `path` is a file or a directory.
pub fn path_type(path: &str) -> Result<PathType, IoError> {
    let metadata = fs::metadata(path).map_err(|err| IoError::from_io(path, err))?;
    if metadata.is_dir() {
        Ok(PathType::Directory)
    } else if metadata.is_file() {
        Ok(PathType::File)
    } else {
        Err(IoError::NotADirectoryOrFile {
            path: path.to_owned(),
        })
    }
}

/// The absolute path with every symbolic link, `.` and `..` resolved.
///
/// The path must exist.
pub fn canonical(path: &str) -> Result<String, IoError> {
    let resolved = fs::canonicalize(path).map_err(|err| IoError::from_io(path, err))?;
    resolved
        .into_os_string()
        .into_string()
        .map_err(|raw| IoError::NonUtf8Path {
            path: raw.to_string_lossy().into_owned(),
        })
}

/// Create a single directory. The parent must already exist.
pub fn create_directory(path: &str) -> Result<(), IoError> {
    tracing::trace!(path, "creating directory");
    fs::create_dir(path).map_err(|err| IoError::from_io(path, err))
}

/// Path of the running executable, computed on first use.
pub fn executable_path() -> Result<&'static str, IoError> {
    static EXECUTABLE: OnceLock<String> = OnceLock::new();

    if let Some(path) = EXECUTABLE.get() {
        return Ok(path);
    }
    let current = std::env::current_exe().map_err(|err| IoError::from_io("<executable>", err))?;
    let path = current
        .into_os_string()
        .into_string()
        .map_err(|raw| IoError::NonUtf8Path {
            path: raw.to_string_lossy().into_owned(),
        })?;
    Ok(EXECUTABLE.get_or_init(|| path))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
