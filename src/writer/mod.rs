//! LIWC `.dic` writer
//!
//! ```text
//! %
//! 1	Posemo (Positive Emotion)
//!     2	Negemo (Negative Emotion)
//! %
//! glad	1
//! sad	2
//! ```

use crate::error::{DicError, DicResult};
use crate::types::{CategoryId, CategoryTree, WordIndex};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

const INDENT: &str = "    ";
const SECTION: &str = "%";

/// Serialize the category table and the word lines into `out`
pub fn write_dictionary<W: Write>(
    out: &mut W,
    tree: &CategoryTree,
    words: &WordIndex,
) -> io::Result<()> {
    writeln!(out, "{}", SECTION)?;
    for (depth, cat) in tree.walk() {
        writeln!(
            out,
            "{}{}\t{} ({})",
            INDENT.repeat(depth),
            cat.id,
            cat.name,
            cat.description
        )?;
    }
    writeln!(out, "{}", SECTION)?;

    for (word, ids) in words.iter() {
        let mut sorted: Vec<&CategoryId> = ids.iter().collect();
        sorted.sort();
        write!(out, "{}", word)?;
        for id in sorted {
            write!(out, "\t{}", id)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the dictionary in memory
pub fn render_dictionary(tree: &CategoryTree, words: &WordIndex) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_dictionary(&mut buf, tree, words);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the dictionary to `path`, replacing any existing file
///
/// Content goes to a temporary file next to the destination first and is
/// renamed over it once complete, so a failed run never leaves a truncated
/// dictionary. A symlinked destination is written through to its target; a
/// read-only destination is refused. Returns the number of bytes written.
pub fn save_dictionary(path: &Path, tree: &CategoryTree, words: &WordIndex) -> DicResult<usize> {
    let target = resolve_destination(path).map_err(|e| DicError::write(path, e))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let content = render_dictionary(tree, words);

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DicError::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| DicError::write(path, e))?;
    set_output_permissions(&target, tmp.as_file()).map_err(|e| DicError::write(path, e))?;
    tmp.persist(&target)
        .map_err(|e| DicError::write(path, e.error))?;

    info!(path = %target.display(), bytes = content.len(), "wrote dictionary");
    Ok(content.len())
}

/// Follow a symlink to the file it names and reject read-only files
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)?,
        _ => path.to_path_buf(),
    };

    if let Ok(meta) = fs::metadata(&target) {
        if meta.permissions().readonly() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "destination is read-only",
            ));
        }
    }
    Ok(target)
}

/// Temp files are created owner-only; give the output the permissions a
/// plainly created file would have, or keep those of the file it replaces
fn set_output_permissions(path: &Path, file: &fs::File) -> io::Result<()> {
    if let Ok(existing) = fs::metadata(path) {
        return file.set_permissions(existing.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}
