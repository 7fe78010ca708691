//! Restore ledger: undo log of archived documents, flushed as a shell script.

use std::path::Path;

use mseg_core::errors::FsError;

/// Written before the copy-back lines.
pub const RESTORE_SCRIPT_HEADER: &str = "#!/bin/sh -e\n\ncd \"$(dirname \"$0\")\"\n\n";

/// One archived document: where the original went and where it came from,
/// both relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreEntry {
    pub archived: String,
    pub original: String,
}

#[derive(Debug, Clone, Default)]
pub struct RestoreLedger {
    entries: Vec<RestoreEntry>,
}

impl RestoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, archived: impl Into<String>, original: impl Into<String>) {
        self.entries.push(RestoreEntry {
            archived: archived.into(),
            original: original.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[RestoreEntry] {
        &self.entries
    }

    /// Header plus one `cp` per entry, in archive order.
    pub fn render_script(&self) -> String {
        let mut script = String::from(RESTORE_SCRIPT_HEADER);
        for entry in &self.entries {
            script.push_str(&format!(
                "cp {} {}\n",
                shell_quote(&entry.archived),
                shell_quote(&entry.original)
            ));
        }
        script
    }

    /// Write the script to `path` and mark it executable.
    pub fn write_script(&self, path: &Path) -> Result<(), FsError> {
        std::fs::write(path, self.render_script()).map_err(|source| FsError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(
                |source| FsError::WriteFile {
                    path: path.to_path_buf(),
                    source,
                },
            )?;
        }

        Ok(())
    }
}

/// Leave plain path characters alone; single-quote anything else.
fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | ':' | '@' | '+' | '='));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
