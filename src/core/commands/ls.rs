use super::{Command, CommandError};
use std::fs;
use std::path::Path;

const COLUMN_WIDTH: usize = 30;

#[derive(Clone, Copy)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    /// Renders one line per entry in enumeration order, directories tagged
    /// `<dir>`. Metadata is looked up on each entry's full path, so the
    /// working directory is never touched. A failed lookup is reported to
    /// stderr and the entry printed untagged; the listing continues.
    fn listing_lines(&self, dir: &Path) -> Result<Vec<String>, CommandError> {
        let entries = fs::read_dir(dir).map_err(|e| {
            CommandError::ExecutionError(format!(
                "could not open directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut lines = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("stat: {}: {}", dir.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = match fs::metadata(entry.path()) {
                Ok(info) => info.is_dir(),
                Err(e) => {
                    eprintln!("stat: {}: {}", name, e);
                    false
                }
            };

            if is_dir {
                lines.push(format!("{:<width$}\t<dir>", name, width = COLUMN_WIDTH));
            } else {
                lines.push(format!("{:<width$}", name, width = COLUMN_WIDTH));
            }
        }
        Ok(lines)
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let target = args.first().map(String::as_str).unwrap_or(".");
        for line in self.listing_lines(Path::new(target))? {
            println!("{}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_listing_tags_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = env::temp_dir().join(format!("myshell_ls_{}", std::process::id()));
        fs::create_dir_all(dir.join("b"))?;
        fs::write(dir.join("a"), b"file")?;

        let cmd = LsCommand::new();
        let lines = cmd.listing_lines(&dir)?;
        assert_eq!(lines.len(), 2);

        let file_line = lines
            .iter()
            .find(|l| l.starts_with('a'))
            .expect("file entry missing");
        let dir_line = lines
            .iter()
            .find(|l| l.starts_with('b'))
            .expect("dir entry missing");

        assert!(!file_line.contains("<dir>"));
        assert_eq!(file_line.len(), COLUMN_WIDTH);
        assert!(dir_line.ends_with("\t<dir>"));

        fs::remove_file(dir.join("a"))?;
        fs::remove_dir(dir.join("b"))?;
        fs::remove_dir(&dir)?;
        Ok(())
    }

    #[test]
    fn test_unreadable_directory() {
        let cmd = LsCommand::new();
        let result = cmd.listing_lines(Path::new("/nonexistent/dir"));
        match result {
            Err(CommandError::ExecutionError(msg)) => {
                assert!(msg.starts_with("could not open directory /nonexistent/dir: "));
            }
            other => panic!("expected ExecutionError, got {:?}", other),
        }
    }
}
