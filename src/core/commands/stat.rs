use super::{Command, CommandError};
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;

#[derive(Clone, Copy)]
pub struct StatCommand;

impl Default for StatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl StatCommand {
    pub fn new() -> Self {
        Self
    }

    fn format_metadata(&self, path: &str, info: &Metadata) -> String {
        let modified = match info.modified() {
            Ok(time) => DateTime::<Local>::from(time)
                .format("%a %b %e %H:%M:%S %Y")
                .to_string(),
            Err(_) => String::from("unknown"),
        };

        format!(
            "File Name: {}\n\
             Total Size: {}\n\
             Last Modified: {}\n\
             Protection: {:04o}\n\
             Number of hardlinks: {}\n\
             Inode: {}",
            path,
            info.len(),
            modified,
            info.mode() & 0o7777,
            info.nlink(),
            info.ino(),
        )
    }
}

impl Command for StatCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingOperand("stat"))?;

        let info = fs::metadata(path).map_err(|e| {
            CommandError::ExecutionError(format!("Error getting stats for {}: {}", path, e))
        })?;

        println!("{}", self.format_metadata(path, &info));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    #[test]
    fn test_format_metadata_fields() -> Result<(), Box<dyn std::error::Error>> {
        let path = env::temp_dir().join(format!("myshell_stat_{}", std::process::id()));
        let mut file = fs::File::create(&path)?;
        file.write_all(b"hello")?;
        drop(file);

        let cmd = StatCommand::new();
        let info = fs::metadata(&path)?;
        let rendered = cmd.format_metadata(&path.display().to_string(), &info);

        assert!(rendered.contains("Total Size: 5"));
        assert!(rendered.contains("Last Modified: "));
        assert!(rendered.contains("Number of hardlinks: 1"));
        assert!(rendered.contains(&format!("Inode: {}", info.ino())));

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_execute_missing_path() {
        let cmd = StatCommand::new();
        let result = cmd.execute(&["/nonexistent/path".to_string()]);
        match result {
            Err(CommandError::ExecutionError(msg)) => {
                assert!(msg.starts_with("Error getting stats for /nonexistent/path: "));
            }
            other => panic!("expected ExecutionError, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_missing_operand() {
        let cmd = StatCommand::new();
        assert!(matches!(
            cmd.execute(&[]),
            Err(CommandError::MissingOperand("stat"))
        ));
    }
}
