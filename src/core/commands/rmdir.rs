use super::{Command, CommandError};
use std::fs;

#[derive(Clone, Copy)]
pub struct RmdirCommand;

impl Default for RmdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RmdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmdirCommand {
    /// Removes an empty directory only; a populated one is an error.
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingOperand("rmdir"))?;

        fs::remove_dir(path).map_err(|e| {
            CommandError::ExecutionError(format!("Error removing directory {}: {}", path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_rmdir_rejects_non_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = env::temp_dir().join(format!("myshell_rmdir_{}", std::process::id()));
        fs::create_dir_all(dir.join("child"))?;

        let cmd = RmdirCommand::new();
        let result = cmd.execute(&[dir.display().to_string()]);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        assert!(dir.exists());

        fs::remove_dir(dir.join("child"))?;
        cmd.execute(&[dir.display().to_string()])?;
        assert!(!dir.exists());
        Ok(())
    }

    #[test]
    fn test_rmdir_missing_directory() {
        let cmd = RmdirCommand::new();
        let result = cmd.execute(&["/nonexistent/dir".to_string()]);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }

    #[test]
    fn test_execute_missing_operand() {
        let cmd = RmdirCommand::new();
        assert!(matches!(
            cmd.execute(&[]),
            Err(CommandError::MissingOperand("rmdir"))
        ));
    }
}
