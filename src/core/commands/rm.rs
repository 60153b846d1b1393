use super::{Command, CommandError};
use std::fs;

#[derive(Clone, Copy)]
pub struct RmCommand;

impl Default for RmCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingOperand("rm"))?;

        fs::remove_file(path).map_err(|e| {
            CommandError::ExecutionError(format!("Error unlinking file {}: {}", path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_rm_removes_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = env::temp_dir().join(format!("myshell_rm_{}", std::process::id()));
        fs::write(&path, b"contents")?;

        let cmd = RmCommand::new();
        cmd.execute(&[path.display().to_string()])?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_rm_missing_file() {
        let cmd = RmCommand::new();
        let result = cmd.execute(&["/nonexistent/file".to_string()]);
        match result {
            Err(CommandError::ExecutionError(msg)) => {
                assert!(msg.starts_with("Error unlinking file /nonexistent/file: "));
            }
            other => panic!("expected ExecutionError, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_missing_operand() {
        let cmd = RmCommand::new();
        assert!(matches!(
            cmd.execute(&[]),
            Err(CommandError::MissingOperand("rm"))
        ));
    }
}
