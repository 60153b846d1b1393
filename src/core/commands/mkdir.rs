use super::{Command, CommandError};
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;

#[derive(Clone, Copy)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingOperand("mkdir"))?;

        DirBuilder::new().mode(0o755).create(path).map_err(|e| {
            CommandError::ExecutionError(format!("Error making directory {}: {}", path, e))
        })
    }
}
