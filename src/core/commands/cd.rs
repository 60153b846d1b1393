use super::{Command, CommandError};
use crate::path::PathExpander;
use std::env;

#[derive(Clone, Copy)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    /// With no argument, changes to the invoking user's home directory.
    /// On failure the working directory is left untouched.
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path_str = args.first().map(|s| s.as_str()).unwrap_or("~");
        let expanded_path = self
            .path_expander
            .expand(path_str)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;

        env::set_current_dir(&expanded_path)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::LsCommand;
    use std::fs;

    // One sequential test: the working directory is process-global, so
    // splitting these assertions across tests makes them race.
    #[test]
    fn test_cd_sequence() -> Result<(), Box<dyn std::error::Error>> {
        let cmd = CdCommand::new();

        let target = env::temp_dir().join(format!("myshell_cd_{}", std::process::id()));
        fs::create_dir_all(&target)?;
        let canonical = target.canonicalize()?;

        cmd.execute(&[canonical.display().to_string()])?;
        assert_eq!(env::current_dir()?, canonical);

        // Invalid target leaves the working directory unchanged.
        let result = cmd.execute(&["/nonexistent/path".to_string()]);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        assert_eq!(env::current_dir()?, canonical);

        // Listing another directory must not move us either.
        LsCommand::new().execute(&[env::temp_dir().display().to_string()])?;
        assert_eq!(env::current_dir()?, canonical);

        // No argument goes home.
        cmd.execute(&[])?;
        let home = PathExpander::new().expand("~")?;
        assert_eq!(env::current_dir()?.canonicalize()?, home.canonicalize()?);

        fs::remove_dir(&canonical)?;
        Ok(())
    }
}
