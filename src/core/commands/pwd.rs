use super::{Command, CommandError};
use std::env;

#[derive(Clone, Copy)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    /// Prints the working directory. An unresolvable one prints nothing;
    /// that is not an error here, matching the prompt's behavior.
    fn execute(&self, _args: &[String]) -> Result<(), CommandError> {
        if let Ok(dir) = env::current_dir() {
            println!("{}", dir.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwd_never_fails() {
        let cmd = PwdCommand::new();
        assert!(cmd.execute(&[]).is_ok());
        assert!(cmd.execute(&["ignored".to_string()]).is_ok());
    }
}
