use crate::core::commands::CommandError;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, command: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, command: &str) -> Result<(), ShellError> {
        let line = command.trim_end();
        if line.is_empty() {
            return Ok(());
        }

        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(()),
        };
        // At most one token becomes the path argument; extras are ignored.
        let args: Vec<String> = tokens.take(1).map(str::to_string).collect();

        if !self.executor.is_builtin(name) {
            // The diagnostic quotes the whole line, as the original did.
            return Err(CommandError::NotFound(line.to_string()).into());
        }

        self.executor.execute(name, &args).map_err(ShellError::from)
    }
}
