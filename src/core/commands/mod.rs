use std::collections::BTreeMap;

mod cat;
mod cd;
mod exit;
mod ls;
mod mkdir;
mod pwd;
mod rm;
mod rmdir;
mod stat;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use pwd::PwdCommand;
pub use rm::RmCommand;
pub use rmdir::RmdirCommand;
pub use stat::StatCommand;

/// Every keyword the interpreter recognizes. The completer offers these;
/// the executor registers one handler per entry.
pub const BUILTIN_NAMES: [&str; 9] = [
    "cat", "cd", "exit", "ls", "mkdir", "pwd", "rm", "rmdir", "stat",
];

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    MissingOperand(&'static str),
    ExecutionError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(line) => {
                write!(f, "myshell: {}: No such file or directory", line)
            }
            CommandError::MissingOperand(cmd) => write!(f, "{}: missing operand", cmd),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl std::error::Error for CommandError {}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cat(CatCommand),
    Cd(CdCommand),
    Exit(ExitCommand),
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Pwd(PwdCommand),
    Rm(RmCommand),
    Rmdir(RmdirCommand),
    Stat(StatCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Cat(cmd) => cmd.execute(args),
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Ls(cmd) => cmd.execute(args),
            CommandType::Mkdir(cmd) => cmd.execute(args),
            CommandType::Pwd(cmd) => cmd.execute(args),
            CommandType::Rm(cmd) => cmd.execute(args),
            CommandType::Rmdir(cmd) => cmd.execute(args),
            CommandType::Stat(cmd) => cmd.execute(args),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        // One table for everything, `cd` and `exit` included.
        executor
            .commands
            .insert("cat".to_string(), CommandType::Cat(CatCommand::new()));
        executor
            .commands
            .insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        executor
            .commands
            .insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        executor
            .commands
            .insert("ls".to_string(), CommandType::Ls(LsCommand::new()));
        executor
            .commands
            .insert("mkdir".to_string(), CommandType::Mkdir(MkdirCommand::new()));
        executor
            .commands
            .insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new()));
        executor
            .commands
            .insert("rm".to_string(), CommandType::Rm(RmCommand::new()));
        executor
            .commands
            .insert("rmdir".to_string(), CommandType::Rmdir(RmdirCommand::new()));
        executor
            .commands
            .insert("stat".to_string(), CommandType::Stat(StatCommand::new()));

        executor
    }

    pub fn execute(&self, command: &str, args: &[String]) -> Result<(), CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(args),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
