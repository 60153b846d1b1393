use rustyline::{history::FileHistory, Editor};
use std::env;

mod executor;

use crate::{
    core::commands::CommandExecutor, error::ShellError, flags::Flags,
    highlight::SyntaxHighlighter, input::ShellCompleter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));

        Ok(Shell {
            editor,
            flags,
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            // Resolved fresh each cycle; the directory can vanish out from
            // under the process, in which case the prompt is omitted.
            let prompt = match env::current_dir() {
                Ok(dir) => format!("{} > ", dir.display()),
                Err(_) => String::new(),
            };

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.execute_command(&line) {
                        eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }
}
