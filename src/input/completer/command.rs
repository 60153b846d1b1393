use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::core::commands::BUILTIN_NAMES;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<&'static str>,
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self {
            commands: BUILTIN_NAMES.iter().copied().collect(),
        }
    }

    pub fn complete_command(&self, word: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}
