use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

#[derive(Clone, Copy)]
pub struct PathCompleter;

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_to_search, file_prefix) = self.parse_path_input(incomplete);
        // Everything before the final component is kept verbatim in the
        // replacement so rustyline can swap the whole word.
        let kept = &incomplete[..incomplete.len() - file_prefix.len()];
        self.get_path_matches(&dir_to_search, &file_prefix, kept)
    }

    fn parse_path_input(&self, incomplete: &str) -> (PathBuf, String) {
        if incomplete.is_empty() {
            (PathBuf::from("."), String::new())
        } else if incomplete.ends_with('/') {
            (PathBuf::from(incomplete), String::new())
        } else {
            let path = Path::new(incomplete);
            let prefix = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    (parent.to_path_buf(), prefix)
                }
                _ => (PathBuf::from("."), prefix),
            }
        }
    }

    fn get_path_matches(&self, dir_to_search: &Path, file_prefix: &str, kept: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(file_prefix) {
                        let is_dir = entry.path().is_dir();
                        let replacement = if is_dir {
                            format!("{}{}/", kept, name)
                        } else {
                            format!("{}{}", kept, name)
                        };
                        matches.push(Pair {
                            display: name.to_string(),
                            replacement,
                        });
                    }
                }
            }
        }

        matches
    }
}
