use std::{collections::BTreeSet, env, fs};

use rustyline::completion::Pair;

use crate::core::commands::Builtin;

/// Completes the command word from the built-ins and the executables on `PATH`.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    external: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self::default();
        completer.refresh_commands();
        completer
    }

    pub fn refresh_commands(&mut self) {
        self.external.clear();
        if let Some(path_var) = env::var_os("PATH") {
            for dir in env::split_paths(&path_var) {
                let Ok(entries) = fs::read_dir(dir) else {
                    continue;
                };
                for entry in entries.filter_map(Result::ok) {
                    let is_candidate = entry
                        .file_type()
                        .map(|t| t.is_file() || t.is_symlink())
                        .unwrap_or(false);
                    if !is_candidate {
                        continue;
                    }
                    if let Some(name) = entry.file_name().to_str() {
                        if !Builtin::is_builtin(name) {
                            self.external.insert(name.to_string());
                        }
                    }
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        let builtins = Builtin::ALL
            .iter()
            .map(|b| b.name())
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: format!("{} (builtin)", name),
                replacement: name.to_string(),
            });

        let external = self
            .external
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            });

        builtins.chain(external).collect()
    }
}
