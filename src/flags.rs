use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn option(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }

    fn matches(&self, arg: &str) -> bool {
        arg == self.short || arg == self.long
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Log diagnostics to stderr"),
        );
        flags.insert(
            "plain".to_string(),
            Flag::switch("-p", "--plain", "Read raw lines from stdin, no line editor"),
        );
        flags.insert(
            "command".to_string(),
            Flag::option("-c", "--command", "Run one command line and exit"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| flag.matches(arg))
                .ok_or_else(|| ShellError::FlagError(format!("unknown flag: {}", arg)))?;

            if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("Usage: ferrule [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <arg>", flag.long)
            } else {
                flag.long.clone()
            };
            text.push_str(&format!("  {}, {:<17} {}\n", flag.short, long, flag.description));
        }
        text
    }

    pub fn print_help(&self) {
        print!("{}", self.help_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_no_flags() {
        let flags = parse(&[]).unwrap();
        assert!(!flags.is_set("help"));
        assert!(!flags.is_set("plain"));
        assert_eq!(flags.get_value("command"), None);
    }

    #[test]
    fn test_short_and_long_switches() {
        let flags = parse(&["-d", "--plain"]).unwrap();
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("plain"));
        assert!(!flags.is_set("version"));
    }

    #[test]
    fn test_command_takes_value() {
        let flags = parse(&["-c", "echo hi"]).unwrap();
        assert_eq!(flags.get_value("command").map(String::as_str), Some("echo hi"));
    }

    #[test]
    fn test_command_without_value() {
        assert!(matches!(
            parse(&["--command"]),
            Err(ShellError::FlagError(msg)) if msg == "Flag --command requires a value"
        ));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(
            parse(&["--bogus"]),
            Err(ShellError::FlagError(msg)) if msg == "unknown flag: --bogus"
        ));
    }

    #[test]
    fn test_help_lists_every_flag() {
        let help = Flags::new().help_text();
        for long in ["--help", "--version", "--debug", "--plain", "--command <arg>"] {
            assert!(help.contains(long), "missing {} in help", long);
        }
    }
}
