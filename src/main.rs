use ferrule::error::ShellError;
use ferrule::flags::Flags;
use ferrule::input::{EditorSource, ReaderSource};
use ferrule::shell::Shell;
use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> Result<ExitCode, ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if flags.is_set("version") {
        println!("ferrule {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    if flags.is_set("debug") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let mut shell = Shell::new();

    if let Some(line) = flags.get_value("command") {
        return match shell.dispatcher().handle(&mut io::stdout().lock(), line.as_bytes()) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                eprintln!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    shell.install_interrupt_handler()?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    if !flags.is_set("plain") && io::stdin().is_terminal() {
        let mut input = EditorSource::new(shell.exit_sender())?;
        shell.run(&mut input, &mut out, &mut err)?;
    } else {
        let mut input = ReaderSource::new(io::stdin().lock());
        shell.run(&mut input, &mut out, &mut err)?;
    }

    Ok(ExitCode::SUCCESS)
}
