//! Interactive note editor.
//!
//! # Responsibility
//! - Drive `notepad_core::NoteStore` from stdin line commands.
//! - Wire logging and the HTTP sink from command-line flags.

mod command;
mod render;
mod session;

use clap::Parser;
use notepad_core::{
    default_log_level, init_logging, HttpNoteSink, LogTarget, NoopSink, NoteSink, NoteStore,
    SyncConfig, DEFAULT_BASE_URL,
};
use session::{Outcome, Session};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "notepad", version, about = "Create, edit and delete short notes")]
struct Cli {
    /// Base address of the note service new notes are mirrored to.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    /// Keep notes local only.
    #[arg(long)]
    offline: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notepad: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let target = LogTarget::from_dir_arg(cli.log_dir.as_deref())?;
    init_logging(level, target)?;

    // Sync requests run on worker threads while stdin is read on this one.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("failed to start runtime: {err}"))?;

    let sink: Box<dyn NoteSink> = if cli.offline {
        Box::new(NoopSink)
    } else {
        let config = SyncConfig::new(&cli.base_url).map_err(|err| err.to_string())?;
        let sink =
            HttpNoteSink::new(&config, runtime.handle().clone()).map_err(|err| err.to_string())?;
        log::info!(
            "event=sync_config module=cli status=ok url={}",
            sink.url()
        );
        Box::new(sink)
    };

    let mut session = Session::new(NoteStore::new(sink));
    let result = repl(&mut session);

    // Pending create-note attempts are abandoned here.
    runtime.shutdown_background();
    result
}

fn repl<S: NoteSink, C: notepad_core::Clock>(session: &mut Session<S, C>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "notepad {} (type `help`)", notepad_core::core_version())
        .map_err(|err| err.to_string())?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        let output = match command::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => match session.apply(command) {
                Outcome::Continue(text) => text,
                Outcome::Quit => break,
            },
            Err(message) => format!("{message}\n"),
        };
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| err.to_string())?;
    }

    Ok(())
}
