use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hdfsh::format::render_text;
use hdfsh::types::{CommandResult, ResultData};
use hdfsh::{Config, HdfsShell};

const USAGE: &str = "\
hdfsh - constrained hdfs shell over WebHDFS

Usage:
  hdfsh <hdfs dfs -cmd ...>   run a single command and exit
  hdfsh                       read commands from stdin (repl)

Examples:
  hdfsh hdfs dfs -ls /user/hive
  hdfsh hadoop fs -count -q /tmp

Configuration is read from $HDFS_CONF_DIR/config.json
(or the file named by $HDFS_CONF_FILE).";

fn main() -> ExitCode {
    let config = Config::load();
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--help") | Some("-h") if args.len() == 1 => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Some("--version") if args.len() == 1 => {
            println!("hdfsh {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let shell = HdfsShell::new(config);
    if args.is_empty() {
        match repl(&shell) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        }
    } else {
        let line = args.join(" ");
        if render(shell.submit(&line)) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    let default_directive = config.log_level.as_deref().unwrap_or("warn");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn repl(shell: &HdfsShell) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("hdfs> ");
        stdout.flush().context("could not flush prompt")?;
        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("could not read stdin")?;
        if read == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            return Ok(());
        }
        render(shell.submit(line));
    }
}

/// Print a result, tables to stdout and failures to stderr. Returns
/// whether the command succeeded.
fn render(result: CommandResult) -> bool {
    if result.status {
        match result.data {
            Some(ResultData::Table(table)) => {
                if !table.is_empty() {
                    println!("{}", render_text(&table));
                }
            }
            Some(ResultData::Message(message)) => println!("{message}"),
            None => {}
        }
        true
    } else {
        if let Some(message) = result.message {
            eprintln!("{message}");
        }
        false
    }
}
