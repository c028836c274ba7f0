//! Command-line interface for confbox.
//!
//! Each subcommand opens a saved session in a headless dialog, operates its
//! controls and saves the session back if the settings changed.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use confbox_config::{AddressFamily, Direction};
use confbox_ssh::BackendTable;

use crate::editor::{EditError, SessionEditor, storage_name};
use crate::session_store::FileSessionStorage;

/// confbox - inspect and edit saved terminal sessions
#[derive(Parser)]
#[command(name = "confbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the saved sessions
    #[arg(long, global = true, value_name = "PATH")]
    pub sessions_dir: Option<PathBuf>,

    /// Logging verbosity (overrides DEBUG_LEVEL)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List saved sessions, default settings first
    Sessions,

    /// Show a session's settings as the dialog displays them
    Show {
        session: String,

        /// Only this panel and the panels below it (e.g. "Connection/SSH")
        #[arg(long, value_name = "PATH")]
        panel: Option<String>,
    },

    /// Manage SSH port forwards
    Forward {
        #[command(subcommand)]
        action: ForwardAction,
    },

    /// Manage environment variables sent to the server
    Env {
        #[command(subcommand)]
        action: EnvAction,
    },

    /// Manage manually configured host keys
    Hostkey {
        #[command(subcommand)]
        action: HostKeyAction,
    },

    /// Delete a saved session
    Delete { session: String },
}

#[derive(Subcommand)]
pub enum ForwardAction {
    List {
        session: String,
    },
    Add {
        session: String,

        /// Source port, optionally with a listen address ("127.0.0.1:8080")
        source: String,

        /// Destination "host:port" (not used for dynamic forwards)
        #[arg(default_value = "")]
        destination: String,

        #[arg(long, value_enum, default_value_t = ForwardDirection::Local)]
        direction: ForwardDirection,

        #[arg(long, value_enum, default_value_t = ForwardFamily::Auto)]
        family: ForwardFamily,
    },
    /// Remove a forward by its listed key (e.g. "L8080", "4R2222")
    Remove {
        session: String,
        key: String,
    },
}

#[derive(Subcommand)]
pub enum EnvAction {
    List { session: String },
    /// Set a variable, replacing any existing value
    Set {
        session: String,
        var: String,
        value: String,
    },
    Remove { session: String, var: String },
}

#[derive(Subcommand)]
pub enum HostKeyAction {
    List { session: String },
    /// Add a fingerprint or public key
    Add { session: String, key: String },
    Remove { session: String, key: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ForwardDirection {
    Local,
    Remote,
    Dynamic,
}

impl From<ForwardDirection> for Direction {
    fn from(d: ForwardDirection) -> Self {
        match d {
            ForwardDirection::Local => Direction::Local,
            ForwardDirection::Remote => Direction::Remote,
            ForwardDirection::Dynamic => Direction::Dynamic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ForwardFamily {
    Auto,
    Ipv4,
    Ipv6,
}

impl From<ForwardFamily> for AddressFamily {
    fn from(f: ForwardFamily) -> Self {
        match f {
            ForwardFamily::Auto => AddressFamily::Unspecified,
            ForwardFamily::Ipv4 => AddressFamily::V4,
            ForwardFamily::Ipv6 => AddressFamily::V6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// The list a compound-setting command works on.
#[derive(Clone, Copy)]
enum Table {
    PortForwards,
    Environment,
    HostKeys,
}

impl Table {
    fn rows(self, editor: &SessionEditor) -> Vec<String> {
        match self {
            Table::PortForwards => editor.port_forwards(),
            Table::Environment => editor.environment(),
            Table::HostKeys => editor.host_keys(),
        }
    }
}

/// One listed row in JSON output.
#[derive(Debug, Serialize)]
struct Entry<'a> {
    key: &'a str,
    value: &'a str,
}

/// Print list rows, one per line with the tab widened, or as a JSON array.
fn print_rows(out: &mut dyn Write, rows: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<Entry<'_>> = rows
            .iter()
            .map(|row| {
                let (key, value) = row.split_once('\t').unwrap_or((row.as_str(), ""));
                Entry { key, value }
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for row in rows {
            writeln!(out, "{}", row.replace('\t', "  "))?;
        }
    }
    Ok(())
}

/// An edit applied to an open session.
type Apply = Box<dyn FnOnce(&mut SessionEditor) -> Result<(), EditError>>;

/// Run a parsed command line. Command output goes to `out`, user errors to
/// `err`. Returns the process exit code.
pub fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<i32> {
    let storage = match &cli.sessions_dir {
        Some(dir) => FileSessionStorage::new(dir),
        None => FileSessionStorage::default_location(),
    };
    log::debug!("Using sessions directory {:?}", storage.dir());
    let backends = BackendTable::full();

    let (session, table, apply) = match cli.command {
        Commands::Sessions => {
            let editor = SessionEditor::new(storage, &backends)?;
            let names = editor.session_names();
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
            } else {
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
            return Ok(0);
        }
        Commands::Show { session, panel } => {
            let editor = match SessionEditor::open(storage, &backends, storage_name(&session)) {
                Ok(editor) => editor,
                Err(e) => return report(err, &e),
            };
            return match editor.render(panel.as_deref()) {
                Ok(text) => {
                    write!(out, "{text}")?;
                    Ok(0)
                }
                Err(e) => report(err, &e.into()),
            };
        }
        Commands::Delete { session } => {
            let mut editor = SessionEditor::new(storage, &backends)?;
            return match editor.delete_session(storage_name(&session)) {
                Ok(()) => Ok(0),
                Err(e) => report(err, &e.into()),
            };
        }
        Commands::Forward { action } => match action {
            ForwardAction::List { session } => (session, Table::PortForwards, None),
            ForwardAction::Add {
                session,
                source,
                destination,
                direction,
                family,
            } => {
                let apply: Apply = Box::new(move |e| {
                    e.add_port_forward(direction.into(), family.into(), &source, &destination)
                });
                (session, Table::PortForwards, Some(apply))
            }
            ForwardAction::Remove { session, key } => {
                let apply: Apply = Box::new(move |e| e.remove_port_forward(&key));
                (session, Table::PortForwards, Some(apply))
            }
        },
        Commands::Env { action } => match action {
            EnvAction::List { session } => (session, Table::Environment, None),
            EnvAction::Set { session, var, value } => {
                let apply: Apply = Box::new(move |e| e.set_env(&var, &value));
                (session, Table::Environment, Some(apply))
            }
            EnvAction::Remove { session, var } => {
                let apply: Apply = Box::new(move |e| e.remove_env(&var));
                (session, Table::Environment, Some(apply))
            }
        },
        Commands::Hostkey { action } => match action {
            HostKeyAction::List { session } => (session, Table::HostKeys, None),
            HostKeyAction::Add { session, key } => {
                let apply: Apply = Box::new(move |e| e.add_host_key(&key));
                (session, Table::HostKeys, Some(apply))
            }
            HostKeyAction::Remove { session, key } => {
                let apply: Apply = Box::new(move |e| e.remove_host_key(&key));
                (session, Table::HostKeys, Some(apply))
            }
        },
    };

    let mut editor = match SessionEditor::open(storage, &backends, storage_name(&session)) {
        Ok(editor) => editor,
        Err(e) => return report(err, &e),
    };
    let Some(apply) = apply else {
        print_rows(out, &table.rows(&editor), cli.json)?;
        return Ok(0);
    };
    if let Err(e) = apply(&mut editor) {
        return report(err, &e.into());
    }
    match editor.save_if_modified() {
        Ok(true) => log::info!("Saved session {session:?}"),
        Ok(false) => log::debug!("Session {session:?} unchanged, not saved"),
        Err(e) => return report(err, &e.into()),
    }
    Ok(0)
}

fn report(err: &mut dyn Write, e: &anyhow::Error) -> anyhow::Result<i32> {
    log::warn!("Command failed: {e:#}");
    writeln!(err, "confbox: {e:#}")?;
    Ok(1)
}
