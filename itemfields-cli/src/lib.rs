//! Command line for the custom item field definitions.
//!
//! Every command runs against a JSON preference file, so edits made here are
//! the same ones the settings table would make: `add` and `remove` go
//! through [`SettingsTable`] and are refused when a name is invalid.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use itemfields_model::{codec, FieldDescriptor, FieldList, FieldPosition};
use itemfields_pane::{FieldRegistry, MemoryItemPane, MemoryItemStore, PaneConfig};
use itemfields_prefs::{FilePreferences, PreferenceStore};
use itemfields_settings::{Notice, Notifier, SettingsTable};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "itemfields")]
#[command(about = "Inspect and edit custom item field definitions")]
pub struct Args {
    /// Preference file holding the field list
    #[arg(short, long, default_value = "prefs.json")]
    pub prefs: PathBuf,

    /// Optional TOML file with plugin id and preference prefix
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the stored fields
    List,
    /// Add a field and save
    Add {
        name: String,
        #[arg(long, value_enum, default_value_t = PositionArg::Start)]
        position: PositionArg,
    },
    /// Remove a field by name and save
    Remove { name: String },
    /// Clear every field definition
    Reset,
    /// Decode a preference string
    Decode { pref: String },
    /// Encode `name:position` pairs into a preference string
    Encode {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Register rows for the stored fields and print them
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Start,
    #[value(name = "afterCreators")]
    AfterCreators,
    End,
}

impl From<PositionArg> for FieldPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Start => FieldPosition::Start,
            PositionArg::AfterCreators => FieldPosition::AfterCreators,
            PositionArg::End => FieldPosition::End,
        }
    }
}

/// Prints notices to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, notice: &Notice) {
        eprintln!("{}: {}", notice.title, notice.description);
    }
}

/// Runs one command, writing its output to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = match &args.config {
        Some(path) => PaneConfig::load_from(path),
        None => PaneConfig::default(),
    };
    let key = config.pref_key();
    debug!(key = %key, prefs = ?args.prefs, "Using field preference");

    match &args.command {
        Command::List => {
            let prefs = open_prefs(args)?;
            let stored = prefs.get(&key).unwrap_or_default();
            print_fields(out, &codec::decode(&stored))
        }
        Command::Add { name, position } => {
            let mut table = SettingsTable::new(open_prefs(args)?, key, StderrNotifier);
            table.load();
            let id = table.add_row();
            table.set_name(id, name);
            table.set_position(id, &FieldPosition::from(*position));
            let saved = table.save().context("Field not added")?;
            writeln!(out, "Saved {} field(s)", saved.len())?;
            Ok(())
        }
        Command::Remove { name } => {
            let mut table = SettingsTable::new(open_prefs(args)?, key, StderrNotifier);
            table.load();
            let Some(id) = table.find_by_name(name).map(|row| row.id()) else {
                bail!("No field named {:?}", name);
            };
            table.remove_row(id);
            let saved = table.save().context("Field not removed")?;
            writeln!(out, "Saved {} field(s)", saved.len())?;
            Ok(())
        }
        Command::Reset => {
            let mut table = SettingsTable::new(open_prefs(args)?, key, StderrNotifier);
            table.reset_all()?;
            writeln!(out, "Cleared all fields")?;
            Ok(())
        }
        Command::Decode { pref } => print_fields(out, &codec::decode(pref)),
        Command::Encode { fields } => {
            let fields = fields
                .iter()
                .map(|pair| parse_pair(pair))
                .collect::<Result<FieldList>>()?;
            writeln!(out, "{}", codec::encode(&fields))?;
            Ok(())
        }
        Command::Rows => {
            let mut registry = FieldRegistry::new(
                config,
                open_prefs(args)?,
                Arc::new(MemoryItemStore::new()),
                MemoryItemPane::new(),
            );
            registry.initialize()?;
            for spec in registry.pane().rows() {
                writeln!(out, "{}\t{}\t{}", spec.row_id, spec.label, spec.position)?;
            }
            Ok(())
        }
    }
}

fn open_prefs(args: &Args) -> Result<Arc<dyn PreferenceStore>> {
    let prefs = FilePreferences::open(args.prefs.clone())
        .with_context(|| format!("Failed to open preferences {:?}", args.prefs))?;
    Ok(Arc::new(prefs))
}

/// Splits `name:position`. `:` is forbidden in names, so the first one
/// separates the pair.
fn parse_pair(pair: &str) -> Result<FieldDescriptor> {
    let Some((name, position)) = pair.split_once(':') else {
        bail!("Expected name:position, got {:?}", pair);
    };
    Ok(FieldDescriptor::new(name, FieldPosition::from_wire(position)))
}

fn print_fields(out: &mut impl Write, fields: &[FieldDescriptor]) -> Result<()> {
    for field in fields {
        writeln!(out, "{}\t{}", field.name, field.position)?;
    }
    Ok(())
}
