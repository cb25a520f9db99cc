//! ais-feeder: Command-line front end for AIS NMEA logs.
//!
//! Supports:
//! - Decoding `!AIVDM`/`!AIVDO` logs into text or JSON lines
//! - Summarising a log as a per-vessel table
//! - Writing the current settings to a config file

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use log::{debug, info};

use ais_core::config::{self, OutputFormat};
use ais_core::{AisMessage, FragmentReassembler, MessageFilter};

mod nmea;

#[derive(Parser)]
#[command(name = "ais-feeder", version, about = "AIS NMEA log decoder")]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode AIS sentences and print one message per line
    Decode {
        /// NMEA log file, or `-` for stdin
        file: PathBuf,

        /// Print JSON objects instead of text
        #[arg(long)]
        json: bool,

        /// Only deliver these message types (e.g. `1,5,18`)
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<u8>>,

        /// Skip messages with rule violations
        #[arg(long)]
        drop_invalid: bool,

        /// List rule violations under each message
        #[arg(long)]
        show_violations: bool,
    },

    /// Print a per-vessel summary table
    Summary {
        /// NMEA log file, or `-` for stdin
        file: PathBuf,
    },

    /// Write the current settings to ~/.ais-decode/config.yaml
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Resolved decode options: config file values overridden by flags.
struct DecodeOptions {
    format: OutputFormat,
    types: Vec<u8>,
    drop_invalid: bool,
    show_violations: bool,
}

/// Per-run counters printed to stderr at the end.
#[derive(Default)]
struct RunStats {
    lines: u64,
    sentences: u64,
    decoded: u64,
    dropped_invalid: u64,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = config::load_config();

    match cli.command {
        Commands::Decode {
            file,
            json,
            types,
            drop_invalid,
            show_violations,
        } => {
            let options = DecodeOptions {
                format: if json {
                    OutputFormat::Json
                } else {
                    config.output.format
                },
                types: types.unwrap_or(config.decoder.types),
                drop_invalid: drop_invalid || config.decoder.drop_invalid,
                show_violations: show_violations || config.output.show_violations,
            };
            cmd_decode(&file, &options);
        }
        Commands::Summary { file } => cmd_summary(&file),
        Commands::InitConfig { force } => cmd_init_config(&config, force),
    }
}

fn cmd_init_config(config: &config::Config, force: bool) {
    match config::save_config(config, force) {
        Ok(path) => eprintln!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn open_input(file: &Path) -> Box<dyn BufRead> {
    if file == Path::new("-") {
        return Box::new(BufReader::new(io::stdin()));
    }
    match File::open(file) {
        Ok(f) => Box::new(BufReader::new(f)),
        Err(e) => {
            eprintln!("Error opening {}: {e}", file.display());
            std::process::exit(1);
        }
    }
}

/// Run every line of `file` through the reassembler, calling `on_message`
/// for each delivered message.
fn feed(
    file: &Path,
    reassembler: &mut FragmentReassembler,
    mut on_message: impl FnMut(AisMessage),
) -> RunStats {
    let mut stats = RunStats::default();

    for line in open_input(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading {}: {e}", file.display());
                break;
            }
        };
        stats.lines += 1;

        let Some(sentence) = nmea::parse_line(&line) else {
            continue;
        };
        stats.sentences += 1;

        if let Some(msg) = reassembler.push(sentence.carrier) {
            stats.decoded += 1;
            on_message(msg);
        }
    }

    stats
}

fn print_stats(stats: &RunStats, reassembler: &FragmentReassembler) {
    info!(
        "{} lines, {} sentences, {} groups, {} rejected, {} discarded",
        stats.lines,
        stats.sentences,
        reassembler.groups_completed,
        reassembler.groups_rejected,
        reassembler.groups_discarded
    );
    eprintln!(
        "{} sentences, {} messages decoded, {} dropped as invalid",
        stats.sentences, stats.decoded, stats.dropped_invalid
    );
}

fn cmd_decode(file: &Path, options: &DecodeOptions) {
    let mut reassembler = FragmentReassembler::new(MessageFilter::from_types(&options.types));
    let mut dropped_invalid = 0u64;

    let mut stats = feed(file, &mut reassembler, |msg| {
        if options.drop_invalid && !msg.is_valid() {
            debug!("dropping invalid message from {}", msg.mmsi());
            dropped_invalid += 1;
            return;
        }

        match options.format {
            OutputFormat::Json => match serde_json::to_string(&msg) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error serializing message: {e}"),
            },
            OutputFormat::Text => println!("{}", format_message(&msg)),
        }

        if options.show_violations {
            for v in msg.violations() {
                println!("  ! {v}");
            }
        }
    });

    stats.dropped_invalid = dropped_invalid;
    print_stats(&stats, &reassembler);
}

/// One-line text rendering of a message.
fn format_message(msg: &AisMessage) -> String {
    let mut line = format!(
        "{:>9} type {:>2} {}",
        msg.mmsi(),
        msg.message_type(),
        msg.kind()
    );
    if let Some(name) = msg.name() {
        line.push_str(&format!(" \"{name}\""));
    }
    if let Some((lat, lon)) = msg.position() {
        line.push_str(&format!(" {lat:.5},{lon:.5}"));
    }
    match msg {
        AisMessage::ScheduledPosition(m)
        | AisMessage::AssignedPosition(m)
        | AisMessage::InterrogatedPosition(m) => {
            line.push_str(&format!(" [{}]", m.navigational_status));
            if let Some(sog) = m.speed_over_ground {
                line.push_str(&format!(" {sog:.1}kn"));
            }
        }
        AisMessage::StaticVoyage(m) => {
            let destination = m.destination.trim_end();
            if !destination.is_empty() {
                line.push_str(&format!(" -> {destination}"));
            }
            line.push_str(&format!(" ({})", m.ship_type));
        }
        _ => {}
    }
    if !msg.is_valid() {
        line.push_str(&format!(" ({} violation(s))", msg.violations().len()));
    }
    line
}

/// Accumulated vessel state for the summary table.
#[derive(Default)]
struct VesselState {
    name: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    last_type: u8,
    messages: u32,
}

impl VesselState {
    fn update(&mut self, msg: &AisMessage) {
        self.messages += 1;
        self.last_type = msg.message_type();
        if let Some(name) = msg.name() {
            self.name = Some(name.to_string());
        }
        if let Some((lat, lon)) = msg.position() {
            self.lat = Some(lat);
            self.lon = Some(lon);
        }
    }
}

fn cmd_summary(file: &Path) {
    let mut reassembler = FragmentReassembler::new(MessageFilter::All);
    let mut vessels: HashMap<u32, VesselState> = HashMap::new();

    let stats = feed(file, &mut reassembler, |msg| {
        vessels.entry(msg.mmsi()).or_default().update(&msg);
    });

    println!();
    println!(
        "Sentences: {} parsed, {} messages decoded, {} stations",
        stats.sentences,
        stats.decoded,
        vessels.len()
    );
    println!();

    if vessels.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["MMSI", "Name", "Lat", "Lon", "Last type", "Msgs"]);

    let mut sorted: Vec<_> = vessels.iter().collect();
    sorted.sort_by_key(|(_, v)| std::cmp::Reverse(v.messages));

    for (mmsi, v) in sorted {
        table.add_row(vec![
            Cell::new(mmsi),
            Cell::new(v.name.as_deref().unwrap_or("-")),
            Cell::new(v.lat.map(|l| format!("{l:.4}")).unwrap_or("-".into())),
            Cell::new(v.lon.map(|l| format!("{l:.4}")).unwrap_or("-".into())),
            Cell::new(v.last_type),
            Cell::new(v.messages),
        ]);
    }

    println!("{table}");
}
