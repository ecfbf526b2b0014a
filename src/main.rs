/* src/main.rs */

//! confmgr CLI
//!
//! Entry point for the `confmgr` command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use confmgr::loader::{AnyFormat, DynLoader, FileSource, Format, LoadResult};
use confmgr::scan::{ConfigDir, ScanMode};
use confmgr::{SkipSpec, partition_duplicates};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "confmgr")]
#[command(about = "Inspect saved constructor configurations and find duplicates", version)]
struct Cli {
	/// Increase log verbosity (-v, -vv)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the configuration stored in each file
	Show {
		/// Configuration files (json, toml, yaml)
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},

	/// Group the configurations of a directory that describe the same object
	Duplicates {
		/// Directory to scan
		dir: PathBuf,

		/// Regular expression the path relative to DIR must match
		#[arg(long, short = 'p')]
		pattern: Option<String>,

		/// Values to ignore per argument, as JSON: '{"seed": null, "y": [2, 3]}'
		#[arg(long, short = 's', env = "CONFMGR_SKIP", value_parser = parse_skip)]
		skip: Option<SkipSpec>,

		/// Also print configurations without duplicates
		#[arg(long)]
		all: bool,

		/// Do not descend into subdirectories
		#[arg(long)]
		no_recursive: bool,
	},
}

fn parse_skip(s: &str) -> Result<SkipSpec, String> {
	s.parse()
		.map_err(|e: serde_json::Error| format!("invalid skip specification: {}", e))
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let outcome = match cli.command {
		Commands::Show { files } => run_show(&files).await,
		Commands::Duplicates {
			dir,
			pattern,
			skip,
			all,
			no_recursive,
		} => run_duplicates(&dir, pattern, skip.unwrap_or_default(), all, no_recursive).await,
	};

	if let Err(e) = outcome {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	let _ = env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.try_init();
}

async fn run_show(files: &[PathBuf]) -> Result<()> {
	let mut failures = 0usize;

	for file in files {
		match load_one(file).await {
			Ok(entry) => {
				println!("{}:", file.display());
				println!("{}", entry);
				println!();
			}
			Err(e) => {
				eprintln!("{}: {:#}", file.display(), e);
				failures += 1;
			}
		}
	}

	if failures > 0 {
		bail!("{} of {} files could not be loaded", failures, files.len());
	}
	Ok(())
}

async fn load_one(file: &Path) -> Result<confmgr::ConfigEntry> {
	let root = match file.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let name = file
		.file_name()
		.and_then(|n| n.to_str())
		.with_context(|| format!("invalid file name: {}", file.display()))?;

	let ext = file.extension().and_then(|e| e.to_str()).unwrap_or_default();
	if AnyFormat::from_extension(ext).is_none() {
		bail!(
			"unsupported file extension '{}' (expected one of: {})",
			ext,
			supported_extensions().join(", ")
		);
	}

	let loader = DynLoader::builder()
		.source(FileSource::new(root))
		.all_formats()
		.build()
		.map_err(anyhow::Error::msg)?;

	match loader.load_file(name).await {
		LoadResult::Ok { value, .. } => Ok(value),
		LoadResult::NotFound => bail!("file not found"),
		LoadResult::Invalid(e) => Err(e.into()),
	}
}

fn supported_extensions() -> Vec<&'static str> {
	AnyFormat::enabled()
		.iter()
		.flat_map(|format| format.extensions().iter().copied())
		.collect()
}

async fn run_duplicates(
	dir: &Path,
	pattern: Option<String>,
	skip: SkipSpec,
	all: bool,
	no_recursive: bool,
) -> Result<()> {
	let meta = tokio::fs::metadata(dir)
		.await
		.with_context(|| format!("cannot read directory {}", dir.display()))?;
	if !meta.is_dir() {
		bail!("{} is not a directory", dir.display());
	}

	let loader = DynLoader::builder()
		.source(FileSource::new(dir))
		.all_formats()
		.build()
		.map_err(anyhow::Error::msg)?;

	let mut builder = ConfigDir::builder().loader(loader).path(dir);
	if let Some(pattern) = pattern {
		builder = builder.pattern(pattern);
	}
	if no_recursive {
		builder = builder.scan_mode(ScanMode::Flat);
	}
	let config_dir = builder.build()?;

	let scan = config_dir
		.load()
		.await
		.with_context(|| format!("failed to scan {}", dir.display()))?;

	for (key, error) in &scan.failed {
		eprintln!("{}: {}", key, error);
	}

	let groups = partition_duplicates(&scan.loaded, &skip);
	let mut printed = 0usize;

	for group in groups.iter().filter(|g| all || g.is_duplicate()) {
		let files: Vec<&str> = group.ids.iter().map(|id| id.as_str()).collect();
		println!(
			"{} files share this configuration: [{}]",
			group.len(),
			files.join(", ")
		);
		println!("{}", group.config);
		println!();
		printed += 1;
	}

	if printed == 0 {
		println!("No duplicated configurations among {} files", scan.loaded.len());
	}
	Ok(())
}
