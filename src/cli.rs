// src/cli.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::{
    catalog::{create_table, Catalog},
    config::{
        consts::LOG_FILE,
        options::{AppOptions, ExportFormat},
    },
    error::{FeatureError, Result},
    features::FeatureContext,
    file, logging,
    progress::Progress,
    table::Table,
};

/// Prints one line per maker to stderr.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, maker_id: u32) {
        self.done += 1;
        eprintln!("Built maker {} ({}/{})", maker_id, self.done, self.total);
    }
}

pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let opts = parse_cli(args)?;

    let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = opts.log_file.clone().unwrap_or_else(|| PathBuf::from(LOG_FILE));
    // Already installed (tests, embedding) is fine.
    let _ = logging::init(log_file, level);

    let input = opts.input.as_deref()
        .ok_or_else(|| FeatureError::Usage(s!("Missing input catalog (see --help)")))?;
    let catalog = Catalog::load(input)?;

    if opts.list_makers {
        for (id, name) in catalog.list_makers() {
            println!("{},{}", id, name);
        }
        return Ok(());
    }

    let mut ctx = FeatureContext::new();
    let mut progress = CliProgress::default();
    let table = create_table(&catalog, &mut ctx, Some(&mut progress))?;

    let path = file::export_table(&opts.export, &table)?;
    println!("Wrote {}", path.display());

    if opts.summary {
        print_summary(&table, &ctx);
    }
    Ok(())
}

fn print_summary(table: &Table, ctx: &FeatureContext) {
    println!("{} devices × {} features", table.n_rows(), table.n_cols());
    if !ctx.parsed_features().is_empty() {
        println!("{} features came from parsers", ctx.parsed_features().len());
    }
    for name in table.column_names() {
        println!("  {:<40} {:>6}/{}", name, table.present_count(name), table.n_rows());
    }
}

pub fn parse_cli<I>(args: I) -> Result<AppOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("Missing output path"))?;
                opts.export.set_path(&v);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --format"))?;
                opts.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| usage(&format!("Unknown format: {}", v)))?;
            }
            "--no-headers" => opts.export.include_headers = false,
            "--na" => opts.export.missing = args.next().ok_or_else(|| usage("Missing value for --na"))?,
            "--list-makers" => opts.list_makers = true,
            "--summary" => opts.summary = true,
            "--log" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --log"))?;
                opts.log_file = Some(PathBuf::from(v));
            }
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(usage(&format!("Unknown arg: {}", other))),
            path => {
                if opts.input.is_some() {
                    return Err(usage(&format!("Unexpected extra input: {}", path)));
                }
                opts.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(opts)
}

fn usage(msg: &str) -> FeatureError {
    FeatureError::Usage(s!(msg))
}
