//! Command-line interface of the `instgen` binary.
//!
//! ```text
//! instgen generate --config-file spaces.txt --max-der-order 2 --out-file grid.inst
//! instgen describe --config-file spaces.txt --max-der-order 2
//! ```
//!
//! Errors are reported with the failing path attached; nothing is
//! written to `--out-file` unless every table builds.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use instgen_emit::{Family, InstantiationWriter};
use instgen_table::{GeneratorConfig, InstantiationInfo};

/// Top-level arguments of the `instgen` binary.
#[derive(Parser, Debug)]
#[command(name = "instgen", version, about = "Explicit instantiation table generator")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Run the selected subcommand.
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Generate(command) => command.run().map(|_| ()),
            Command::Describe(command) => command.run(),
        }
    }
}

/// `instgen` subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write explicit instantiations for the configured spaces.
    Generate(GenerateCommand),

    /// Print the space closure and the size of every derived table.
    Describe(DescribeCommand),
}

/// Seed table and derivative order shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Seed file listing the physical spaces to support.
    #[arg(long)]
    pub config_file: PathBuf,

    /// Highest derivative order to instantiate.
    #[arg(long, allow_negative_numbers = true)]
    pub max_der_order: i64,
}

impl TableArgs {
    /// The generator configuration these arguments describe.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(&self.config_file, self.max_der_order)
    }

    /// Read the seed file and build every table.
    pub fn build(&self) -> anyhow::Result<InstantiationInfo> {
        InstantiationInfo::from_config(&self.config()).with_context(|| {
            format!(
                "failed to build instantiation tables from {}",
                self.config_file.display()
            )
        })
    }
}

/// Arguments of `instgen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Seed table and derivative order.
    #[command(flatten)]
    pub table: TableArgs,

    /// File to write the instantiations to.
    #[arg(long)]
    pub out_file: PathBuf,

    /// Families to write; all of them when omitted.
    #[arg(long = "family")]
    pub families: Vec<Family>,

    /// Generator name recorded in the file header.
    #[arg(long, default_value = "instgen")]
    pub generator: String,
}

impl GenerateCommand {
    /// Build the tables and write the output file. Returns the number of
    /// declarations written.
    pub fn run(&self) -> anyhow::Result<u64> {
        let info = self.table.build()?;
        let families = if self.families.is_empty() {
            Family::ALL.to_vec()
        } else {
            self.families.clone()
        };

        let file = File::create(&self.out_file)
            .with_context(|| format!("failed to create {}", self.out_file.display()))?;
        let mut writer = InstantiationWriter::new(BufWriter::new(file), &self.generator)?;
        let written = writer.write_families(&info, &families)?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", self.out_file.display()))?;

        tracing::info!(
            path = %self.out_file.display(),
            declarations = written,
            "wrote instantiations"
        );
        Ok(written)
    }
}

/// Arguments of `instgen describe`.
#[derive(Args, Debug, Clone)]
pub struct DescribeCommand {
    /// Seed table and derivative order.
    #[command(flatten)]
    pub table: TableArgs,
}

impl DescribeCommand {
    /// Build the tables and print the report to stdout.
    pub fn run(&self) -> anyhow::Result<()> {
        let info = self.table.build()?;
        let stdout = io::stdout();
        describe(&info, &mut stdout.lock())?;
        Ok(())
    }
}

/// Write the `dim codim range rank space_dim` rows of the closure, then
/// the derivative order and the size of every derived table.
pub fn describe<W: Write>(info: &InstantiationInfo, out: &mut W) -> io::Result<()> {
    writeln!(out, "dim codim range rank space_dim")?;
    for sp in info.all() {
        writeln!(
            out,
            "{} {} {} {} {}",
            sp.dim(),
            sp.codim(),
            sp.range(),
            sp.rank(),
            sp.space_dim()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "max_der_order: {}", info.max_der_order().max())?;

    let containers = info.containers();
    let families = info.families();
    let sizes = [
        ("user", info.user().len()),
        ("face", info.face().len()),
        ("all", info.all().len()),
        ("extended", info.extended().len()),
        ("domain_dims", info.domain_dims().len()),
        ("mapping_dims", info.mapping_dims().len()),
        ("function_dims", info.function_dims().len()),
        ("derivatives", info.derivatives().len()),
        ("values", info.values().len()),
        ("dynamic_multi_arrays", containers.dynamic_multi_arrays().len()),
        ("cartesian_product_arrays", containers.cartesian_product_arrays().len()),
        ("value_vectors", containers.value_vectors().len()),
        ("value_tables", containers.value_tables().len()),
        ("ref_spaces", families.ref_spaces().len()),
        ("push_forwards", families.push_forwards().len()),
        ("physical_spaces", families.physical_spaces().len()),
    ];
    for (table, len) in sizes {
        writeln!(out, "{table}: {len}")?;
    }
    Ok(())
}
