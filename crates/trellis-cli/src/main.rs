//! Trellis CLI - CSV inspection and conversion tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use trellis::prelude::*;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "CSV inspection and conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,

        /// Treat the first row as column names
        #[arg(long)]
        header: bool,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Re-serialize a CSV file, normalizing delimiter and newlines
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the first row as column names (and write it back out)
        #[arg(long)]
        header: bool,

        /// Input field delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Output field delimiter
        #[arg(long, default_value = ",")]
        out_delimiter: char,

        /// Quote character
        #[arg(short, long, default_value = "\"")]
        quote: char,

        /// Output line terminator
        #[arg(short, long, value_enum, default_value = "crlf")]
        newline: Newline,

        /// Fail on malformed input instead of recovering
        #[arg(long)]
        strict: bool,
    },

    /// Print a single column, addressed by index or label
    Column {
        /// Input CSV file
        input: PathBuf,

        /// Column index (0-based) or label
        reference: String,

        /// Treat the first row as column names
        #[arg(long)]
        header: bool,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

/// Output line terminator choice
#[derive(Clone, Copy, ValueEnum)]
enum Newline {
    Lf,
    Crlf,
    Cr,
}

impl From<Newline> for LineTerminator {
    fn from(newline: Newline) -> Self {
        match newline {
            Newline::Lf => LineTerminator::LF,
            Newline::Crlf => LineTerminator::CRLF,
            Newline::Cr => LineTerminator::CR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            input,
            header,
            delimiter,
        } => show_info(&input, header, delimiter),
        Commands::Convert {
            input,
            output,
            header,
            delimiter,
            out_delimiter,
            quote,
            newline,
            strict,
        } => {
            let read_options = CsvReadOptions {
                delimiter,
                quote,
                has_header: header,
                strict,
            };
            let write_options = CsvWriteOptions {
                delimiter: out_delimiter,
                quote,
                write_header: header,
                line_terminator: newline.into(),
            };
            convert(&input, output.as_deref(), &read_options, &write_options)
        }
        Commands::Column {
            input,
            reference,
            header,
            delimiter,
        } => show_column(&input, &reference, header, delimiter),
    }
}

fn load(input: &Path, header: bool, delimiter: char, strict: bool) -> Result<Table> {
    let options = CsvReadOptions {
        delimiter,
        has_header: header,
        strict,
        ..CsvReadOptions::default()
    };

    Table::open_csv(input, &options).with_context(|| format!("Failed to read '{}'", input.display()))
}

fn show_info(input: &Path, header: bool, delimiter: char) -> Result<()> {
    let table = load(input, header, delimiter, false)?;

    println!("File: {}", input.display());
    println!("Rows: {}", table.row_count());
    println!("Columns: {}", table.column_count());
    println!(
        "Stored cells: {} of {}",
        table.stored_cell_count(),
        table.cell_count()
    );

    let names = table.column_names();
    if names.iter().any(|name| !name.is_empty()) {
        println!("Column names:");
        for (index, name) in names.iter().enumerate() {
            println!("  {}\t{}", index, name);
        }
    }

    Ok(())
}

fn convert(
    input: &Path,
    output: Option<&Path>,
    read_options: &CsvReadOptions,
    write_options: &CsvWriteOptions,
) -> Result<()> {
    let table = Table::open_csv(input, read_options)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    if let Some(output_path) = output {
        table
            .save_csv(output_path, write_options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            table.row_count(),
            output_path.display()
        );
    } else {
        let text = CsvWriter::to_string(&table, write_options);
        io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        println!();
    }

    Ok(())
}

fn show_column(input: &Path, reference: &str, header: bool, delimiter: char) -> Result<()> {
    let table = load(input, header, delimiter, false)?;

    // A numeric reference is an index, anything else is a label
    let column: ColumnRef = match reference.parse::<u32>() {
        Ok(index) => ColumnRef::Index(index),
        Err(_) => ColumnRef::Label(reference.to_string()),
    };

    let values = table
        .get_column(column)
        .with_context(|| format!("No column '{}' in '{}'", reference, input.display()))?;

    for value in values {
        println!("{}", value);
    }

    Ok(())
}
