//! Extract command - pull the fields out of a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use tradedoc_core::{Field, FieldRecord, FormatTag};

use super::{load_config, OutputFormat};
use crate::source::TextSource;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (PDF or text)
    #[arg(required = true)]
    input: PathBuf,

    /// Document format: A-F, or a name such as "proforma" or "coa"
    #[arg(short, long)]
    format: FormatTag,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    output_format: Option<OutputFormat>,
}

pub async fn run(
    args: ExtractArgs,
    config_path: Option<&str>,
    tika_url: Option<&str>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!(
        "Processing {} as {}",
        args.input.display(),
        args.format.document_name()
    );

    let source = TextSource::from_config(&config, tika_url)?;
    let text = source.read(&args.input).await?;
    let record = tradedoc_core::extract(&text, args.format);

    let output = format_record(&record, OutputFormat::resolve(args.output_format, &config))?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_record(record: &FieldRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &FieldRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value"])?;
    for (field, value) in record.iter() {
        wtr.write_record([field.as_str(), value.unwrap_or_default()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &FieldRecord) -> String {
    let width = record
        .fields()
        .map(|field| field.as_str().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (field, value) in record.iter() {
        let value = value.map(|v| v.replace('\n', ", ")).unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("{:<width$}  {}\n", label(field), value, width = width + 1));
    }

    output
}

fn label(field: Field) -> String {
    format!("{}:", field.as_str())
}
