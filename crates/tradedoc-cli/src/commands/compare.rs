//! Compare command - extract every supplied document and check them against each other.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use clap::Args;
use console::{pad_str, style, Alignment};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use tradedoc_core::{CellStatus, Comparison, ComparisonCell, FieldRecord, FormatTag};

use super::{load_config, OutputFormat};
use crate::source::TextSource;

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Proforma invoice (format D), the reference document
    #[arg(long)]
    proforma: Option<PathBuf>,

    /// Order confirmation (format C)
    #[arg(long)]
    order_confirmation: Option<PathBuf>,

    /// Purchase order (format A)
    #[arg(long)]
    purchase_order: Option<PathBuf>,

    /// Invoice / shipping document packing list (format B)
    #[arg(long)]
    shipping: Option<PathBuf>,

    /// Certificate of analysis (format E)
    #[arg(long)]
    coa: Option<PathBuf>,

    /// Packing list (format F)
    #[arg(long)]
    packing_list: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    output_format: Option<OutputFormat>,
}

impl CompareArgs {
    /// Supplied documents in table column order.
    fn documents(&self) -> Vec<(FormatTag, PathBuf)> {
        FormatTag::COMPARISON_ORDER
            .into_iter()
            .filter_map(|format| {
                let path = match format {
                    FormatTag::ProformaInvoice => &self.proforma,
                    FormatTag::OrderConfirmation => &self.order_confirmation,
                    FormatTag::PurchaseOrder => &self.purchase_order,
                    FormatTag::PackingListShipping => &self.shipping,
                    FormatTag::CertificateOfAnalysis => &self.coa,
                    FormatTag::PackingListAlt => &self.packing_list,
                };
                path.clone().map(|path| (format, path))
            })
            .collect()
    }
}

/// Serialized comparison with run metadata.
#[derive(Serialize)]
struct ComparisonReport<'a> {
    generated_at: DateTime<Utc>,
    matches: usize,
    mismatches: usize,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

pub async fn run(
    args: CompareArgs,
    config_path: Option<&str>,
    tika_url: Option<&str>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let documents = args.documents();
    if documents.is_empty() {
        anyhow::bail!(
            "No documents supplied. Pass at least one of --proforma, --order-confirmation, \
             --purchase-order, --shipping, --coa or --packing-list."
        );
    }

    for (_, path) in &documents {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
    }

    let source = TextSource::from_config(&config, tika_url)?;

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("=>-"),
    );

    // Documents are processed one after another
    let mut records: BTreeMap<FormatTag, FieldRecord> = BTreeMap::new();
    for (format, path) in &documents {
        pb.set_message(format.document_name());
        info!("Processing {} ({})", path.display(), format.document_name());

        let text = source.read(path).await?;
        records.insert(*format, tradedoc_core::extract(&text, *format));

        pb.inc(1);
    }
    pb.finish_and_clear();

    let comparison = tradedoc_core::compare(&records);
    let output = format_comparison(
        &comparison,
        OutputFormat::resolve(args.output_format, &config),
        Utc::now(),
    )?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Comparison written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Compared {} documents in {:?}", documents.len(), start.elapsed());

    Ok(())
}

pub fn format_comparison(
    comparison: &Comparison,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = ComparisonReport {
                generated_at,
                matches: comparison.matches(),
                mismatches: comparison.mismatches(),
                comparison,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => format_csv(comparison),
        OutputFormat::Text => Ok(format_text(comparison, generated_at)),
    }
}

fn status_name(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Reference => "reference",
        CellStatus::Match => "match",
        CellStatus::Mismatch => "mismatch",
        CellStatus::Unchecked => "unchecked",
        CellStatus::Missing => "missing",
    }
}

fn format_csv(comparison: &Comparison) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["category".to_string(), "field".to_string()];
    for format in &comparison.documents {
        header.push(format.document_name().to_string());
        header.push(format!("{} status", format.document_name()));
    }
    wtr.write_record(&header)?;

    for section in &comparison.sections {
        for row in &section.rows {
            let mut record = vec![
                section.category.title().to_string(),
                row.field.as_str().to_string(),
            ];
            for cell in &row.cells {
                record.push(cell.value.clone().unwrap_or_default());
                record.push(status_name(cell.status).to_string());
            }
            wtr.write_record(&record)?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn cell_text(cell: &ComparisonCell) -> String {
    match &cell.value {
        Some(value) => format!("{} {}", cell.status.symbol(), value.replace('\n', ", ")),
        None => cell.status.symbol().to_string(),
    }
}

fn styled(cell: &ComparisonCell, padded: &str) -> String {
    match cell.status {
        CellStatus::Reference => style(padded).cyan().to_string(),
        CellStatus::Match => style(padded).green().to_string(),
        CellStatus::Mismatch => style(padded).red().bold().to_string(),
        CellStatus::Unchecked => style(padded).yellow().to_string(),
        CellStatus::Missing => style(padded).dim().to_string(),
    }
}

fn format_text(comparison: &Comparison, generated_at: DateTime<Utc>) -> String {
    let field_width = comparison
        .rows()
        .map(|row| row.field.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Data Field".len());

    // One width per document column, wide enough for the header and every cell
    let column_widths: Vec<usize> = comparison
        .documents
        .iter()
        .enumerate()
        .map(|(i, format)| {
            comparison
                .rows()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| console::measure_text_width(&cell_text(cell)))
                .max()
                .unwrap_or(0)
                .max(format.document_name().len())
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n\n",
        style("Document comparison").bold(),
        style(generated_at.format("%Y-%m-%d %H:%M:%S UTC")).dim()
    ));

    let mut header = pad_str("Data Field", field_width, Alignment::Left, None).into_owned();
    for (format, width) in comparison.documents.iter().zip(&column_widths) {
        header.push_str("  ");
        header.push_str(&pad_str(format.document_name(), *width, Alignment::Left, None));
    }
    output.push_str(&format!("{}\n", style(header.trim_end()).bold()));

    for section in &comparison.sections {
        output.push_str(&format!("\n{}\n", style(section.category.title()).underlined()));

        for row in &section.rows {
            let mut line =
                pad_str(row.field.as_str(), field_width, Alignment::Left, None).into_owned();
            for (cell, width) in row.cells.iter().zip(&column_widths) {
                let text = cell_text(cell);
                line.push_str("  ");
                line.push_str(&styled(cell, &pad_str(&text, *width, Alignment::Left, None)));
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "{} {} matching, {} {} mismatched",
        style("✓").green(),
        comparison.matches(),
        style("✗").red(),
        comparison.mismatches()
    ));

    output
}
