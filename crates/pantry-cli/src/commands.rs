use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use pantry_core::ImportPipeline;
use pantry_export::{generate_template, write_rejects, write_template, BatchReport};
use pantry_model::{HeaderMode, ImportOptions};
use pantry_schema::{ALL_FIELDS, FieldKind, ImportSchema, SchemaOverlay};

use crate::cli::{ParseArgs, TemplateArgs};
use crate::summary::{apply_table_style, file_label};
use crate::types::{FileSummary, ParseRunResult};

pub fn run_parse(args: &ParseArgs) -> Result<ParseRunResult> {
    let schema = load_schema(args.schema_overlay.as_deref())?;
    let options = ImportOptions::default()
        .with_header_mode(if args.header_row_zero {
            HeaderMode::FirstRow
        } else {
            HeaderMode::Heuristic
        })
        .with_strict_enums(args.strict_enums);
    let pipeline = ImportPipeline::new(schema, options);

    if let Some(dir) = &args.report_json {
        fs::create_dir_all(dir)
            .with_context(|| format!("create report directory {}", dir.display()))?;
    }
    if let Some(dir) = &args.rejects {
        fs::create_dir_all(dir)
            .with_context(|| format!("create rejects directory {}", dir.display()))?;
    }

    let progress = (args.files.len() > 1).then(|| {
        let bar = ProgressBar::new(args.files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:32.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    });

    let start = Instant::now();
    let mut files = Vec::new();
    let mut errors = Vec::new();
    for path in &args.files {
        if let Some(bar) = &progress {
            bar.set_message(file_label(path));
        }
        let span = info_span!("import", source = %path.display());
        match span.in_scope(|| parse_one(&pipeline, path, args)) {
            Ok(summary) => files.push(summary),
            Err(error) => errors.push(format!("{}: {error:#}", path.display())),
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }
    info!(
        file_count = args.files.len(),
        duration_ms = start.elapsed().as_millis(),
        "parse run complete"
    );

    let has_errors = !errors.is_empty() || files.iter().any(|file| file.batch.has_invalid_rows());
    Ok(ParseRunResult {
        files,
        errors,
        has_errors,
    })
}

fn load_schema(overlay: Option<&Path>) -> Result<ImportSchema> {
    match overlay {
        Some(path) => {
            let overlay = SchemaOverlay::from_path(path)
                .with_context(|| format!("load schema overlay {}", path.display()))?;
            Ok(ImportSchema::with_overlay(&overlay)?)
        }
        None => Ok(ImportSchema::standard()),
    }
}

fn parse_one(pipeline: &ImportPipeline, path: &Path, args: &ParseArgs) -> Result<FileSummary> {
    let batch = pipeline.parse_file(path)?;
    let report_path = match &args.report_json {
        Some(dir) => {
            let target = dir.join(output_name(path, "report.json"));
            BatchReport::from_batch(&batch, Some(path)).write(&target)?;
            Some(target)
        }
        None => None,
    };
    let rejects_path = match &args.rejects {
        Some(dir) if batch.has_invalid_rows() => {
            let target = dir.join(output_name(path, "rejects.csv"));
            write_rejects(&target, &batch)?;
            Some(target)
        }
        _ => None,
    };
    Ok(FileSummary {
        source: path.to_path_buf(),
        batch,
        report_path,
        rejects_path,
    })
}

fn output_name(source: &Path, suffix: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("import");
    format!("{stem}.{suffix}")
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let schema = ImportSchema::standard();
    match &args.output {
        Some(path) => {
            write_template(path, &schema.aliases)?;
            println!("Template written to {}", path.display());
        }
        None => print!("{}", generate_template(&schema.aliases)?),
    }
    Ok(())
}

pub fn run_fields() {
    let schema = ImportSchema::standard();
    let mut table = Table::new();
    table.set_header(vec!["Field", "Kind", "Required", "Accepted headers"]);
    apply_table_style(&mut table);
    for field in ALL_FIELDS {
        table.add_row(vec![
            field.as_str().to_string(),
            kind_label(field.kind()).to_string(),
            if field.is_required() { "yes" } else { "" }.to_string(),
            schema.aliases.aliases_for(field).join(", "),
        ]);
    }
    println!("{table}");
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Enum => "enum",
        FieldKind::Boolean => "boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse_args(files: Vec<PathBuf>) -> ParseArgs {
        ParseArgs {
            files,
            header_row_zero: false,
            strict_enums: false,
            schema_overlay: None,
            report_json: None,
            rejects: None,
        }
    }

    #[test]
    fn parse_writes_reports_and_rejects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("spring_list.csv");
        fs::write(
            &source,
            "Organizations,CITY,SEGMENT (DropDown)\nHarbor Bistro,Portland,Fine Dining\n,Salem,\n",
        )
        .expect("write source");
        let out = dir.path().join("out");
        let mut args = parse_args(vec![source.clone()]);
        args.report_json = Some(out.clone());
        args.rejects = Some(out.clone());

        let result = run_parse(&args).expect("run");
        assert!(result.errors.is_empty());
        assert!(result.has_errors);
        let file = &result.files[0];
        assert_eq!(file.batch.row_count(), 2);
        assert_eq!(file.batch.valid_count(), 1);
        assert_eq!(file.batch.invalid_count(), 1);

        let report = file.report_path.as_ref().expect("report path");
        assert_eq!(report, &out.join("spring_list.report.json"));
        let report_text = fs::read_to_string(report).expect("read report");
        assert!(report_text.contains("\"Harbor Bistro\""));

        let rejects = file.rejects_path.as_ref().expect("rejects path");
        let rejects_text = fs::read_to_string(rejects).expect("read rejects");
        assert!(rejects_text.contains("Organization name is required"));
    }

    #[test]
    fn clean_file_skips_the_reject_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("clean.csv");
        fs::write(&source, "Organizations,CITY\nHarbor Bistro,Portland\n").expect("write source");
        let out = dir.path().join("out");
        let mut args = parse_args(vec![source]);
        args.rejects = Some(out);

        let result = run_parse(&args).expect("run");
        assert!(!result.has_errors);
        let file = &result.files[0];
        assert!(file.rejects_path.is_none());
        assert!(file.report_path.is_none());
    }

    #[test]
    fn missing_file_is_collected_not_fatal() {
        let args = parse_args(vec![PathBuf::from("/nonexistent/imports.csv")]);
        let result = run_parse(&args).expect("run");
        assert!(result.files.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("imports.csv"));
        assert!(result.has_errors);
    }

    #[test]
    fn template_written_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("template.csv");
        run_template(&TemplateArgs {
            output: Some(target.clone()),
        })
        .expect("template");
        let text = fs::read_to_string(&target).expect("read template");
        assert!(text.starts_with("Organizations,"));
    }

    #[test]
    fn output_name_uses_the_source_stem() {
        assert_eq!(
            output_name(Path::new("/a/b/west region.csv"), "report.json"),
            "west region.report.json"
        );
    }
}
