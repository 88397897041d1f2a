use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use contact_enhance::EnhanceConfig;
use contact_map::{ContactField, MappingProfile, PassthroughMode, RowMapper};
use contact_output::OUTPUT_FILE_NAME;

use contact_cli::pipeline::{ExportFormat, enhance, export, ingest, map_records};
use contact_cli::types::{ConvertResult, EnhancementStatus};

use crate::cli::{ConvertArgs, OutputFormatArg, ProfileArg};
use crate::summary::apply_table_style;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Header keywords"]);
    apply_table_style(&mut table);
    for field in ContactField::ALL {
        table.add_row(vec![field.header().to_string(), field.keywords().join(", ")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let input = &args.input;
    let convert_span = info_span!("convert", input = %input.display());
    let _convert_guard = convert_span.enter();

    // =========================================================================
    // Stage 0: Build the mapping profile from CLI flags
    // =========================================================================
    let mut profile = build_profile(args.profile);
    if args.skip_empty_extras {
        profile = profile.with_passthrough(PassthroughMode::SkipEmpty);
    } else if args.keep_empty_extras {
        profile = profile.with_passthrough(PassthroughMode::Permissive);
    }
    let mapper = RowMapper::new(profile);

    let csv_path = args.output.clone().unwrap_or_else(|| {
        input
            .parent()
            .map(|dir| dir.join(OUTPUT_FILE_NAME))
            .unwrap_or_else(|| OUTPUT_FILE_NAME.into())
    });

    // =========================================================================
    // Stage 1: Ingest - Read and buffer the spreadsheet
    // =========================================================================
    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let table = ingest_span
        .in_scope(|| ingest(input))
        .with_context(|| format!("read spreadsheet: {}", input.display()))?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Map - One contact record per row
    // =========================================================================
    let map_span = info_span!("map", profile = mapper.profile().name);
    let map_start = Instant::now();
    let (plan, records) = map_span.in_scope(|| map_records(&mapper, &table));
    info!(
        records = records.len(),
        passthrough_columns = plan.passthrough_columns.len(),
        duration_ms = map_start.elapsed().as_millis(),
        "mapping complete"
    );

    // =========================================================================
    // Stage 3: Enhance (optional) - Best-effort cleanup
    // =========================================================================
    let (records, enhancement) = if args.enhance {
        let enhance_span = info_span!("enhance");
        let enhance_start = Instant::now();
        let (records, status) =
            enhance_span.in_scope(|| enhance(&EnhanceConfig::from_env(), &records));
        info!(
            status = status.as_str(),
            duration_ms = enhance_start.elapsed().as_millis(),
            "enhancement complete"
        );
        (records, status)
    } else {
        (records, EnhancementStatus::NotRequested)
    };

    // =========================================================================
    // Stage 4: Export - Write the formatted output
    // =========================================================================
    let outputs = if args.dry_run {
        info!("dry run, skipping export");
        Vec::new()
    } else {
        let export_span = info_span!("export", path = %csv_path.display());
        export_span.in_scope(|| export(&records, &csv_path, &export_formats(args.format)))?
    };

    Ok(ConvertResult {
        input: input.clone(),
        records: records.len(),
        plan,
        enhancement,
        outputs,
        dry_run: args.dry_run,
    })
}

fn build_profile(arg: ProfileArg) -> MappingProfile {
    match arg {
        ProfileArg::Standard => MappingProfile::standard(),
        ProfileArg::Registration => MappingProfile::registration(),
        ProfileArg::Positional => MappingProfile::positional(),
    }
}

fn export_formats(arg: OutputFormatArg) -> Vec<ExportFormat> {
    match arg {
        OutputFormatArg::Csv => vec![ExportFormat::Csv],
        OutputFormatArg::Xlsx => vec![ExportFormat::Xlsx],
        OutputFormatArg::Both => vec![ExportFormat::Csv, ExportFormat::Xlsx],
    }
}
