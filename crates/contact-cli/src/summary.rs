use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use contact_cli::types::{ConvertResult, EnhancementStatus};

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Records: {}", result.records);
    println!("Profile: {}", result.plan.profile);
    if result.enhancement != EnhancementStatus::NotRequested {
        println!("Enhancement: {}", result.enhancement.as_str());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Source Column")]);
    apply_table_style(&mut table);
    for entry in &result.plan.entries {
        let source = match &entry.source_column {
            Some(column) => Cell::new(column),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(entry.field.header()), source]);
    }
    println!("{table}");

    if !result.plan.passthrough_columns.is_empty() {
        println!(
            "Passthrough columns: {}",
            result.plan.passthrough_columns.join(", ")
        );
    }

    if result.dry_run {
        println!("Dry run: no output written");
    } else {
        for path in &result.outputs {
            println!("Output: {}", path.display());
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}
