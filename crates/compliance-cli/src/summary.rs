use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use compliance_core::ComplianceSteps;
use compliance_model::FieldIdentifierOption;

pub fn steps_table(steps: &ComplianceSteps) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Position"), header_cell("Step")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in steps.iter() {
        table.add_row(vec![Cell::new(index), Cell::new(step.name())]);
    }
    table
}

/// Renders options as a value/label table; placeholder values render as `-`.
pub fn options_table<T>(
    options: &[FieldIdentifierOption<T>],
    render_value: impl Fn(&T) -> Option<String>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Label"),
        header_cell("Disabled"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for option in options {
        let value_cell = match render_value(&option.value) {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        let disabled_cell = if option.is_disabled {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("")
        };
        table.add_row(vec![value_cell, Cell::new(&option.label), disabled_cell]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_core::{get_steps, security_classification_options};

    #[test]
    fn steps_table_lists_every_step() {
        let rendered = steps_table(&get_steps(false)).to_string();
        assert!(rendered.contains("editDatasetLevelCompliancePolicy"));
        assert!(rendered.contains("editPurgePolicy"));
        assert!(rendered.contains("editDatasetClassification"));
    }

    #[test]
    fn options_table_marks_placeholder() {
        let options = security_classification_options();
        let table = options_table(&options, |value| {
            value.map(|classification| classification.as_str().to_string())
        });
        assert_eq!(table.row_count(), options.len());
        let rendered = table.to_string();
        assert!(rendered.contains("Unspecified"));
        assert!(rendered.contains("HIGHLY_CONFIDENTIAL"));
    }
}
