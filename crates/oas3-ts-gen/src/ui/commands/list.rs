use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{naming::operation_base_name, spec::SchemaDocument},
  ui::{Colors, colors::table_color, term_width},
  utils::SpecLoader,
};

/// One row of the operations table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  method: String,
  path: String,
  summary: String,
  type_name: String,
}

/// Operations in document order, with the base name their request types are
/// derived from.
fn collect_operations(document: &SchemaDocument) -> Vec<OperationRow> {
  document
    .operations()
    .map(|(path, method, operation)| OperationRow {
      method: method.to_uppercase(),
      path: path.to_string(),
      summary: operation.summary().unwrap_or_default().to_string(),
      type_name: operation_base_name(method, path),
    })
    .collect()
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let operations = collect_operations(&document);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["METHOD", "PATH", "TYPE NAME", "SUMMARY"] {
    header.add_cell(Cell::new(title).fg(table_color(colors.label())));
  }
  table.set_header(header);

  for operation in operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(operation.method)
        .fg(table_color(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(table_color(colors.primary())));
    row.add_cell(
      Cell::new(operation.type_name)
        .fg(table_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(operation.summary).fg(table_color(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
