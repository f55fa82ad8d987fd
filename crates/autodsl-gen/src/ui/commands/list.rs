use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{orchestrator::Orchestrator, registry::DEFAULT_SUPPORT_PATH},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::descriptor::load_descriptor,
};

pub async fn list_classes(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let descriptor = load_descriptor(input).await?;
  let orchestrator = Orchestrator::new(descriptor, None, None, DEFAULT_SUPPORT_PATH)?;

  let mut summaries = orchestrator.class_summaries();
  summaries.sort_by(|a, b| a.class.cmp(&b.class));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["CLASS", "BUILDER", "ENTRY", "STATUS"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for summary in summaries {
    let status = match &summary.outcome {
      Ok(properties) => Cell::new(format!("{properties} properties")).fg(IntoComfyColor::into(colors.success())),
      Err(error) => Cell::new(error.to_string()).fg(IntoComfyColor::into(colors.accent())),
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(format!("{}::{}", summary.package, summary.class))
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(summary.builder).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(summary.entry)
        .fg(IntoComfyColor::into(colors.info()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(status);
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
