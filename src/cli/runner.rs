//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::Result;
use crate::filter::{extract_field, scalar_to_string, Criteria, Criterion};
use crate::loader::{load_records, load_view, ViewDefinition};
use crate::view::{ListView, Page};
use crate::views;
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its rendered output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Page {
                view,
                data,
                search,
                filters,
                page,
                page_size,
            } => self.page(view, data, search.as_deref(), filters, *page, *page_size),
            Commands::Validate { view } => self.validate(view),
            Commands::Views => self.list_views(),
        }
    }

    /// Filter, paginate and render one page
    fn page(
        &self,
        view: &Path,
        data: &Path,
        search: Option<&str>,
        filters: &[String],
        page: i64,
        page_size: Option<usize>,
    ) -> Result<String> {
        let mut definition = load_view(view)?;
        if let Some(page_size) = page_size {
            definition = definition.with_page_size(page_size);
        }

        let criteria = filters
            .iter()
            .map(|expr| Criterion::parse(expr))
            .collect::<Result<Criteria>>()?;

        let records = load_records(data)?;
        let mut list = ListView::with_records(definition, records)?;
        if let Some(search) = search {
            list.set_search(search);
        }
        list.set_criteria(criteria);
        list.go_to(page);

        let shown = list.summary().page;
        if i64::try_from(shown).map_or(true, |shown| shown != page) {
            warn!(
                requested = page,
                shown,
                page_count = list.summary().page_count,
                "requested page out of range"
            );
        }
        debug!(
            view = list.name(),
            total = list.len(),
            matched = list.filtered_len(),
            "rendering page"
        );

        let page = list.page();
        match self.cli.format {
            OutputFormat::Table => Ok(render_table(&page, &list.definition().search_fields)),
            _ => self.render(&serde_json::to_value(&page)?),
        }
    }

    /// Validate a view definition
    fn validate(&self, view: &Path) -> Result<String> {
        let definition = load_view(view)?;

        let msg = json!({
            "valid": true,
            "view": summarize_view(&definition),
        });
        match self.cli.format {
            OutputFormat::Table => Ok(format!(
                "View '{}' is valid ({} per page, {} default filters)",
                definition.name,
                definition.page_size,
                definition.filters.len()
            )),
            _ => self.render(&msg),
        }
    }

    /// List built-in views
    fn list_views(&self) -> Result<String> {
        let views = views::list_builtin()
            .into_iter()
            .map(|name| load_view(name))
            .collect::<Result<Vec<ViewDefinition>>>()?;

        match self.cli.format {
            OutputFormat::Table => {
                let mut out = String::new();
                for def in &views {
                    let _ = writeln!(
                        out,
                        "{:<14} {:<14} {:>3}  {}",
                        def.name,
                        def.display_title(),
                        def.page_size,
                        def.search_fields.join(", ")
                    );
                }
                Ok(out.trim_end().to_string())
            }
            _ => {
                let list: Vec<Value> = views.iter().map(summarize_view).collect();
                self.render(&json!({ "views": list }))
            }
        }
    }

    /// Render a JSON message in the selected format
    fn render(&self, msg: &Value) -> Result<String> {
        let out = match self.cli.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
            OutputFormat::Json | OutputFormat::Table => serde_json::to_string(msg)?,
        };
        Ok(out)
    }
}

fn summarize_view(def: &ViewDefinition) -> Value {
    json!({
        "name": def.name,
        "title": def.display_title(),
        "page_size": def.page_size,
        "search_fields": def.search_fields,
        "sort": def.sort,
        "filters": def.filters.len(),
    })
}

/// Plain-text table of a page
///
/// Columns are the view's search fields, or the first record's top-level keys
/// when the view has none.
fn render_table(page: &Page, search_fields: &[String]) -> String {
    let columns: Vec<String> = if search_fields.is_empty() {
        page.records
            .first()
            .and_then(Value::as_object)
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default()
    } else {
        search_fields.to_vec()
    };

    let p = &page.pagination;
    let mut out = String::new();
    if p.is_empty() {
        let _ = writeln!(out, "{}: no matching records", page.view);
    } else {
        let _ = writeln!(
            out,
            "{}: page {}/{} (items {}-{} of {})",
            page.view,
            p.page,
            p.page_count,
            p.offset + 1,
            p.end,
            p.total_items
        );
    }

    if !page.records.is_empty() {
        let _ = writeln!(out, "{}", columns.join(" | "));
        for record in &page.records {
            let cells: Vec<String> = columns
                .iter()
                .map(|c| {
                    extract_field(record, c)
                        .and_then(scalar_to_string)
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" | "));
        }
    }

    out.trim_end().to_string()
}
