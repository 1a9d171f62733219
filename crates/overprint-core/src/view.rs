//! Text and JSON renderings of the demo and the overload set.

use serde::Serialize;
use serde_json::Value as Json;

use crate::category::Category;
use crate::demo::Record;
use crate::error::{OverprintError, Result};
use crate::resolve::Resolution;

/// The output format for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OverprintError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// The output of a view render.
#[derive(Debug)]
pub struct ViewOutput {
    /// Terminal-friendly text rendering.
    pub text: String,
    /// Machine-readable JSON (always populated).
    pub data: Json,
}

impl ViewOutput {
    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.data)? + "\n"),
        }
    }
}

/// The demo output: one line per record.
pub fn demo_view(records: &[Record]) -> Result<ViewOutput> {
    let text = records.iter().map(|r| format!("{}\n", r.line)).collect();
    Ok(ViewOutput {
        text,
        data: serde_json::to_value(records)?,
    })
}

#[derive(Serialize)]
struct OverloadRow {
    category: Category,
    declaration: String,
    parameter: String,
    label: &'static str,
}

/// The overload set as a table.
pub fn overloads_view() -> Result<ViewOutput> {
    let rows: Vec<OverloadRow> = Category::ALL
        .into_iter()
        .map(|category| OverloadRow {
            category,
            declaration: category.declaration(),
            parameter: category.parameter().to_string(),
            label: category.label(),
        })
        .collect();

    let mut text = String::from("print overloads:\n\n");
    for row in &rows {
        text.push_str(&format!(
            "  {:<20} {:<36} \"{}\"\n",
            row.category.name(),
            row.declaration,
            row.label
        ));
    }

    Ok(ViewOutput {
        text,
        data: serde_json::to_value(&rows)?,
    })
}

/// A resolution with its viable candidates.
pub fn resolution_view(resolution: &Resolution) -> Result<ViewOutput> {
    let mut text = format!(
        "print({}) binds {}\n\nviable candidates:\n",
        resolution.argument,
        resolution.selected.declaration()
    );
    for candidate in &resolution.candidates {
        let marker = if candidate.category == resolution.selected { "*" } else { " " };
        text.push_str(&format!(
            "  {marker} {:<36} {}\n",
            candidate.category.declaration(),
            candidate.rank
        ));
    }

    let data = serde_json::json!({
        "argument": resolution.argument.to_string(),
        "selected": resolution.selected,
        "candidates": resolution.candidates,
    });
    Ok(ViewOutput { text, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::ParamType;
    use crate::resolve::resolve;

    #[test]
    fn output_format_parsing() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(OverprintError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn demo_view_text_is_the_printed_output() {
        let view = demo_view(&crate::demo::records()).unwrap();
        let text = view.render(OutputFormat::Text).unwrap();
        assert!(text.starts_with("Int: 10\nConst Int* : 10\n"));
        assert!(text.ends_with("String: C++ string\n"));
    }

    #[test]
    fn demo_view_json_lists_records() {
        let view = demo_view(&crate::demo::records()).unwrap();
        let items = view.data.as_array().unwrap();
        assert_eq!(items.len(), 11);
        assert_eq!(items[6]["category"], "double");
        assert_eq!(items[6]["value"], "3.14");
        assert_eq!(items[9]["label"], "C-string: ");
    }

    #[test]
    fn overloads_view_covers_every_category() {
        let view = overloads_view().unwrap();
        for category in Category::ALL {
            assert!(view.text.contains(&category.declaration()));
        }
        assert_eq!(view.data[4]["parameter"], "long*");
    }

    #[test]
    fn resolution_view_marks_selected() {
        let arg = ParamType::parse("unsigned int").unwrap();
        let view = resolution_view(&resolve(&arg).unwrap()).unwrap();
        assert!(view
            .text
            .starts_with("print(unsigned int) binds void print(unsigned int& x)"));
        assert!(view.text.contains("* void print(unsigned int& x)"));
        assert_eq!(view.data["selected"], "unsigned-ref");
        let json = view.render(OutputFormat::Json).unwrap();
        assert!(json.contains("\"rank\": \"exact\""));
    }
}
