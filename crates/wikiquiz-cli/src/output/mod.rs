//! Result rendering shared by every command.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod quiz;
pub mod table;

/// Serialize `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => {
            let (headers, rows) = tabulate(serde_json::to_value(value)?);
            if rows.is_empty() {
                String::from("(no rows)")
            } else {
                let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
                table::render_table(&headers, &rows, table_options())
            }
        }
    })
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn table_options() -> table::TableOptions {
    let ui::UiPrefs {
        table_color,
        term_width,
        ..
    } = ui::prefs();
    table::TableOptions {
        max_width: term_width,
        color: table_color,
    }
}

type Grid = (Vec<String>, Vec<Vec<String>>);

/// Lists of objects get one column per key, a lone object becomes key/value
/// pairs, anything else lands in a single `value` column.
fn tabulate(value: Value) -> Grid {
    match value {
        Value::Object(map) => (
            vec!["key".into(), "value".into()],
            map.into_iter().map(|(key, value)| vec![key, cell(&value)]).collect(),
        ),
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let objects: Vec<&Map<String, Value>> =
                items.iter().filter_map(Value::as_object).collect();
            let mut headers: Vec<String> = Vec::new();
            for key in objects.iter().flat_map(|object| object.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let rows = objects
                .iter()
                .map(|object| {
                    headers
                        .iter()
                        .map(|header| object.get(header).map_or_else(|| "-".into(), cell))
                        .collect()
                })
                .collect();
            (headers, rows)
        }
        Value::Array(items) => (
            vec!["value".into()],
            items.iter().map(|item| vec![cell(item)]).collect(),
        ),
        scalar => (vec!["value".into()], vec![vec![cell(&scalar)]]),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".into(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
