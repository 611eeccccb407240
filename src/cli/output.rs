//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{CadastreArgs, OutputFormat};
use crate::error::Result;

/// Print a result in the format the CLI was invoked with.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CadastreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CadastreArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for uniform traversal
    let value = serde_json::to_value(result)?;

    match &value {
        serde_json::Value::Object(obj) if obj.contains_key("hits") => {
            output_search_results_human(obj)
        }
        serde_json::Value::Object(obj) if obj.contains_key("min_lat") => output_viewport_human(obj),
        serde_json::Value::Array(items) => output_markers_human(items),
        _ => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

/// Render a search envelope.
fn output_search_results_human(obj: &serde_json::Map<String, serde_json::Value>) -> Result<()> {
    let total = obj.get("total_hits").and_then(|v| v.as_u64()).unwrap_or(0);
    let time_ms = obj
        .get("processing_time_ms")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    println!("{total} result(s) in {time_ms} ms");

    if let Some(hits) = obj.get("hits").and_then(|v| v.as_array()) {
        for hit in hits {
            let id = hit.get("id").and_then(|v| v.as_str()).unwrap_or("?");
            let city = hit
                .pointer("/address/city")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            let price = hit.get("price").and_then(|v| v.as_f64()).unwrap_or(0.0);
            let currency = hit.get("currency").and_then(|v| v.as_str()).unwrap_or("");
            println!("  {id}  {city}  {price:.0} {currency}");
        }
    }
    Ok(())
}

/// Render a marker list.
fn output_markers_human(items: &[serde_json::Value]) -> Result<()> {
    println!("{} marker(s)", items.len());
    for item in items {
        let category = item.get("category").and_then(|v| v.as_str()).unwrap_or("?");
        let name = item.get("name").and_then(|v| v.as_str()).unwrap_or("?");
        let lat = item.pointer("/point/lat").and_then(|v| v.as_f64());
        let lon = item.pointer("/point/lon").and_then(|v| v.as_f64());
        match (lat, lon) {
            (Some(lat), Some(lon)) => {
                println!("  [{category}] {name} ({lat:.5}, {lon:.5})");
            }
            _ => println!("  [{category}] {name}"),
        }
    }
    Ok(())
}

/// Render a viewport.
fn output_viewport_human(obj: &serde_json::Map<String, serde_json::Value>) -> Result<()> {
    let get = |key: &str| obj.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0);
    println!(
        "lat [{:.5}, {:.5}]  lon [{:.5}, {:.5}]  max zoom {}",
        get("min_lat"),
        get("max_lat"),
        get("min_lon"),
        get("max_lon"),
        obj.get("max_zoom").and_then(|v| v.as_u64()).unwrap_or(0)
    );
    Ok(())
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &CadastreArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
