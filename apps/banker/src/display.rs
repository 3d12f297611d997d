//! Output rendering and formatting

use banker_ops::OperationResult;
use banker_types::{RequestOutcome, SafetyReport, SystemSnapshot};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_plain(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    /// Render as human-readable text
    fn render_plain(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Request(outcome) => render_request(outcome),
            OperationResult::Safety(report) => render_safety(report),
            OperationResult::State(snapshot) => render_state(snapshot),
            OperationResult::Success(message) => {
                println!("{message}");
                Ok(())
            }
        }
    }
}

fn render_request(outcome: &RequestOutcome) -> io::Result<()> {
    if outcome.granted {
        println!("Request granted.");
        println!("Completion order: {}", format_order(&outcome.order));
    } else {
        println!("Request denied.");
    }
    render_trace(&outcome.trace);
    Ok(())
}

fn render_safety(report: &SafetyReport) -> io::Result<()> {
    if report.safe {
        println!("System is in a safe state.");
        println!("Completion order: {}", format_order(&report.order));
    } else {
        println!("System is NOT in a safe state.");
        if !report.order.is_empty() {
            println!(
                "Only these processes could finish: {}",
                format_order(&report.order)
            );
        }
    }
    render_trace(&report.trace);
    Ok(())
}

fn render_state(snapshot: &SystemSnapshot) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Process").add_attribute(Attribute::Bold),
        Cell::new("Allocation").add_attribute(Attribute::Bold),
        Cell::new("Maximum").add_attribute(Attribute::Bold),
        Cell::new("Need").add_attribute(Attribute::Bold),
    ]);

    for proc in 0..snapshot.num_proc {
        let need: Vec<i64> = snapshot.maximum[proc]
            .iter()
            .zip(&snapshot.allocation[proc])
            .map(|(max, held)| max - held)
            .collect();
        table.add_row(vec![
            Cell::new(format!("P{proc}")),
            Cell::new(format_vector(&snapshot.allocation[proc])),
            Cell::new(format_vector(&snapshot.maximum[proc])),
            Cell::new(format_vector(&need)),
        ]);
    }

    println!("{table}");

    let available: Vec<i64> = (0..snapshot.num_res)
        .map(|res| {
            snapshot.total[res]
                - snapshot
                    .allocation
                    .iter()
                    .map(|row| row[res])
                    .sum::<i64>()
        })
        .collect();
    println!("Total:     {}", format_vector(&snapshot.total));
    println!("Available: {}", format_vector(&available));
    Ok(())
}

fn render_trace(trace: &[String]) {
    if trace.is_empty() {
        return;
    }
    println!("Trace:");
    for line in trace {
        println!("  {line}");
    }
}

fn format_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|proc| format!("P{proc}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_vector(entries: &[i64]) -> String {
    let body = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_formatting() {
        assert_eq!(format_order(&[1, 3, 0]), "P1 -> P3 -> P0");
        assert_eq!(format_order(&[]), "");
    }

    #[test]
    fn vector_formatting() {
        assert_eq!(format_vector(&[3, -1, 0]), "[3, -1, 0]");
    }
}
