use std::fmt::Write;
use std::path::Path;

use carpool_core::{MatchOutcome, PoolMode};

pub(crate) fn render(outcome: &MatchOutcome, mode: PoolMode, output_path: &Path) -> String {
    let with_category = mode.is_category_aware();
    let mut out = String::new();

    let _ = writeln!(out, "Carpool groups saved to {}", output_path.display());
    let _ = writeln!(
        out,
        "{} assigned, {} unassigned",
        outcome.assignments.len(),
        outcome.unassigned.len()
    );
    out.push('\n');

    let mut header = vec!["Driver"];
    if with_category {
        header.push("Category");
    }
    header.extend(["Passengers", "Passenger Count"]);

    let rows: Vec<Vec<String>> = outcome
        .groups
        .iter()
        .map(|group| {
            let mut row = vec![group.driver.clone()];
            if with_category {
                row.push(group.category.map(|c| c.to_string()).unwrap_or_default());
            }
            row.push(group.passengers_label());
            row.push(group.passenger_count().to_string());
            row
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, title)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(&mut out, &header, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    if outcome.has_unassigned() {
        let _ = writeln!(out, "\nUnassigned passengers (no available driver seats):");
        for unassigned in &outcome.unassigned {
            match unassigned.category {
                Some(category) if with_category => {
                    let _ = writeln!(out, " - {} ({category})", unassigned.passenger);
                }
                _ => {
                    let _ = writeln!(out, " - {}", unassigned.passenger);
                }
            }
        }
    }

    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
