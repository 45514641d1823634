use circlepack::geometry::Placement;
use circlepack::optimizer::HistoryRow;
use circlepack::scorer::{Constraint, ScoreDetails};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Accepted states, most recent first (as the live table grows from the top).
pub fn print_history_table(rows: &[HistoryRow], limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Iteration"),
        Cell::new("r / size").fg(Color::Cyan),
        Cell::new("Objective").fg(Color::Cyan),
        Cell::new("Filled").fg(Color::Green),
        Cell::new("Empty"),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows.iter().rev().take(limit) {
        table.add_row(vec![
            Cell::new(row.history_index).add_attribute(Attribute::Bold),
            Cell::new(row.iteration),
            Cell::new(format!("{:.4}", row.scaled_radius)),
            Cell::new(format!("{:.4}", row.objective)),
            Cell::new(format!("{:.2}%", row.filled_fraction * 100.0)),
            Cell::new(format!("{:.2}%", row.empty_fraction * 100.0)),
        ]);
    }

    if rows.len() > limit {
        println!(
            "\nAccepted States ({} of {} shown)",
            limit.min(rows.len()),
            rows.len()
        );
    } else {
        println!("\nAccepted States");
    }
    println!("{}", table);
}

pub fn print_placement_table(name: &str, placement: &Placement) {
    println!("\nPlacement: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Circle").add_attribute(Attribute::Bold),
        Cell::new("x"),
        Cell::new("y"),
        Cell::new("r"),
    ]);

    for (i, c) in placement.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}", c.x())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", c.y())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", c.r)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_score_report(name: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let limiting = match d.limiting {
        Some(Constraint::Pair(i, j)) => format!("pair {} - {}", i, j),
        Some(Constraint::Edge(i)) => format!("edge at {}", i),
        None => "-".to_string(),
    };

    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new("Radius").fg(Color::Cyan),
        Cell::new("r / size"),
        Cell::new("Objective").fg(Color::Cyan),
        Cell::new("Filled").fg(Color::Green),
        Cell::new("Min Pair"),
        Cell::new("Min Edge"),
        Cell::new("Limiting"),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let limiting_cell = if d.radius <= 0.0 {
        Cell::new(limiting).fg(Color::Red)
    } else {
        Cell::new(limiting)
    };

    table.add_row(vec![
        Cell::new(""),
        Cell::new(format!("{:.4}", d.radius)),
        Cell::new(format!("{:.4}", d.scaled_radius)),
        Cell::new(format!("{:.4}", d.objective)),
        Cell::new(format!("{:.2}%", d.filled_fraction * 100.0)),
        Cell::new(format!("{:.2}", d.min_pair_distance)),
        Cell::new(format!("{:.2}", d.min_edge_bound)),
        limiting_cell,
    ]);
    println!("\n{}", table);
}
