use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mirrorgrid::checker::Verdict;
use mirrorgrid::geometry::Grid;
use mirrorgrid::session::Feedback;
use mirrorgrid::shapes::ShapeDefinition;

pub mod grid;

fn join_keys<T: ToString>(keys: &[T]) -> String {
    if keys.is_empty() {
        "-".to_string()
    } else {
        keys.iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn print_shape_table(shapes: &[ShapeDefinition], grid: &Grid) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Shape").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Given Edges"),
        Cell::new("Expected Edges").fg(Color::Cyan),
    ]);
    for i in [0, 2, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, shape) in shapes.iter().enumerate() {
        let given: u32 = shape
            .left_segments()
            .iter()
            .filter_map(|s| s.unit_len())
            .sum();
        let expected = mirrorgrid::canonical::canonicalize(
            &shape.expected_segments(grid),
            grid.center_col(),
        );
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&shape.name).add_attribute(Attribute::Bold),
            Cell::new(shape.points.len()),
            Cell::new(given),
            Cell::new(expected.len()).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_verdict(shape: &ShapeDefinition, strokes: usize, verdict: &Verdict) {
    let feedback = Feedback::from_verdict(verdict);
    let color = if verdict.correct {
        Color::Green
    } else {
        Color::Red
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shape").add_attribute(Attribute::Bold),
        Cell::new(&shape.name),
    ]);
    table.add_row(vec![Cell::new("Strokes"), Cell::new(strokes)]);
    table.add_row(vec![
        Cell::new("Coverage"),
        Cell::new(format!(
            "{}/{} ({:.0}%)",
            verdict.expected_count - verdict.missing.len(),
            verdict.expected_count,
            verdict.score() * 100.0
        )),
    ]);
    table.add_row(vec![
        Cell::new("Missing").fg(Color::Yellow),
        Cell::new(join_keys(&verdict.missing)),
    ]);
    table.add_row(vec![
        Cell::new("Extra").fg(Color::Red),
        Cell::new(join_keys(&verdict.extra)),
    ]);
    table.add_row(vec![
        Cell::new("Verdict").add_attribute(Attribute::Bold),
        Cell::new(feedback.to_string())
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}
