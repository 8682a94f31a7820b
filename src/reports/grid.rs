use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Table};
use mirrorgrid::canonical::{canonicalize, CanonicalKey, EdgeSet};
use mirrorgrid::geometry::{Grid, Segment};

/// What an edge on the lattice drawing stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMark {
    Given,
    Drawn,
    Missing,
    Extra,
}

impl EdgeMark {
    fn glyph(self, horizontal: bool) -> char {
        match (self, horizontal) {
            (Self::Given, true) | (Self::Drawn, true) => '-',
            (Self::Given, false) | (Self::Drawn, false) => '|',
            (Self::Missing, _) => '?',
            (Self::Extra, _) => 'x',
        }
    }
}

/// ASCII lattice: nodes are `.` (`:` on the axis), edges sit between them.
pub struct Canvas {
    width: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(grid: &Grid) -> Self {
        let width = (grid.cols() * 2 - 1).max(1) as usize;
        let height = (grid.rows() * 2 - 1).max(1) as usize;
        let mut cells = vec![vec![' '; width]; height];
        for p in grid.nodes() {
            let glyph = if grid.is_axis(p.col) { ':' } else { '.' };
            cells[(p.row * 2) as usize][(p.col * 2) as usize] = glyph;
        }
        Self { width, cells }
    }

    pub fn mark(&mut self, key: &CanonicalKey, mark: EdgeMark) {
        let horizontal = key.a.row == key.b.row;
        let x = key.a.col + key.b.col;
        let y = key.a.row + key.b.row;
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if y < self.cells.len() && x < self.width {
            self.cells[y][x] = mark.glyph(horizontal);
        }
    }

    pub fn mark_all(&mut self, keys: &EdgeSet, mark: EdgeMark) {
        for key in keys {
            self.mark(key, mark);
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn print_shape(name: &str, grid: &Grid, given: &[Segment], drawn: &EdgeSet) {
    let mut canvas = Canvas::new(grid);
    canvas.mark_all(&canonicalize(given, grid.center_col()), EdgeMark::Given);
    canvas.mark_all(drawn, EdgeMark::Drawn);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![Cell::new(name)]);
    table.add_row(vec![Cell::new(canvas.render())]);
    println!("{}", table);
}

pub fn print_diff(
    name: &str,
    grid: &Grid,
    given: &[Segment],
    drawn: &EdgeSet,
    missing: &[CanonicalKey],
    extra: &[CanonicalKey],
) {
    let mut canvas = Canvas::new(grid);
    canvas.mark_all(&canonicalize(given, grid.center_col()), EdgeMark::Given);
    canvas.mark_all(drawn, EdgeMark::Drawn);
    for key in missing {
        canvas.mark(key, EdgeMark::Missing);
    }
    for key in extra {
        canvas.mark(key, EdgeMark::Extra);
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![Cell::new(format!("{} (? missing, x extra)", name))]);
    table.add_row(vec![Cell::new(canvas.render())]);
    println!("{}", table);
}
