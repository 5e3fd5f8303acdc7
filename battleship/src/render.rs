use std::{borrow::Cow, collections::BTreeMap, fmt};

use battlegrid::board::{CellState, Grid};

/// Display names for vessels, keyed by length.
pub struct ShipNames(BTreeMap<usize, String>);

impl ShipNames {
    /// Get the display name of a vessel with the given length.
    pub fn describe(&self, length: usize) -> Cow<str> {
        match self.0.get(&length) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("{}-cell ship", length)),
        }
    }
}

impl Default for ShipNames {
    fn default() -> Self {
        ShipNames(
            [
                (1, "single-funnel ship"),
                (2, "two-funnel ship"),
                (3, "three-funnel ship"),
            ]
            .iter()
            .map(|&(len, name)| (len, name.to_owned()))
            .collect(),
        )
    }
}

/// Display helper for a single cell.
struct Symbol(CellState);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Empty => "O",
            CellState::Ship => "■",
            CellState::Hit => "X",
            CellState::Miss => "T",
            CellState::Contour => "·",
        })
    }
}

/// Render the grid as text. Ship cells are drawn as open water when `hide_ships` is set.
pub fn render_grid(grid: &Grid, hide_ships: bool) -> String {
    let width = (grid.size() - 1).to_string().len();
    let mut out = format!("{:>w$} ", "", w = width);
    let header: Vec<_> = (0..grid.size())
        .map(|x| format!("{:^w$}", x, w = width))
        .collect();
    out.push_str(&header.join("|"));
    out.push('\n');
    for (y, row) in grid.rows().enumerate() {
        let cells: Vec<_> = row
            .map(|(_, state)| match state {
                CellState::Ship if hide_ships => CellState::Empty,
                other => other,
            })
            .map(|state| format!("{:^w$}", Symbol(state), w = width))
            .collect();
        out.push_str(&format!("{:>w$}|{}\n", y, cells.join("|"), w = width));
    }
    out
}

/// Print out the grid.
pub fn show_grid(grid: &Grid, hide_ships: bool) {
    println!();
    print!("{}", render_grid(grid, hide_ships));
}
