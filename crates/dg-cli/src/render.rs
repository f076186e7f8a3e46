//! Text views of a generated grid

use dg_core::dungeon::TileGrid;

/// What each character of the output shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    /// Tile symbols
    #[default]
    Tiles,
    /// Region ids (modulo 36) for carved cells
    Regions,
}

/// Render `grid` as one text line per row
pub fn render(grid: &TileGrid, view: View) -> String {
    match view {
        View::Tiles => grid.to_string(),
        View::Regions => render_regions(grid),
    }
}

fn render_regions(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (pos, cell) in grid.iter() {
        let symbol = match cell.region {
            Some(region) => char::from_digit(region.0 % 36, 36).unwrap_or('?'),
            None => cell.content.symbol(),
        };
        out.push(symbol);
        if pos.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::GeneratorConfig;
    use dg_core::dungeon::Pos;

    fn sample() -> TileGrid {
        let config = GeneratorConfig {
            seed: 3,
            ..GeneratorConfig::with_size(21, 11)
        };
        dg_core::generate(&config).unwrap().into_grid()
    }

    #[test]
    fn test_views_have_grid_shape() {
        let grid = sample();
        for view in [View::Tiles, View::Regions] {
            let text = render(&grid, view);
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(lines.len(), 11);
            assert!(lines.iter().all(|l| l.chars().count() == 21));
        }
    }

    #[test]
    fn test_region_view_marks_carved_cells() {
        let grid = sample();
        let text = render(&grid, View::Regions);
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        for (pos, cell) in grid.iter() {
            let shown = rows[pos.y][pos.x];
            match cell.region {
                Some(region) => assert_eq!(shown.to_digit(36), Some(region.0 % 36)),
                None => assert_eq!(shown, cell.content.symbol()),
            }
        }
        // Border never carries a region
        assert_eq!(rows[0][0], ' ');
        assert!(grid.region(Pos::new(0, 0)).is_none());
    }
}
