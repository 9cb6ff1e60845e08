//! Static terminal rendering of a finished maze.
//!
//! This is a read-only consumer of the core: it turns vertex wall flags, a
//! search trace, and the solution route into a single printable frame. One
//! maze cell maps to the center of a 3x3 block of tiles shared with its
//! neighbors, so a `w x h` maze renders as `2w+1` columns by `2h+1` rows.

use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::maze::{Edge, Maze};

/// One rendered tile, always two character columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Wall,
    Floor,
    Start,
    Goal,
    /// A cell or passage on the solution route.
    Route,
    /// A cell reached by the search trace.
    Visited,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Floor => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Visited => "* ".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Renders the bare maze: walls, floor, start and goal markers.
pub fn render(maze: &Maze) -> String {
    render_with(maze, &[], &[])
}

/// Renders the maze with overlays: `visited` marks the destination cell of
/// every traced search edge, `route` paints the solution cells and the
/// passages between them. The route wins where the two overlap; start and
/// goal markers win over everything.
pub fn render_with(maze: &Maze, visited: &[Edge], route: &[Edge]) -> String {
    let grid_w = maze.width() as usize * 2 + 1;
    let grid_h = maze.height() as usize * 2 + 1;
    let mut tiles = vec![Tile::Wall; grid_w * grid_h];

    let cell_center = |x: u8, y: u8| (y as usize * 2 + 1) * grid_w + (x as usize * 2 + 1);

    // Floor for every cell, plus the passages its cleared walls imply.
    // Right/bottom suffice: the neighbor's left/top flag mirrors them.
    for v in maze.vertices() {
        let center = cell_center(v.x, v.y);
        tiles[center] = Tile::Floor;
        if !v.walls.right {
            tiles[center + 1] = Tile::Floor;
        }
        if !v.walls.bottom {
            tiles[center + grid_w] = Tile::Floor;
        }
    }

    for e in visited {
        if let Some(v) = maze.vertex(e.to) {
            tiles[cell_center(v.x, v.y)] = Tile::Visited;
        }
    }

    for e in route {
        let (Some(a), Some(b)) = (maze.vertex(e.from), maze.vertex(e.to)) else {
            continue;
        };
        let (ca, cb) = (cell_center(a.x, a.y), cell_center(b.x, b.y));
        tiles[ca] = Tile::Route;
        tiles[cb] = Tile::Route;
        // The passage tile sits halfway between the two cell centers.
        tiles[(ca + cb) / 2] = Tile::Route;
    }

    if let Some(start) = maze.vertex(maze.start()) {
        tiles[cell_center(start.x, start.y)] = Tile::Start;
    }
    if let Some(goal) = maze.vertex(maze.goal()) {
        tiles[cell_center(goal.x, goal.y)] = Tile::Goal;
    }

    let mut out = String::new();
    for row in tiles.chunks(grid_w) {
        for tile in row {
            out.push_str(&tile.to_string());
        }
        out.push('\n');
    }
    out
}
