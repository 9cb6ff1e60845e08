use mazegraph::{Maze, SearchOrder, display};

/// Logs go to a file so the rendered maze on stdout stays clean.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazegraph.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn print_usage() {
    eprintln!("Usage: mazegraph <width> <height> [bfs|dfs] [seed]");
    eprintln!("Width and height are in cells, 1 to 255.");
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dims = args
        .iter()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        print_usage();
        return Ok(());
    }
    let (width, height) = (dims[0], dims[1]);

    let order = match args.get(2).map(String::as_str) {
        None | Some("bfs") => SearchOrder::BreadthFirst,
        Some("dfs") => SearchOrder::DepthFirst,
        Some(other) => {
            eprintln!("Unknown solver '{other}'.");
            print_usage();
            return Ok(());
        }
    };
    let seed = match args.get(3) {
        None => None,
        Some(s) => match s.parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("Seed must be an unsigned integer.");
                print_usage();
                return Ok(());
            }
        },
    };

    let maze = match Maze::new(width, height, seed) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Failed to generate maze: {e}");
            return Ok(());
        }
    };
    let trace = maze.solve(order);

    print!("{}", display::render_with(&maze, &trace, maze.solution()));
    println!(
        "{order}: visited {} edges; the route takes {} moves through a maze of {} passages.",
        trace.len(),
        maze.solution().len(),
        maze.span().len(),
    );
    Ok(())
}
