use grid_search::{Grid, Outcome, Strategy};

// Runs every strategy on the map below and prints the explored grid after each run, where
// - # marks an obstacle
// - S marks the start
// - E marks the end
// - x marks an expanded cell, o a cell still in the frontier and * the route found
//
// A strategy name given on the command line (bfs, dfs, greedy, astar) runs only that one.
const MAP: &str = "
S.........#.........
.########.#.######..
.#......#.#......#..
.#.####.#.#####..#..
.#.#..#.#.....#..#..
.#.#E.#.#####.#..#..
.#.#..#.......#.....
.#.####.#######.###.
.#..................
.##################.
";

fn main() -> Result<(), grid_search::Error> {
    let strategies = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Strategy>()?],
        None => Strategy::ALL.to_vec(),
    };
    let mut grid: Grid = MAP.parse()?;
    for strategy in strategies {
        let result = strategy.run(&mut grid)?;
        println!("{}:", strategy);
        println!("{}", grid);
        match result.outcome {
            Outcome::Found(route) => println!(
                "path length {}, {} cells expanded\n",
                route.len(),
                result.visited_count
            ),
            Outcome::Unreachable => println!("no path, {} cells expanded\n", result.visited_count),
            Outcome::Cancelled => println!("cancelled\n"),
        }
    }
    Ok(())
}
