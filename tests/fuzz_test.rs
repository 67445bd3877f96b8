/// Fuzzes the search engine by checking, for many random grids, every strategy against a
/// brute-force reference: BFS and A* must find shortest routes, DFS and greedy some valid route,
/// and unreachable ends must be reported after flooding exactly the start's component.
use grid_search::{Grid, Outcome, Position, Strategy};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen_bool(0.35) {
                grid.set_barrier(Position::new(row, col)).unwrap();
            }
        }
    }
    let start = random_grid_point(&grid, rng);
    let mut end = random_grid_point(&grid, rng);
    while end == start {
        end = random_grid_point(&grid, rng);
    }
    grid.set_start(start).unwrap();
    grid.set_end(end).unwrap();
    grid
}

fn random_grid_point(grid: &Grid, rng: &mut StdRng) -> Position {
    Position::new(
        rng.gen_range(0..grid.rows()) as i32,
        rng.gen_range(0..grid.cols()) as i32,
    )
}

/// Plain breadth-first flood written independently of the crate's engine.
fn reference_distance(grid: &Grid, start: Position, end: Position) -> Option<usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if p == end {
            return Some(d);
        }
        for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let n = Position::new(p.row + dr, p.col + dc);
            let open = grid.cell_at(n).map_or(false, |c| !c.is_barrier());
            if open && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..10);
        let cols = rng.gen_range(2..10);
        let mut grid = random_grid(rows, cols, &mut rng);
        let (start, end) = grid.endpoints().unwrap();
        let expected = reference_distance(&grid, start, end);
        let component = grid.component_size(start).unwrap();
        assert_eq!(grid.reachable(start, end).unwrap(), expected.is_some());

        for strategy in Strategy::ALL {
            let result = strategy.run(&mut grid).unwrap();
            // Show the grid if the result is off
            let shown = format!("{}\n{}", strategy, grid);
            match (&result.outcome, expected) {
                (Outcome::Found(route), Some(distance)) => {
                    assert!(route.is_valid_on(&grid), "{}", shown);
                    assert_eq!(route.first(), Some(start), "{}", shown);
                    assert_eq!(route.last(), Some(end), "{}", shown);
                    if strategy.guarantees_shortest() {
                        assert_eq!(route.len(), distance, "{}", shown);
                    } else {
                        assert!(route.len() >= distance, "{}", shown);
                    }
                    assert!(result.visited_count >= route.len(), "{}", shown);
                    assert!(result.visited_count <= component, "{}", shown);
                }
                (Outcome::Unreachable, None) => {
                    assert_eq!(result.visited_count, component, "{}", shown);
                }
                _ => panic!("{:?} disagrees with reference {:?}\n{}", result, expected, shown),
            }
        }
    }
}

#[test]
fn fuzz_rerun_is_idempotent() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(8, 8, &mut rng);
        for strategy in Strategy::ALL {
            let first = strategy.run(&mut grid).unwrap();
            let drawn = grid.to_string();
            grid.reset_all();
            let second = strategy.run(&mut grid).unwrap();
            assert_eq!(first.path_length(), second.path_length());
            assert_eq!(first.visited_count, second.visited_count);
            assert_eq!(drawn, grid.to_string());
        }
    }
}

#[test]
fn astar_never_expands_more_than_bfs() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(12, 12, &mut rng);
        let bfs = Strategy::Bfs.run(&mut grid).unwrap();
        let astar = Strategy::AStar.run(&mut grid).unwrap();
        if bfs.is_found() {
            assert_eq!(bfs.path_length(), astar.path_length());
            assert!(astar.visited_count <= bfs.visited_count, "{}", grid);
        }
    }
}
