//! Cross-strategy properties checked on fixed and random grids.

use gridpath_core::{Grid, Pos};
use proptest::prelude::*;

use crate::{Algorithm, Outcome, manhattan, run_search};

fn run_all(g: &Grid) -> Vec<crate::SearchResult> {
    Algorithm::ALL
        .iter()
        .map(|&a| run_search(g, g.start(), g.target(), a).unwrap())
        .collect()
}

#[test]
fn open_3x3_scenario() {
    let g = Grid::new(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
    for r in run_all(&g) {
        assert!(r.is_found(), "{}", r.algorithm);
        if r.algorithm.is_optimal() {
            assert_eq!(r.path.len(), 5, "{}", r.algorithm);
            assert!(
                r.path
                    .windows(2)
                    .all(|w| w[1].diagonal_rank() == w[0].diagonal_rank() + 1)
            );
        }
    }
    let bfs = run_search(&g, g.start(), g.target(), Algorithm::Bfs).unwrap();
    assert_eq!(bfs.visited.len(), 9);
    let astar = run_search(&g, g.start(), g.target(), Algorithm::AStar).unwrap();
    assert_eq!(astar.visited.len(), 5);
}

#[test]
fn wall_between_endpoints_is_unreachable() {
    let g = Grid::from_ascii("S#T").unwrap();
    for r in run_all(&g) {
        assert_eq!(r.outcome(), Outcome::Unreachable, "{}", r.algorithm);
        assert_eq!(r.visited, vec![g.start()]);
        assert_eq!(r.path, vec![g.target()]);
        assert_ne!(r.path.first(), Some(&g.start()));
    }
}

#[test]
fn enclosed_start_is_unreachable() {
    let g = Grid::from_ascii(
        "...#...
         .S.#...
         ...#..T",
    )
    .unwrap();
    for r in run_all(&g) {
        assert!(!r.is_found(), "{}", r.algorithm);
        assert!(!r.visited.contains(&g.target()));
        assert_eq!(r.visited.len(), 9, "{}", r.algorithm);
    }
}

// ---------------------------------------------------------------------------
// Random grids
// ---------------------------------------------------------------------------

fn arb_grid(wall_weight: f64) -> impl Strategy<Value = Grid> {
    (1i32..9, 2i32..9)
        .prop_flat_map(move |(rows, cols)| {
            let len = (rows * cols) as usize;
            (
                Just((rows, cols)),
                0..len,
                1..len,
                prop::collection::vec(prop::bool::weighted(wall_weight), len),
            )
        })
        .prop_map(|((rows, cols), s, offset, walls)| {
            let len = walls.len();
            let t = (s + offset) % len;
            let to_pos = |i: usize| Pos::new(i as i32 / cols, i as i32 % cols);
            let mut g = Grid::new(rows, cols, to_pos(s), to_pos(t)).unwrap();
            for (i, _) in walls.iter().enumerate().filter(|(_, w)| **w) {
                // endpoints refuse walls; that is fine here
                let _ = g.set_wall(to_pos(i), true);
            }
            g
        })
}

fn assert_walkable(g: &Grid, path: &[Pos]) {
    for p in path {
        assert!(!g.is_wall(*p));
    }
    for w in path.windows(2) {
        assert_eq!(manhattan(w[0], w[1]), 1);
    }
}

proptest! {
    #[test]
    fn open_grid_paths_match_manhattan(g in arb_grid(0.0)) {
        let expected = manhattan(g.start(), g.target()) as usize;
        for r in run_all(&g) {
            prop_assert!(r.is_found());
            assert_walkable(&g, &r.path);
            if r.algorithm.is_optimal() {
                prop_assert_eq!(r.path_len(), Some(expected));
            } else {
                prop_assert!(r.path_len().unwrap() >= expected);
            }
        }
    }

    #[test]
    fn strategies_agree_on_reachability_and_length(g in arb_grid(0.3)) {
        let results = run_all(&g);
        let (bfs, dfs, dijkstra, astar) = (&results[0], &results[1], &results[2], &results[3]);

        let found = bfs.is_found();
        for r in &results {
            prop_assert_eq!(r.is_found(), found);
            if found {
                assert_walkable(&g, &r.path);
            } else {
                prop_assert!(!r.visited.contains(&g.target()));
                prop_assert_eq!(&r.path, &vec![g.target()]);
            }
        }

        prop_assert_eq!(bfs.path_len(), dijkstra.path_len());
        prop_assert_eq!(astar.path_len(), dijkstra.path_len());
        prop_assert!(astar.settled() <= dijkstra.settled());
        if found {
            prop_assert!(dfs.path_len() >= bfs.path_len());
        }
    }

    #[test]
    fn repeated_runs_are_identical(g in arb_grid(0.25)) {
        for a in Algorithm::ALL {
            let copy = g.clone();
            let first = run_search(&g, g.start(), g.target(), a).unwrap();
            let second = run_search(&copy, copy.start(), copy.target(), a).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn visit_orders_have_no_duplicates(g in arb_grid(0.25)) {
        for r in run_all(&g) {
            let mut seen = r.visited.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), r.visited.len());
            prop_assert_eq!(r.visited.first(), Some(&g.start()));
        }
    }
}
