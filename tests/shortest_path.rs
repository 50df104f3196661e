use euclidean_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn route_cost(map: &RoadMap, route: &[NodeID]) -> Cost {
    route
        .windows(2)
        .map(|w| distance(map.position(w[0]).unwrap(), map.position(w[1]).unwrap()))
        .sum()
}

/// The cheapest of all simple Routes from `start` to `goal`, found by trying every one of them.
fn brute_force(map: &RoadMap, start: NodeID, goal: NodeID) -> Option<Cost> {
    fn visit(
        map: &RoadMap,
        current: NodeID,
        goal: NodeID,
        cost: Cost,
        visited: &mut Vec<NodeID>,
        best: &mut Option<Cost>,
    ) {
        if current == goal {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        let pos = map.position(current).unwrap();
        for &next in map.roads(current) {
            if visited.contains(&next) {
                continue;
            }
            visited.push(next);
            let step = distance(pos, map.position(next).unwrap());
            visit(map, next, goal, cost + step, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    visit(map, start, goal, 0.0, &mut vec![start], &mut best);
    best
}

fn random_map(rng: &mut WyRand, size: u32) -> RoadMap {
    let mut map = RoadMap::with_capacity(size as usize);
    for id in 0..size {
        let x = rng.generate_range(0..20u32) as f64;
        let y = rng.generate_range(0..20u32) as f64;
        map.add_intersection(id, (x, y));
    }
    for a in 0..size {
        for b in (a + 1)..size {
            if rng.generate_range(0..100u32) < 35 {
                map.add_road(a, b);
            }
        }
    }
    map
}

#[test]
fn corner() {
    init();
    let map = RoadMap::from_parts(
        [(0, (0.0, 0.0)), (1, (0.0, 1.0)), (2, (1.0, 1.0))],
        [(0, vec![1]), (1, vec![0, 2]), (2, vec![1])],
    );

    assert_eq!(shortest_path(&map, 0, 2), Some(vec![0, 1, 2]));
    assert_eq!(shortest_path(&map, 0, 0), Some(vec![0]));
}

#[test]
fn no_roads() {
    init();
    let map = RoadMap::from_parts([(0, (0.0, 0.0)), (1, (5.0, 5.0))], [(0, vec![]), (1, vec![])]);

    assert_eq!(shortest_path(&map, 0, 1), None);
}

#[test]
fn disconnected_components() {
    init();
    // 0 - 1 - 2     3 - 4
    let mut map = RoadMap::new();
    for id in 0..5 {
        map.add_intersection(id, (id as f64, 0.0));
    }
    map.add_road(0, 1);
    map.add_road(1, 2);
    map.add_road(3, 4);

    assert_eq!(shortest_path(&map, 0, 2), Some(vec![0, 1, 2]));
    assert_eq!(shortest_path(&map, 4, 3), Some(vec![4, 3]));
    for (start, goal) in [(0, 3), (2, 4), (4, 0)] {
        assert_eq!(shortest_path(&map, start, goal), None);
    }
}

#[test]
fn every_node_reaches_itself() {
    init();
    let mut rng = WyRand::new_seed(7);
    let map = random_map(&mut rng, 10);

    for (id, _) in map.intersections() {
        assert_eq!(shortest_path(&map, id, id), Some(vec![id]));
    }
}

#[test]
fn optimal_on_random_maps() {
    init();
    let mut rng = WyRand::new_seed(42);

    for _ in 0..40 {
        let map = random_map(&mut rng, 7);
        let finder = PathFinder::new(&map, PathFinderConfig::default());

        for start in 0..7 {
            for goal in 0..7 {
                let expected = brute_force(&map, start, goal);
                let path = finder.shortest_path(start, goal);

                let (expected, path) = match (expected, path) {
                    (None, None) => continue,
                    (Some(expected), Some(path)) => (expected, path),
                    (expected, path) => panic!(
                        "{} -> {}: expected {:?}, got {:?} on {:?}",
                        start, goal, expected, path, map
                    ),
                };

                assert_eq!(path.start(), Some(&start));
                assert_eq!(path.goal(), Some(&goal));
                for step in path.windows(2) {
                    assert!(
                        map.roads(step[0]).contains(&step[1]),
                        "{} -> {} is not a road",
                        step[0],
                        step[1]
                    );
                }
                assert!((route_cost(&map, &path) - path.cost()).abs() < 1e-9);
                assert!(
                    path.cost() <= expected + 1e-9,
                    "{} -> {}: {} is longer than {}",
                    start,
                    goal,
                    path,
                    expected
                );
            }
        }
    }
}

#[test]
fn grid_of_streets() {
    init();
    // a 10x10 grid of blocks where every street is 1 long
    let size = 10;
    let id = |x: u32, y: u32| y * size + x;
    let mut map = RoadMap::new();
    for y in 0..size {
        for x in 0..size {
            map.add_intersection(id(x, y), (x as f64, y as f64));
            if x > 0 {
                map.add_road(id(x - 1, y), id(x, y));
            }
            if y > 0 {
                map.add_road(id(x, y - 1), id(x, y));
            }
        }
    }

    let finder = PathFinder::new(&map, PathFinderConfig::with_size_hint(100));
    let path = finder.shortest_path(id(0, 0), id(9, 9)).unwrap();

    assert_eq!(path.len(), 19);
    assert_eq!(path.cost(), 18.0);
}

#[test]
fn try_reports_invalid_input() {
    init();
    let mut map = RoadMap::new();
    map.add_intersection(0, (0.0, 0.0));
    map.add_intersection(1, (1.0, f64::NAN));
    map.add_road(0, 1);
    map.add_one_way(0, 5);

    let strict = PathFinder::new(&map, PathFinderConfig::STRICT);
    assert_eq!(strict.try_shortest_path(3, 0), Err(SearchError::UnknownNode(3)));
    assert!(matches!(
        strict.try_shortest_path(0, 1),
        Err(SearchError::InvalidCoordinates { id: 1, .. })
    ));

    let lenient = PathFinder::new(&map, PathFinderConfig::default());
    assert_eq!(lenient.try_shortest_path(0, 1), Err(SearchError::UnknownNode(5)));
}
