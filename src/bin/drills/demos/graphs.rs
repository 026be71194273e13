pub fn number_of_islands() {
    use drills::graphs::number_of_islands::{num_islands_bfs, num_islands_dfs};

    let grid: Vec<Vec<u8>> = ["11000", "11000", "00100", "00011"]
        .iter()
        .map(|r| r.bytes().collect())
        .collect();
    for row in &grid {
        println!("{}", std::str::from_utf8(row).unwrap());
    }
    println!("islands (dfs): {}", num_islands_dfs(&grid));
    println!("islands (bfs): {}", num_islands_bfs(&grid));
}

pub fn course_schedule() {
    use drills::graphs::course_schedule::{can_finish_dfs, course_order};

    let prereqs = [(1, 0), (2, 0), (3, 1), (3, 2)];
    println!("4 courses, prerequisites {prereqs:?}");
    println!("kahn order: {:?}", course_order(4, &prereqs));
    println!("dfs cycle check: {}", can_finish_dfs(4, &prereqs));

    let cyclic = [(1, 0), (0, 1)];
    println!("cyclic {cyclic:?}: {:?}", course_order(2, &cyclic));
}

pub fn rotting_oranges() {
    use drills::graphs::rotting_oranges::minutes_to_rot;

    let grid = vec![vec![2, 1, 1], vec![1, 1, 0], vec![0, 1, 1]];
    println!("grid: {grid:?}");
    println!("minutes: {:?}", minutes_to_rot(&grid));

    let stuck = vec![vec![2, 1, 1], vec![0, 1, 1], vec![1, 0, 1]];
    println!("unreachable orange: {:?}", minutes_to_rot(&stuck));
}

pub fn flood_fill() {
    use drills::graphs::flood_fill::flood_fill;

    let image = vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]];
    println!("before: {image:?}");
    println!("after:  {:?}", flood_fill(&image, 1, 1, 2));
}
