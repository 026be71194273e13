pub mod course_schedule;
pub mod flood_fill;
pub mod number_of_islands;
pub mod rotting_oranges;
