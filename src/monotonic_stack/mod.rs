pub mod daily_temperatures;
pub mod largest_rectangle;
pub mod next_greater_element;
pub mod online_stock_span;
