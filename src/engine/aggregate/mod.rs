pub mod heatmap;
pub mod order;


pub use heatmap::count_regions;
pub use order::order_newest_first;
