pub mod analytics;
pub mod emergency;
pub mod heatmap;
pub mod movement;
pub mod notifications;
