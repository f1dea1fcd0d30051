pub mod dashboard;
pub mod insights;
pub mod ranking;
pub mod series;
