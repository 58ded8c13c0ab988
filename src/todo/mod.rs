pub mod models;
pub mod reducer;
