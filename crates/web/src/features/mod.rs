pub mod coloring;
pub mod scores;
pub mod users;
