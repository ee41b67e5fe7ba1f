pub mod ops_create;
pub mod ops_exists;
pub mod ops_plan;
pub mod ops_releases;
pub mod recipe;
