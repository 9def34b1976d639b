pub mod activity_seed;
pub mod in_memory_activity_repository;
