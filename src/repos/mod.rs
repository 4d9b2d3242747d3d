pub mod error;
pub mod session_repo;
pub mod todo_repo;
pub mod user_repo;
