pub mod client;
pub mod user_directory;
