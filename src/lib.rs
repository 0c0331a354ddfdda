pub mod cli_args;
mod error;
mod extractor;
mod middleware;
mod route;
pub mod server;
mod state;
pub mod storage;
pub mod types;
mod utils;
