//! Wancak CLI — command-line access to 1cak.com listings and posts.

pub mod cli;
pub mod output;

pub use cli::{execute, Cli, Commands};
