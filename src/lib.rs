pub mod cli;
pub mod engine;
pub mod input;
pub mod output;
pub mod toc;
