pub mod cli;
pub mod consts;
pub mod core;
