pub mod config;
pub mod ddp;
pub mod flow;
