pub mod config;
pub mod init;
pub mod products;
pub mod serve;
