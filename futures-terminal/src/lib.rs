// futures-terminal: text menu and web dashboard over the futures order gateway.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod render;
