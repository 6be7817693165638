pub mod cmd;
pub mod logging;
pub mod report;
pub mod state;
