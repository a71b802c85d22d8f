//! Command line parsing for the editor launcher.
//!
//! [`args::parse_command_line`] turns the raw process command line into
//! [`args::CmdLineOptions`]; [`config::Config`] supplies the language and
//! localization tables it resolves names against.

pub mod args;
pub mod config;
pub mod logging;
