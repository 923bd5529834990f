//! Scripts for deploying the Dibs protocol smart contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod registry;
pub mod sequencer;
pub mod types;
pub mod units;
pub mod utils;
