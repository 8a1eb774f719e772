//! Application configuration initialization command.
//!
//! Interactive setup that collects the Tempo connection settings and
//! writes the configuration file. With `--delete` the existing
//! configuration is removed instead.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
