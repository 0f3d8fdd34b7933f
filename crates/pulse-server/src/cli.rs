// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pulse_core::ServerConfig;

/// Serve sentiment and priority analysis of GitHub issues over HTTP.
#[derive(Parser, Debug, Default)]
#[command(name = "pulse-server", version, about)]
pub struct Args {
    /// Config file to load instead of the default location
    #[arg(long, env = "PULSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory served for `/` and static assets (overrides `server.static_dir`)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Args {
    /// Applies command-line overrides on top of the loaded server settings.
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            server.static_dir.clone_from(dir);
        }
    }
}
