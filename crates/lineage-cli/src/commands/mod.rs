// crates/lineage-cli/src/commands/mod.rs
//
// Command module declarations for the lineage CLI, plus the identity flags
// shared by the commands that act on behalf of the local daemon.

pub mod compare;
pub mod contains;
pub mod show;
pub mod stamp;

use std::process::ExitCode;

use clap::Args;

use lineage_core::{CoerceInt, LineageError, RelayIdentity};

use crate::config::CliConfig;

/// Per-field overrides of the configured daemon identity.
///
/// Ports are taken as text and coerced, so a malformed value is reported
/// with the field it was meant for.
#[derive(Debug, Default, Args)]
pub struct IdentityArgs {
    /// Hostname to use instead of the configured one.
    #[arg(long)]
    pub hostname: Option<String>,
    /// Request-channel port to use instead of the configured one.
    #[arg(long)]
    pub req: Option<String>,
    /// Publish-channel port to use instead of the configured one.
    #[arg(long = "pub")]
    pub pub_port: Option<String>,
}

impl IdentityArgs {
    /// Apply the overrides on top of the configured identity.
    pub fn resolve(&self, config: &CliConfig) -> Result<RelayIdentity, LineageError> {
        let mut identity = config.identity();
        if let Some(hostname) = &self.hostname {
            identity.hostname = hostname.clone();
        }
        if let Some(req) = &self.req {
            identity.req = req.coerce_int("req")?;
        }
        if let Some(pub_port) = &self.pub_port {
            identity.pub_port = Some(pub_port.coerce_int("pub")?);
        }
        Ok(identity)
    }
}

/// Exit status for the check commands: 0 when the check holds, 1 otherwise.
pub fn exit_status(holds: bool) -> ExitCode {
    if holds {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// `ExitCode` has no `PartialEq` on every supported toolchain; compare the
/// debug renderings instead.
#[cfg(test)]
pub(crate) fn assert_exit(actual: ExitCode, expected: ExitCode) {
    assert_eq!(format!("{:?}", actual), format!("{:?}", expected));
}
