use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Two players sharing one board in the terminal.
///
/// The board is drawn on standard output. Diagnostics from both the
/// game rules and the front end are written to standard error.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity of the diagnostics, e.g. `debug` to follow every move.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_interface_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn applet_may_be_omitted() {
        let cli = Cli::try_parse_from(["cli"]).unwrap();
        assert!(cli.applet.is_none());
    }

    #[test]
    fn verbosity_applies_to_the_whole_binary() {
        let cli = Cli::try_parse_from(["cli", "-v", "trace", "play", "--turn", "black"]).unwrap();
        assert_eq!(cli.verbosity, Level::TRACE);
        assert!(matches!(cli.applet, Some(Applet::Play(_))));
    }

    #[test]
    fn malformed_setups_are_rejected_before_playing() {
        assert!(Cli::try_parse_from(["cli", "play", "--board", "8/8/8"]).is_err());
        assert!(Cli::try_parse_from(["cli", "play", "--rules", "(castling: true)"]).is_err());
    }
}
