pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod output;
pub mod remote;
pub mod resolver;

pub use cli::Cli;
pub use config::ResolverConfig;
pub use error::{ParseError, ResolveError, TransportError};
pub use resolver::{Resolution, UrlResolver};

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = ResolverConfig::from_cli(&cli);
    logging::init(config.debug);
    log::debug!("Resolving from \"{}\"", cli.directory.display());

    let resolver = UrlResolver::new(config);
    let resolution = resolver.resolve(&cli.directory)?;

    if let Some(warning) = &resolution.warning {
        output::text::print_warning(warning);
    }

    if cli.json {
        return output::json::print_resolution(&resolution);
    }
    if cli.print {
        output::text::print_url(&resolution);
        return Ok(());
    }

    browser::open_url(&resolution.url)
}
