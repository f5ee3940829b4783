//! Handler for the `pdeps` invocation.

use miette::Result;

use pdeps_core::config::GlobalConfig;
use pdeps_core::dependency::ResolveTarget;
use pdeps_resolver::resolver;

use crate::cli::Cli;
use crate::report;

pub fn exec(args: Cli) -> Result<()> {
    let config = match &args.config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };
    let format = args.format.map(Into::into).unwrap_or(config.output.format);

    let target = ResolveTarget::new(args.package, args.version, &args.qualifiers);
    tracing::debug!("Resolving {target} from {}", args.filename.display());

    let resolution = resolver::resolve_file(&args.filename, target)?;
    print!("{}", report::render(&resolution, format)?);

    Ok(())
}
