// ABOUTME: Main application orchestration for the stencil CLI
// ABOUTME: Coordinates the resolve, load, select sink, and render stages

use anyhow::{bail, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::{Args, Config};
use crate::output;
use crate::template::TemplateEngine;
use crate::vars::VariableResolver;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // Logs go to stderr; stdout is reserved for the rendered document.
        let init_result = match self.config.logging.format.as_str() {
            "compact" => tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .with_target(false)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .with_target(false)
                .try_init(),
        };

        if init_result.is_ok() {
            debug!("Logging initialized with level: {}", log_level);
        }
    }

    /// Run the render pipeline with parsed arguments.
    ///
    /// Stages run in a fixed order: resolve variables, load the template,
    /// select the output sink, render. The first failing stage ends the run.
    pub fn run(&self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color);

        debug!("Starting stencil v{}", env!("CARGO_PKG_VERSION"));

        let variables = VariableResolver::new()
            .with_inline(&args.vars)
            .with_json(args.json.as_deref())
            .with_yaml(args.yaml.as_deref())
            .resolve()?;
        info!("Resolved {} template variables", variables.len());

        let input = match args.input.as_deref() {
            Some(path) => path,
            None => bail!("No input file provided"),
        };
        let template = TemplateEngine::new().compile_file(input)?;
        info!("Loaded template: {}", input.display());

        let mut writer = output::select_writer(args.output.as_deref())?;

        let rendered = template.render(&variables)?;
        writer.write(&rendered)?;

        info!("Render complete ({} bytes)", rendered.len());
        Ok(())
    }
}
