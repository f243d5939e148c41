// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flag surface for the single-shot render pipeline

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "A CLI template renderer with layered inline/JSON/YAML variable sources")]
#[command(version)]
pub struct Args {
    // Required by the pipeline, but optional here: the application owns the
    // missing-input diagnostic and its exit status, not the argument parser.
    #[arg(short, long, help = "The input template file to render")]
    pub input: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "The desired output file location (defaults to stdout)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "var",
        help = "Inline template variable (key=value), repeatable"
    )]
    pub vars: Vec<String>,

    #[arg(
        short,
        long,
        help = "Template variables as a JSON document or a path to a JSON file"
    )]
    pub json: Option<String>,

    #[arg(
        short,
        long,
        help = "Template variables as a YAML document or a path to a YAML file"
    )]
    pub yaml: Option<String>,

    #[arg(long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "stencil",
            "-i",
            "greeting.tmpl",
            "-o",
            "greeting.txt",
            "-v",
            "name=World",
            "-v",
            "env=test",
            "-j",
            "vars.json",
            "-y",
            "vars.yaml",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("greeting.tmpl")));
        assert_eq!(args.output, Some(PathBuf::from("greeting.txt")));
        assert_eq!(args.vars, vec!["name=World", "env=test"]);
        assert_eq!(args.json.as_deref(), Some("vars.json"));
        assert_eq!(args.yaml.as_deref(), Some("vars.yaml"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_minimal_invocation() {
        let args = Args::try_parse_from(["stencil", "--input", "greeting.tmpl"]).unwrap();

        assert_eq!(args.input, Some(PathBuf::from("greeting.tmpl")));
        assert_eq!(args.output, None);
        assert!(args.vars.is_empty());
        assert_eq!(args.json, None);
        assert_eq!(args.yaml, None);
    }

    #[test]
    fn test_input_is_optional_at_the_parser_level() {
        let args = Args::try_parse_from(["stencil"]).unwrap();
        assert_eq!(args.input, None);
    }
}
