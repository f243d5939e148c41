use anyhow::Result;
use stencil::cli::App;

fn main() -> Result<()> {
    let args = stencil::cli::Args::parse_args();
    let app = App::from_args(&args)?;

    app.run(args)?;

    Ok(())
}
