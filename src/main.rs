use svg2tikz::cli::{get_config, run};

fn main() -> svg2tikz::Result<()> {
    run(get_config()?)?;

    Ok(())
}
