mod config;
mod emitter;
mod error;
mod palette;
mod theme;

use error::ThemeError;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        log::error!("Theme generation failed: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ThemeError> {
    let config = config::load_build_config()?;
    let palettes = config.palettes()?;

    let entries = emitter::generate_all(&palettes, &config.output_dir)?;
    log::info!(
        "Wrote {} theme files to {}",
        entries.len(),
        config.output_dir.display()
    );

    emitter::print_manifest(&entries)
}
