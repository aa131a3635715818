//! CLI logic for the seqdraw diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use seqdraw::{DiagramBuilder, SeqdrawError};

/// Run the seqdraw CLI application
///
/// This function reads the input document, renders it and writes the
/// resulting SVG to the output file. Theme and seed given on the command line
/// take precedence over the configuration file.
///
/// # Errors
///
/// Returns `SeqdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SeqdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(theme) = args.theme {
        app_config.style_mut().set_theme(theme);
    }
    if args.seed.is_some() {
        app_config.style_mut().set_seed(args.seed);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
