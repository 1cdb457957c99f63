use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

mod gemini;

const DEFAULT_PROMPT: &str = "Combine the first image's face with the second image's clothing \
piece. The person must be wearing the clothing piece. Remove all other accessories that might \
interfere with seeing the clothing piece which is the highlight.";
const DEFAULT_OUTPUT_PATH: &str = "outputs/tryon.png";

/// Collects the four inputs from the operator and hands them to the
/// generation call. Blank prompt or output path means "use the default".
pub(crate) fn run() -> Result<()> {
    let face_path = prompt("Enter the path to the face image: ")?;
    let clothing_path = prompt("Enter the path to the clothing image: ")?;
    let prompt_text = prompt("Enter your prompt (or leave blank for default): ")?;
    let output_path = prompt("Enter output file path (or leave blank for default): ")?;

    let prompt_text = if prompt_text.is_empty() {
        DEFAULT_PROMPT.to_string()
    } else {
        prompt_text
    };
    let output_path = if output_path.is_empty() {
        DEFAULT_OUTPUT_PATH.to_string()
    } else {
        output_path
    };

    gemini::generate_tryon(
        Path::new(&face_path),
        Path::new(&clothing_path),
        &prompt_text,
        Path::new(&output_path),
    )?;
    info!(output = %output_path, "try-on image written");
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}
