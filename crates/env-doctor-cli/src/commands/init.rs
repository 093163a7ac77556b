//! Init command - scaffold .env.example or .env.schema from an existing .env.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use env_doctor::EnvDoctor;

pub fn run(
    dir: PathBuf,
    env: Option<String>,
    output: Option<String>,
    strip_values: bool,
    schema: bool,
    force: bool,
    dry_run: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let (content, count) = if schema {
        doctor.schema_scaffold(&dir, env.as_deref())?
    } else {
        doctor.example_scaffold(&dir, env.as_deref(), strip_values)?
    };

    if dry_run {
        let mut stdout = std::io::stdout();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return Ok(0);
    }

    let default_output = if schema {
        &doctor.config().schema_file
    } else {
        &doctor.config().example_file
    };
    let output_name = output.unwrap_or_else(|| default_output.clone());
    let output_path = dir.join(&output_name);

    doctor.write_new(&output_path, &content, force)?;
    println!(
        "{}",
        format!("✓ Generated {output_name} ({count} variables)").green()
    );

    Ok(0)
}
