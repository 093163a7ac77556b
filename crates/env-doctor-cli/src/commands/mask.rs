//! Mask command - print .env with sensitive values hidden.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use env_doctor::EnvDoctor;

pub fn run(
    dir: PathBuf,
    env: Option<String>,
    mask_all: bool,
    output: Option<PathBuf>,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let masked = doctor.mask(&dir, env.as_deref(), mask_all)?;

    match output {
        Some(path) => {
            doctor.write(&path, &masked)?;
            println!(
                "{}",
                format!("✓ Masked output written to {}", path.display()).green()
            );
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(masked.as_bytes())?;
            if !masked.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(0)
}
