use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Reads a file or stdin, enforcing `--max-size` unless `--force` is given.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(file_path) = file else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        return Ok(buffer);
    };

    if global.max_size > 0 {
        let file_size = fs::metadata(file_path)?.len() as usize;

        if file_size > global.max_size {
            if !global.force {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                    file_size, global.max_size
                )
                .into());
            }
            log::warn!(
                "processing large file ({} bytes, limit: {} bytes)",
                file_size,
                global.max_size
            );
        }
    }

    Ok(fs::read(file_path)?)
}

/// Writes to a file, or to stdout when no path is given.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
