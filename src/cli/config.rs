use rhakimi::{Table, TableRegistry};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::args::TableArgs;
use super::global::GlobalArgs;

/// Resolves the table from command-line selection, falling back to the
/// configured default.
///
/// Precedence: `--chars`, `--table-file`, `--table`, `settings.default_table`.
pub fn resolve_table(
    args: &TableArgs,
    config: &TableRegistry,
) -> Result<Table, Box<dyn std::error::Error>> {
    if let Some(chars) = &args.chars {
        return Ok(chars.parse()?);
    }

    if let Some(path) = &args.table_file {
        return Ok(read_table_file(path)?.parse()?);
    }

    let name = args
        .table
        .as_deref()
        .or(config.settings.default_table.as_deref())
        .ok_or("no table selected; pass --table, --chars or --table-file")?;

    tracing::debug!(table = name, "using named table");
    Ok(config.table(name)?)
}

/// Reads table characters from a file, ignoring the trailing line break.
fn read_table_file(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    let content = fs::read_to_string(&expanded)
        .map_err(|e| format!("Cannot read table file '{}': {}", expanded.display(), e))?;
    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}

/// Reads UTF-8 input from a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        check_file_size(file_path, global)?;
        return fs::read_to_string(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e).into());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use a file with --force for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

fn check_file_size(file_path: &Path, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 {
        return Ok(());
    }

    let file_size = fs::metadata(file_path)?.len() as usize;
    if file_size <= global.max_size {
        return Ok(());
    }

    if global.force {
        tracing::warn!(
            file_size,
            limit = global.max_size,
            "processing file larger than --max-size"
        );
        Ok(())
    } else {
        Err(format!(
            "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            file_size, global.max_size
        )
        .into())
    }
}

/// Writes to the output file if given, otherwise to stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, content)
            .map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
