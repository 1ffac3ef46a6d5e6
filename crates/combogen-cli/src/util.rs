use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

/// Reads and deserializes a JSON file, with the file kind in error context.
pub(crate) fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;
    Ok(value)
}

/// Serializes a value as pretty JSON to the given file.
pub(crate) fn write_json_file<T, P>(value: &T, path: P) -> anyhow::Result<()>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .with_context(|| format!("Failed to write newline after JSON to {}", path.display()))?;
    Ok(())
}

/// Prints labeled counts as a `#`-bar histogram.
pub(crate) fn print_histogram<I, S>(data: I)
where
    I: Iterator<Item = (S, usize)>,
    S: fmt::Display,
{
    let data: Vec<_> = data.collect();
    let max_count = data.iter().map(|&(_, c)| c).max().unwrap_or(1).max(1);
    let max_bar_width = 50;
    for (label, count) in &data {
        let bar_width = (count * max_bar_width) / max_count;
        println!("{:>48} | {:<6} {}", label, count, "#".repeat(bar_width));
    }
}
