use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Shortest round-trip text for a real, always carrying a decimal point or an
/// exponent (`25.0`, `0.25`). Exponents are signed and at least two digits
/// wide (`1e-05`, `1.5e+20`).
pub fn format_real(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Like [`format_real`], but integral values drop the fractional part (`1`).
pub fn format_real_trimmed(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e16 {
        format!("{value:.0}")
    } else {
        format_real(value)
    }
}

pub fn join_lines<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncates `path` and writes each line followed by `\n`. Embedded newlines
/// inside a line are written untouched.
pub fn write_dataset_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Appends `content` to an existing file; never creates it.
pub fn append_to_existing(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
