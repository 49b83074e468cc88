use std::io::{BufWriter, Result, Write};

/// Writes one label per line and flushes once at the end.
pub fn write_labels<W, I, S>(writer: W, labels: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(writer);
    let mut written = 0;
    for label in labels {
        writeln!(out, "{}", label.as_ref())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
