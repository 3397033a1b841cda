use crate::output::OutputRecord;
use std::io::Write;

/// Writes [`OutputRecord`]s as newline-terminated CSV lines
///
/// Each line is flushed as soon as it is written so that completed results
/// become visible while later domains are still in flight.
pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one record followed by `\n`
    pub fn write_record(&mut self, record: &OutputRecord) -> std::io::Result<()> {
        writeln!(self.inner, "{}", record.to_csv_line())?;
        self.inner.flush()
    }
}
