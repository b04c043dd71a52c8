//! CSV rendering of completion records.
//!
//! Columns: `PID,PRIORITY_INIT,PRIORITY_FINAL,TIME_REQUIRED,START_TIME,END_TIME`.
//! One row per record, in the order given (completion order for records
//! straight out of a simulation).

use std::io::{self, Write};

use crate::models::CompletionRecord;
use crate::scheduler::CompletionSink;

/// Header row, without the trailing newline.
pub const CSV_HEADER: &str = "PID,PRIORITY_INIT,PRIORITY_FINAL,TIME_REQUIRED,START_TIME,END_TIME";

/// Writes the header and one row per record.
pub fn write_csv<W: Write>(writer: &mut W, records: &[CompletionRecord]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        write_row(writer, record)?;
    }
    Ok(())
}

/// Renders the header and rows into a string.
///
/// ```
/// use mlfq_sim::models::JobSpec;
/// use mlfq_sim::report::to_csv;
/// use mlfq_sim::scheduler::{simulate, SimConfig};
///
/// let records = simulate(&SimConfig::new(10, 15, 2), [JobSpec::new(0, 15)]).unwrap();
/// assert_eq!(to_csv(&records).lines().nth(1), Some("0,0,0,15,0,15"));
/// ```
pub fn to_csv(records: &[CompletionRecord]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(&mut out, records);
    String::from_utf8_lossy(&out).into_owned()
}

fn write_row<W: Write>(writer: &mut W, r: &CompletionRecord) -> io::Result<()> {
    writeln!(
        writer,
        "{},{},{},{},{},{}",
        r.pid, r.initial_priority, r.final_priority, r.time_required, r.start_time, r.end_time
    )
}

/// Sink that streams rows to a writer as processes finish.
///
/// The simulation cannot observe I/O failures, so the first write error is
/// kept and returned by [`CsvSink::finish`]; later rows are dropped.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    /// Writes the header and returns the sink.
    pub fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "{CSV_HEADER}")?;
        Ok(Self {
            writer,
            error: None,
            rows: 0,
        })
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> CompletionSink for CsvSink<W> {
    fn complete(&mut self, record: CompletionRecord) {
        if self.error.is_some() {
            return;
        }
        match write_row(&mut self.writer, &record) {
            Ok(()) => self.rows += 1,
            Err(err) => {
                log::warn!("csv sink write failed, dropping further rows: {err}");
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;
    use crate::scheduler::{simulate, SimConfig, Simulation};

    fn reference_jobs() -> Vec<JobSpec> {
        vec![JobSpec::new(5, 50), JobSpec::new(7, 100), JobSpec::new(1, 100)]
    }

    #[test]
    fn test_to_csv_reference_scenario() {
        let records = simulate(&SimConfig::new(10, 15, 2), reference_jobs()).unwrap();
        let csv = to_csv(&records);
        assert_eq!(
            csv,
            "PID,PRIORITY_INIT,PRIORITY_FINAL,TIME_REQUIRED,START_TIME,END_TIME\n\
             0,5,2,50,0,50\n\
             2,1,0,100,65,180\n\
             1,7,1,100,30,250\n"
        );
    }

    #[test]
    fn test_to_csv_empty() {
        assert_eq!(to_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_csv_sink_matches_batch_output() {
        let config = SimConfig::new(10, 15, 2);
        let mut sim = Simulation::new(config, reference_jobs().into()).unwrap();
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sim.run(&mut sink);
        assert_eq!(sink.rows(), 3);

        let streamed = String::from_utf8(sink.finish().unwrap()).unwrap();
        let batch = to_csv(&simulate(&config, reference_jobs()).unwrap());
        assert_eq!(streamed, batch);
    }

    #[test]
    fn test_output_is_byte_identical_across_runs() {
        let config = SimConfig::new(3, 7, 3);
        let jobs: Vec<JobSpec> = (0..30)
            .map(|i| JobSpec::new(i % 3, 1 + (i as u64 * 13) % 40))
            .collect();
        let a = to_csv(&simulate(&config, jobs.clone()).unwrap());
        let b = to_csv(&simulate(&config, jobs).unwrap());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[derive(Debug)]
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("disk full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_csv_sink_keeps_first_error() {
        // Room for the header line only
        let budget = CSV_HEADER.len() + 1;
        let mut sink = CsvSink::new(FailingWriter { budget }).unwrap();
        let records = simulate(&SimConfig::new(10, 15, 2), reference_jobs()).unwrap();
        for record in records {
            sink.complete(record);
        }
        assert_eq!(sink.rows(), 0);
        let err = sink.finish().unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
