use std::{io::Write, path::Path};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::{config::Config, histogram::CovHist, io::get_next_line};

/// Read per base coverage data from p, building the coverage histogram.
/// Any malformed line aborts the run.
fn read_coverage(p: &Path) -> anyhow::Result<CovHist> {
    trace!("Opening coverage file {} for reading", p.display());
    let mut rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open coverage file {}", p.display()))?;
    trace!("Reading from {}", p.display());

    let mut hist = CovHist::new();
    let mut buf = String::new();
    let mut line = 0;

    while let Some(fields) = get_next_line(&mut rdr, &mut buf)
        .with_context(|| format!("Error after reading {} lines from {}", line, p.display()))?
    {
        line += 1;
        if fields.len() != 3 {
            return Err(anyhow!(
                "{}:{} Expected 3 fields (contig, position, coverage); found {}",
                p.display(),
                line,
                fields.len()
            ));
        }
        let z = fields[2]
            .parse::<f64>()
            .with_context(|| format!("{}:{} Error reading coverage", p.display(), line))?;
        if !z.is_finite() {
            return Err(anyhow!(
                "{}:{} Coverage value '{}' is not finite",
                p.display(),
                line,
                fields[2]
            ));
        }
        hist.add(z)
    }
    debug!("Read {} lines from {}", line, p.display());
    Ok(hist)
}

/// Write out histogram sorted by ascending coverage
fn write_hist(hist: &CovHist, output: Option<&Path>) -> anyhow::Result<()> {
    let mut wrt = CompressIo::new()
        .opt_path(output)
        .bufwriter()
        .with_context(|| "Failed to open output file")?;

    writeln!(wrt, "coverage\tbases_covered")?;
    for (cov, n) in hist.iter() {
        writeln!(wrt, "{}\t{}", cov, n)?
    }
    Ok(())
}

pub fn process_coverage(cfg: &Config) -> anyhow::Result<()> {
    let hist = read_coverage(cfg.coverage_file())?;
    debug!("Histogram built from {} positions", hist.total());
    write_hist(&hist, cfg.output_file())
}
