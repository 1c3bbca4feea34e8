//! CLI command for PAK extraction

use std::path::Path;
use std::sync::Once;
use std::time::Instant;

use crate::cli::progress::{DOCUMENT, LOOKING_GLASS, PACKAGE, print_done, print_step, simple_bar};
use crate::pak::{ExtractionOptions, ExtractionReport, PakOperations, PakPhase, PakProgress};

pub fn execute(
    source: &Path,
    destination: &Path,
    listing: bool,
    parallel: bool,
    progress: bool,
) -> anyhow::Result<()> {
    let mut options = ExtractionOptions::for_archive(source)
        .with_output_dir(destination)
        .with_parallel(parallel);
    if !listing {
        options = options.with_listing(None);
    }

    let started = Instant::now();

    let report = if progress {
        let pb = simple_bar(0);
        let extracting = Once::new();

        let report = PakOperations::extract(source, &options, &|p: &PakProgress| match p.phase {
            PakPhase::ReadingHeader => {
                pb.suspend(|| print_step(1, 3, LOOKING_GLASS, &format!("Reading {}...", source.display())));
            }
            PakPhase::WritingListing => {
                if let Some(path) = &options.listing_path {
                    pb.suspend(|| print_step(2, 3, DOCUMENT, &format!("Writing {}...", path.display())));
                }
            }
            PakPhase::DecompressingFiles => {
                extracting.call_once(|| {
                    pb.suspend(|| {
                        print_step(
                            3,
                            3,
                            PACKAGE,
                            &format!("Extracting {} files to {}...", p.total, destination.display()),
                        );
                    });
                    pb.set_length(p.total as u64);
                });
                pb.set_position(p.current as u64);
                if let Some(name) = &p.current_file {
                    pb.set_message(name.clone());
                }
            }
            PakPhase::ReadingTable | PakPhase::Complete => {}
        })?;

        pb.finish_and_clear();
        report
    } else {
        PakOperations::extract(source, &options, &|_| {})?
    };

    print_summary(&report, progress);
    if progress {
        print_done(started.elapsed());
    }

    Ok(())
}

/// Print counts, then every skipped entry with its reason
fn print_summary(report: &ExtractionReport, verbose: bool) {
    if verbose {
        println!(
            "Extracted {} of {} files ({} empty, {} skipped)",
            report.extracted.len(),
            report.total,
            report.skipped_empty.len(),
            report.failures.len()
        );
    }

    if !report.is_complete() {
        eprintln!("{} entries could not be extracted:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.path, failure.error);
        }
    }
}
