//! Validate command - run the batch validation pass over a survey file.
//!
//! The file is parsed up front; the validation pass then runs on a
//! blocking worker thread while this task consumes its event stream and
//! renders it: status lines to stdout, a rewritten progress percentage to
//! stderr. Ctrl-C cancels cooperatively between records.

use std::fs::File;
use std::path::Path;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;
use geovalid::record::RecordParser;
use geovalid::survey::SurveyRecord;
use geovalid::validator::{BatchValidator, ChannelSink, ValidationEvent};

/// Run the validate command.
pub fn run(file: &Path, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("validate");

    let handle = File::open(file).map_err(|e| CliError::FileRead {
        path: file.display().to_string(),
        error: e,
    })?;
    let records = RecordParser::read_all(handle)?;

    info!(
        file = %file.display(),
        records = records.len(),
        "Survey file parsed"
    );
    println!("Processing file: {}", file.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(run_validation(records))
}

/// Drive the validation worker and render its event stream.
async fn run_validation(records: Vec<SurveyRecord>) -> Result<(), CliError> {
    let cancel = CancellationToken::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let token = cancel.clone();
    let worker = tokio::task::spawn_blocking(move || {
        let mut sink = ChannelSink::new(tx);
        BatchValidator::with_cancellation(token).run(&records, &mut sink);
    });

    let mut interrupted = false;
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(ValidationEvent::Status(line)) => println!("{}", line),
                Some(ValidationEvent::Progress { completed, total }) => {
                    render_progress(completed, total);
                }
                // Worker dropped its sink: the pass is over
                None => break,
            },
            _ = tokio::signal::ctrl_c(), if !interrupted => {
                interrupted = true;
                cancel.cancel();
                eprintln!();
                eprintln!("Interrupted - stopping after the current record");
            }
        }
    }

    worker.await.map_err(|_| CliError::ValidationWorker)?;

    eprintln!();
    if interrupted {
        println!("Validation interrupted.");
    } else {
        println!("Finished processing file.");
    }

    Ok(())
}

/// Rewrite the progress line in place on stderr.
///
/// Progress goes to stderr so piping stdout yields clean verdict lines.
fn render_progress(completed: u64, total: u64) {
    if total == 0 {
        return;
    }

    let percent = completed * 100 / total;
    eprint!("\rProgress: {:>3}% ({}/{})", percent, completed, total);
}
