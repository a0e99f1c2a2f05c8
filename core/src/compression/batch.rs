//! compression/batch.rs
//! Many documents per call, spread over scoped worker threads.
//!
//! Layout mirrors a classic worker pool:
//! - a bounded job channel feeds `(index, &doc)` pairs to the workers;
//! - each worker runs the codec and sends `(index, result)` back;
//! - results are slotted back into input order once every worker has joined.
//!
//! A failed document is logged and reported in its slot; it never aborts the
//! rest of the batch.

use crossbeam::channel;
use crossbeam::thread;
use log::{debug, error};

use crate::compression::stats::{CompressionReport, CompressionStats};
use crate::compression::types::Codec;
use crate::telemetry::{CodecCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::CodecError;

/// Per-document results in input order, plus batch-wide numbers.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub items: Vec<Result<T, CodecError>>,
    /// Aggregate over successful documents only.
    pub aggregate: CompressionStats,
    pub telemetry: TelemetrySnapshot,
}

impl<T> BatchOutcome<T> {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }
}

/// Worker count for `items` documents: the requested count, or one less than
/// the number of cores, never zero and never more than there are documents.
pub fn resolve_workers(requested: Option<usize>, items: usize) -> usize {
    let wanted = requested.unwrap_or_else(|| num_cpus::get().saturating_sub(1));
    wanted.max(1).min(items.max(1))
}

/// Run `f` over `items` on `workers` scoped threads; results keep input order.
fn run_batch<I, T, F>(items: &[I], workers: usize, f: F) -> Vec<Result<T, CodecError>>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> Result<T, CodecError> + Sync,
{
    let (job_tx, job_rx) = channel::bounded::<(usize, &I)>(workers * 2);
    let (res_tx, res_rx) = channel::unbounded::<(usize, Result<T, CodecError>)>();
    let f = &f;

    let joined = thread::scope(|s| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let res_tx = res_tx.clone();
            s.spawn(move |_| {
                while let Ok((index, item)) = job_rx.recv() {
                    if res_tx.send((index, f(item))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);

        for job in items.iter().enumerate() {
            // Every worker gone: remaining slots surface as `WorkerLost`.
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);
    });
    if joined.is_err() {
        error!("batch worker panicked; unfinished documents are reported as lost");
    }
    drop(res_tx);

    let mut slots: Vec<Option<Result<T, CodecError>>> = (0..items.len()).map(|_| None).collect();
    for (index, result) in res_rx.iter() {
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.unwrap_or(Err(CodecError::WorkerLost { index })))
        .collect()
}

/// Compress every document; one frame (or error) per document, in order.
pub fn compress_batch<C, S>(codec: &C, docs: &[S], workers: Option<usize>) -> BatchOutcome<Vec<u8>>
where
    C: Codec,
    S: AsRef<str> + Sync,
{
    let mut timer = TelemetryTimer::new();
    let workers = resolve_workers(workers, docs.len());
    debug!("compress batch: {} documents on {} workers", docs.len(), workers);

    let results = run_batch(docs, workers, |doc| codec.compress_with_report(doc.as_ref()));

    let mut counters = CodecCounters::default();
    let mut items = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok((bytes, report)) => {
                record_compressed(&mut counters, &mut timer, &report);
                items.push(Ok(bytes));
            }
            Err(e) => {
                error!("compress batch: document {} failed: {}", index, e);
                counters.add_failure();
                items.push(Err(e));
            }
        }
    }

    finish(items, counters, timer)
}

/// Decompress every frame; one text (or error) per frame, in order.
pub fn decompress_batch<C, B>(codec: &C, frames: &[B], workers: Option<usize>) -> BatchOutcome<String>
where
    C: Codec,
    B: AsRef<[u8]> + Sync,
{
    let mut timer = TelemetryTimer::new();
    let workers = resolve_workers(workers, frames.len());
    debug!("decompress batch: {} frames on {} workers", frames.len(), workers);

    // Sized against the reconstructed (canonical) text, not the caller's original.
    let results = run_batch(frames, workers, |frame| {
        let frame = frame.as_ref();
        codec.decompress_timed(frame).map(|(text, times)| {
            let stats = codec.stats(&text, frame);
            (text, stats, times)
        })
    });

    let mut counters = CodecCounters::default();
    let mut items = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok((text, stats, times)) => {
                counters.add_decompressed(&stats);
                timer.add_stage_times(&times);
                items.push(Ok(text));
            }
            Err(e) => {
                error!("decompress batch: frame {} failed: {}", index, e);
                counters.add_failure();
                items.push(Err(e));
            }
        }
    }

    finish(items, counters, timer)
}

fn record_compressed(counters: &mut CodecCounters, timer: &mut TelemetryTimer, report: &CompressionReport) {
    counters.add_compressed(report);
    timer.add_stage_times(&report.stage_times);
}

fn finish<T>(items: Vec<Result<T, CodecError>>, counters: CodecCounters, mut timer: TelemetryTimer) -> BatchOutcome<T> {
    timer.finish();
    let telemetry = TelemetrySnapshot::from(&counters, &timer);
    BatchOutcome { items, aggregate: telemetry.stats, telemetry }
}
