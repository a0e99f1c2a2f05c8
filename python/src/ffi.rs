//! Thin PyO3 surface over `lzw_text_core`.
//!
//! Every call builds its codec from the encoding and algorithm names the
//! service layer stores beside each blob. Codec work runs with the GIL
//! released.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use lzw_text_core::compression::{compress_batch as core_compress_batch, registry, Codec, CompressionStats, TextCodec};
use lzw_text_core::config::CodecConfig;
use lzw_text_core::types::CodecError;

fn to_py_err(e: CodecError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn build_codec(encoding: &str, algorithm: &str) -> Result<TextCodec, CodecError> {
    let info = registry::resolve(algorithm)?;
    let config = CodecConfig::for_encoding(encoding)?.with_variant(info.variant);
    TextCodec::new(config)
}

/// Keys match the serde field names of `CompressionStats`.
fn stats_dict<'py>(py: Python<'py>, stats: &CompressionStats) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("original_size", stats.original_size)?;
    dict.set_item("compressed_size", stats.compressed_size)?;
    dict.set_item("ratio_percent", stats.ratio_percent)?;
    dict.set_item("bytes_saved", stats.bytes_saved)?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (text, encoding = "utf-8", algorithm = "hybrid-lzw"))]
fn compress<'py>(py: Python<'py>, text: &str, encoding: &str, algorithm: &str) -> PyResult<Bound<'py, PyBytes>> {
    let codec = build_codec(encoding, algorithm).map_err(to_py_err)?;
    let bytes = py.allow_threads(|| codec.compress(text)).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &bytes))
}

#[pyfunction]
#[pyo3(signature = (data, encoding = "utf-8", algorithm = "hybrid-lzw"))]
fn decompress(py: Python<'_>, data: &[u8], encoding: &str, algorithm: &str) -> PyResult<String> {
    let codec = build_codec(encoding, algorithm).map_err(to_py_err)?;
    py.allow_threads(|| codec.decompress(data)).map_err(to_py_err)
}

/// Size statistics for `original` against `compressed`.
#[pyfunction]
#[pyo3(signature = (original, compressed, encoding = "utf-8"))]
fn compression_stats<'py>(
    py: Python<'py>,
    original: &str,
    compressed: &[u8],
    encoding: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let codec = TextCodec::with_encoding(encoding).map_err(to_py_err)?;
    stats_dict(py, &codec.stats(original, compressed))
}

/// Compress several documents in parallel.
///
/// Returns `(frames, aggregate_stats)`; raises on the first failed document.
#[pyfunction]
#[pyo3(signature = (texts, encoding = "utf-8", algorithm = "hybrid-lzw", workers = None))]
fn compress_batch<'py>(
    py: Python<'py>,
    texts: Vec<String>,
    encoding: &str,
    algorithm: &str,
    workers: Option<usize>,
) -> PyResult<(Vec<Bound<'py, PyBytes>>, Bound<'py, PyDict>)> {
    let codec = build_codec(encoding, algorithm).map_err(to_py_err)?;
    let outcome = py.allow_threads(|| core_compress_batch(&codec, &texts, workers));

    let mut frames = Vec::with_capacity(outcome.items.len());
    for (index, item) in outcome.items.into_iter().enumerate() {
        let bytes = item.map_err(|e| PyValueError::new_err(format!("document {}: {}", index, e)))?;
        frames.push(PyBytes::new_bound(py, &bytes));
    }
    Ok((frames, stats_dict(py, &outcome.aggregate)?))
}

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compress, m)?)?;
    m.add_function(wrap_pyfunction!(decompress, m)?)?;
    m.add_function(wrap_pyfunction!(compression_stats, m)?)?;
    m.add_function(wrap_pyfunction!(compress_batch, m)?)?;
    Ok(())
}
