//! lzw-text-python
//!
//! Python bindings for lzw-text-core (PyO3).

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn lzw_text(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Honours RUST_LOG; a host that already installed a logger keeps it.
    let _ = env_logger::try_init();
    ffi::register(py, m)?;
    log::debug!("lzw_text module initialised");
    Ok(())
}
