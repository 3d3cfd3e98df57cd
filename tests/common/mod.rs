#![allow(dead_code)]

use pyo3::prelude::*;
use pyo3::PyTypeInfo;
use pyo3::types::{PyDict, PyModule};

/// Builds a fresh `monads` module and publishes it in `sys.modules`.
pub fn monads(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let module = PyModule::new(py, "monads")?;
    monads::init_module(&module)?;
    py.import("sys")?
        .getattr("modules")?
        .set_item("monads", &module)?;
    Ok(module)
}

/// Executes `source` (dedented) with every `monads` name in scope.
///
/// Returns the namespace so tests can pull values back out.
pub fn run<'py>(py: Python<'py>, source: &str) -> PyResult<Bound<'py, PyDict>> {
    monads(py)?;
    let namespace = PyDict::new(py);
    namespace.set_item("__source", source)?;
    py.run(
        c"import textwrap\nfrom monads import *\nexec(textwrap.dedent(__source))",
        Some(&namespace),
        None,
    )?;
    Ok(namespace)
}

/// Evaluates a single expression with every `monads` name in scope.
pub fn eval<'py>(py: Python<'py>, expr: &str) -> PyResult<Bound<'py, PyAny>> {
    let namespace = run(py, &format!("__value = {expr}"))?;
    namespace.as_any().get_item("__value")
}

/// Asserts that running `source` raises an exception of type `T`.
pub fn assert_raises<T: PyTypeInfo>(py: Python<'_>, source: &str) -> PyErr {
    let err = match run(py, source) {
        Ok(_) => panic!("expected {} from:\n{source}", std::any::type_name::<T>()),
        Err(err) => err,
    };
    assert!(
        err.is_instance_of::<T>(py),
        "expected {}, got {err}",
        std::any::type_name::<T>()
    );
    err
}
