//! Pure functions tools for converting into `Option` & `Result`
use crate::option::{self, PyNull, PySome};
use crate::result::{self, PyOk};
use crate::types::{ExceptionKinds, UnwrapError};
use log::{debug, trace};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyTuple};

enum CatchState {
    Idle,
    Assigned(Py<PyAny>),
    Caught(Py<PyAny>),
}

/// Context manager catching exceptions into a `Result`.
///
/// ```python
/// with CatchResult(ValueError) as catch:
///     catch.assign(int("12345"))
///
/// catch.result  # Ok(12345)
/// ```
///
/// Exceptions of a watched kind leaving the block are captured and
/// suppressed; any other exception propagates unchanged.
#[pyclass(name = "CatchResult", module = "monads")]
pub struct CatchResult {
    kinds: ExceptionKinds,
    state: CatchState,
}

#[pymethods]
impl CatchResult {
    #[new]
    #[pyo3(signature = (*excs))]
    fn new(excs: &Bound<'_, PyTuple>) -> PyResult<Self> {
        Ok(CatchResult {
            kinds: ExceptionKinds::from_tuple(excs)?,
            state: CatchState::Idle,
        })
    }

    #[getter]
    fn excs<'py>(&self, py: Python<'py>) -> Bound<'py, PyTuple> {
        self.kinds.as_tuple(py).clone()
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    #[pyo3(signature = (_exc_type, exc, _traceback))]
    fn __exit__(
        &mut self,
        _exc_type: &Bound<'_, PyAny>,
        exc: &Bound<'_, PyAny>,
        _traceback: &Bound<'_, PyAny>,
    ) -> PyResult<bool> {
        if exc.is_none() || !self.kinds.contains(exc)? {
            return Ok(false);
        }
        debug!("CatchResult captured {}", exc.get_type().name()?);
        self.state = CatchState::Caught(exc.clone().unbind());
        Ok(true)
    }

    /// Record the successful outcome of the protected block.
    #[pyo3(signature = (value, /))]
    fn assign(&mut self, value: Py<PyAny>) {
        self.state = CatchState::Assigned(value);
    }

    #[getter]
    fn result(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match &self.state {
            CatchState::Caught(exc) => result::err(py, exc.clone_ref(py)),
            CatchState::Assigned(value) => result::ok(py, value.clone_ref(py)),
            CatchState::Idle => Err(UnwrapError::new_err(
                "No exception caught and assign not called",
            )),
        }
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let state = match &self.state {
            CatchState::Idle => "idle",
            CatchState::Assigned(_) => "assigned",
            CatchState::Caught(_) => "caught",
        };
        Ok(format!(
            "CatchResult({}, {})",
            self.kinds.as_tuple(py).repr()?,
            state
        ))
    }
}

/// Run callable `(...) -> T`, return `Ok[T]` on success, or `Err[Exception]` on a watched exception.
#[pyfunction]
#[pyo3(signature = (f, exc, /, *args, **kwargs))]
pub fn try_result(
    f: &Bound<'_, PyAny>,
    exc: &Bound<'_, PyAny>,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<Py<PyAny>> {
    let py = f.py();
    let kinds = ExceptionKinds::new(exc)?;
    match f.call(args, kwargs) {
        Ok(value) => result::ok(py, value.unbind()),
        Err(error) if kinds.matches(py, &error) => {
            debug!("try_result captured {}", error.get_type(py).name()?);
            result::err(py, error.into_value(py).into_any())
        }
        Err(error) => Err(error),
    }
}

/// Run callable `(...) -> T`, return `Some[T]` on success, or `Null` on a watched exception.
#[pyfunction]
#[pyo3(signature = (f, exc, /, *args, **kwargs))]
pub fn try_option(
    f: &Bound<'_, PyAny>,
    exc: &Bound<'_, PyAny>,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<Py<PyAny>> {
    let py = f.py();
    let kinds = ExceptionKinds::new(exc)?;
    match f.call(args, kwargs) {
        Ok(value) => option::some(py, value.unbind()),
        Err(error) if kinds.matches(py, &error) => {
            debug!("try_option discarded {}", error.get_type(py).name()?);
            option::null(py)
        }
        Err(error) => Err(error),
    }
}

/// Turn `T | None` into `Option[T]`.
#[pyfunction]
#[pyo3(signature = (obj, /))]
pub fn from_none(obj: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    option::from_value(obj)
}

/// `Some(list)` of every contained value, or `Null` at the first `Null`.
#[pyfunction]
#[pyo3(signature = (options, /))]
pub fn collect_options(options: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    let py = options.py();
    let values = PyList::empty(py);
    for (index, item) in options.try_iter()?.enumerate() {
        let item = item?;
        if let Ok(some_ref) = item.cast::<PySome>() {
            values.append(&some_ref.get().value)?;
        } else if item.is_instance_of::<PyNull>() {
            trace!("collect_options stopped at Null (index {index})");
            return option::null(py);
        } else {
            return Err(PyTypeError::new_err(format!(
                "collect_options expects Option items, got {}",
                item.get_type().name()?
            )));
        }
    }
    option::some(py, values.into_any().unbind())
}

/// `Ok(list)` of every success value, or the first `Err` as-is.
#[pyfunction]
#[pyo3(signature = (results, /))]
pub fn collect_results(results: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    let py = results.py();
    let values = PyList::empty(py);
    for (index, item) in results.try_iter()?.enumerate() {
        let item = item?;
        if let Ok(ok_ref) = item.cast::<PyOk>() {
            values.append(&ok_ref.get().ok_value)?;
        } else if item.is_instance_of::<result::PyErr>() {
            trace!("collect_results stopped at Err (index {index})");
            return Ok(item.unbind());
        } else {
            return Err(PyTypeError::new_err(format!(
                "collect_results expects Result items, got {}",
                item.get_type().name()?
            )));
        }
    }
    result::ok(py, values.into_any().unbind())
}
