use crate::option;
use crate::types::{PyClassInit, UnwrapError, hash_ranked, richcmp_ranked};
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    pyclass::CompareOp,
    types::{PyIterator, PyTuple},
};

const OK_RANK: u8 = 0;
const ERR_RANK: u8 = 1;

/// Wraps `value` in a fresh `Ok`.
#[inline]
pub fn ok(py: Python<'_>, value: Py<PyAny>) -> PyResult<Py<PyAny>> {
    Ok(PyOk::new(value).init(py)?.into_any())
}

/// Wraps `error` in a fresh `Err`.
#[inline]
pub fn err(py: Python<'_>, error: Py<PyAny>) -> PyResult<Py<PyAny>> {
    Ok(PyErr::new(error).init(py)?.into_any())
}

fn ranked<'py>(obj: &Bound<'py, PyAny>) -> Option<(u8, Option<Bound<'py, PyAny>>)> {
    let py = obj.py();
    if let Ok(ok_ref) = obj.cast::<PyOk>() {
        Some((OK_RANK, Some(ok_ref.get().ok_value.bind(py).clone())))
    } else if let Ok(err_ref) = obj.cast::<PyErr>() {
        Some((ERR_RANK, Some(err_ref.get().err_value.bind(py).clone())))
    } else {
        None
    }
}

#[pyclass(frozen, name = "Result", module = "monads", generic, subclass)]
pub struct ResultBase;

/// Ok(ok_value) - Result variant containing a success value
#[pyclass(frozen, name = "Ok", module = "monads", generic, extends = ResultBase)]
pub struct PyOk {
    #[pyo3(get)]
    pub ok_value: Py<PyAny>,
}

#[pymethods]
impl PyOk {
    #[classattr]
    fn __match_args__() -> (&'static str,) {
        ("ok_value",)
    }

    #[new]
    pub fn new(ok_value: Py<PyAny>) -> PyClassInitializer<Self> {
        PyClassInitializer::from(ResultBase).add_subclass(PyOk { ok_value })
    }

    fn is_ok(&self) -> bool {
        true
    }

    fn is_err(&self) -> bool {
        false
    }

    #[pyo3(signature = (f, /))]
    fn is_ok_and(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.ok_value,))?.unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn is_err_and(&self, _f: &Bound<'_, PyAny>) -> bool {
        false
    }

    fn ok(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        option::some(py, self.ok_value.clone_ref(py))
    }

    fn err(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        option::null(py)
    }

    #[pyo3(signature = (f, /))]
    fn map(&self, py: Python<'_>, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        ok(py, f.call1((&self.ok_value,))?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn map_into(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.ok_value,))?.unbind())
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (f, /, default))]
    fn map_or(&self, f: &Bound<'_, PyAny>, default: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.ok_value,))?.unbind())
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (f, /, default))]
    fn map_or_else(
        &self,
        f: &Bound<'_, PyAny>,
        default: &Bound<'_, PyAny>,
    ) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.ok_value,))?.unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn map_err(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (_f, /))]
    fn map_err_into(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (f, /))]
    fn inspect(slf: &Bound<'_, Self>, f: &Bound<'_, PyAny>) -> PyResult<Py<Self>> {
        f.call1((&slf.get().ok_value,))?;
        Ok(slf.clone().unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn inspect_err(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (msg = None))]
    fn unwrap(&self, py: Python<'_>, msg: Option<String>) -> Py<PyAny> {
        self.ok_value.clone_ref(py)
    }

    #[pyo3(signature = (msg = None))]
    fn unwrap_err(&self, msg: Option<String>) -> PyResult<Py<PyAny>> {
        Err(UnwrapError::new_err(
            msg.unwrap_or_else(|| "unwrap_err on Ok".to_owned()),
        ))
    }

    #[pyo3(signature = (_default, /))]
    fn unwrap_or(&self, py: Python<'_>, _default: &Bound<'_, PyAny>) -> Py<PyAny> {
        self.ok_value.clone_ref(py)
    }

    #[pyo3(signature = (_f, /))]
    fn unwrap_or_else(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> Py<PyAny> {
        self.ok_value.clone_ref(py)
    }

    fn flatten(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let inner = self.ok_value.bind(py);
        if inner.is_instance_of::<ResultBase>() {
            Ok(inner.clone().unbind())
        } else {
            Err(PyTypeError::new_err(format!(
                "expected a Result, got {}",
                inner.get_type().name()?
            )))
        }
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        PyTuple::new(py, [&self.ok_value])?.try_iter()
    }

    fn __bool__(&self) -> bool {
        true
    }

    fn __richcmp__(
        &self,
        py: Python<'_>,
        other: &Bound<'_, PyAny>,
        op: CompareOp,
    ) -> PyResult<Py<PyAny>> {
        richcmp_ranked(
            py,
            (OK_RANK, Some(self.ok_value.bind(py))),
            ranked(other),
            op,
        )
    }

    fn __hash__(&self, py: Python<'_>) -> PyResult<isize> {
        hash_ranked(py, OK_RANK, Some(&self.ok_value))
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let value_repr = self.ok_value.bind(py).repr()?;
        Ok(format!("Ok({})", value_repr))
    }
}

/// Err(err_value) - Result variant containing an error value
#[pyclass(frozen, name = "Err", module = "monads", generic, extends = ResultBase)]
pub struct PyErr {
    #[pyo3(get)]
    pub err_value: Py<PyAny>,
}

#[pymethods]
impl PyErr {
    #[classattr]
    fn __match_args__() -> (&'static str,) {
        ("err_value",)
    }

    #[new]
    pub fn new(err_value: Py<PyAny>) -> PyClassInitializer<Self> {
        PyClassInitializer::from(ResultBase).add_subclass(PyErr { err_value })
    }

    fn is_ok(&self) -> bool {
        false
    }

    fn is_err(&self) -> bool {
        true
    }

    #[pyo3(signature = (_f, /))]
    fn is_ok_and(&self, _f: &Bound<'_, PyAny>) -> bool {
        false
    }

    #[pyo3(signature = (f, /))]
    fn is_err_and(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.err_value,))?.unbind())
    }

    fn ok(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        option::null(py)
    }

    fn err(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        option::some(py, self.err_value.clone_ref(py))
    }

    #[pyo3(signature = (_f, /))]
    fn map(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (_f, /))]
    fn map_into(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (_f, /, default))]
    fn map_or(&self, _f: &Bound<'_, PyAny>, default: Py<PyAny>) -> Py<PyAny> {
        default
    }

    #[pyo3(signature = (_f, /, default))]
    fn map_or_else(
        &self,
        _f: &Bound<'_, PyAny>,
        default: &Bound<'_, PyAny>,
    ) -> PyResult<Py<PyAny>> {
        Ok(default.call0()?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn map_err(&self, py: Python<'_>, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        err(py, f.call1((&self.err_value,))?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn map_err_into(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.err_value,))?.unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn inspect(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (f, /))]
    fn inspect_err(slf: &Bound<'_, Self>, f: &Bound<'_, PyAny>) -> PyResult<Py<Self>> {
        f.call1((&slf.get().err_value,))?;
        Ok(slf.clone().unbind())
    }

    #[pyo3(signature = (msg = None))]
    fn unwrap(&self, msg: Option<String>) -> PyResult<Py<PyAny>> {
        Err(UnwrapError::new_err(
            msg.unwrap_or_else(|| "unwrap on Err".to_owned()),
        ))
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (msg = None))]
    fn unwrap_err(&self, py: Python<'_>, msg: Option<String>) -> Py<PyAny> {
        self.err_value.clone_ref(py)
    }

    #[pyo3(signature = (default, /))]
    fn unwrap_or(&self, default: Py<PyAny>) -> Py<PyAny> {
        default
    }

    #[pyo3(signature = (f, /))]
    fn unwrap_or_else(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call0()?.unbind())
    }

    fn flatten(slf: &Bound<'_, Self>) -> Py<Self> {
        slf.clone().unbind()
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        PyTuple::empty(py).try_iter()
    }

    fn __bool__(&self) -> bool {
        false
    }

    fn __richcmp__(
        &self,
        py: Python<'_>,
        other: &Bound<'_, PyAny>,
        op: CompareOp,
    ) -> PyResult<Py<PyAny>> {
        richcmp_ranked(
            py,
            (ERR_RANK, Some(self.err_value.bind(py))),
            ranked(other),
            op,
        )
    }

    fn __hash__(&self, py: Python<'_>) -> PyResult<isize> {
        hash_ranked(py, ERR_RANK, Some(&self.err_value))
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let error_repr = self.err_value.bind(py).repr()?;
        Ok(format!("Err({})", error_repr))
    }
}
