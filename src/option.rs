use crate::result;
use crate::types::{PyClassInit, UnwrapError, hash_ranked, richcmp_ranked};
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    pyclass::CompareOp,
    sync::PyOnceLock,
    types::{PyIterator, PyTuple},
};

const NULL_RANK: u8 = 0;
const SOME_RANK: u8 = 1;

// Singleton for Null - initialized once per Python interpreter
static NULL_SINGLETON: PyOnceLock<Py<PyNull>> = PyOnceLock::new();

#[inline]
fn null_singleton(py: Python<'_>) -> PyResult<Py<PyNull>> {
    NULL_SINGLETON
        .get_or_try_init(py, || {
            PyClassInitializer::from(OptionBase)
                .add_subclass(PyNull)
                .init(py)
        })
        .map(|singleton| singleton.clone_ref(py))
}

/// The shared `Null` instance.
#[inline]
pub fn null(py: Python<'_>) -> PyResult<Py<PyAny>> {
    Ok(null_singleton(py)?.into_any())
}

/// Wraps `value` in a fresh `Some`.
#[inline]
pub fn some(py: Python<'_>, value: Py<PyAny>) -> PyResult<Py<PyAny>> {
    Ok(PySome::new(value).init(py)?.into_any())
}

/// `None` becomes `Null`, anything else `Some(value)`.
pub fn from_value(value: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    let py = value.py();
    if value.is_none() {
        null(py)
    } else {
        some(py, value.to_owned().unbind())
    }
}

/// Rank and payload of `obj` if it is an `Option`.
fn ranked<'py>(obj: &Bound<'py, PyAny>) -> Option<(u8, Option<Bound<'py, PyAny>>)> {
    if let Ok(some) = obj.cast::<PySome>() {
        Some((SOME_RANK, Some(some.get().value.bind(obj.py()).clone())))
    } else if obj.is_instance_of::<PyNull>() {
        Some((NULL_RANK, None))
    } else {
        None
    }
}

fn expect_option(obj: &Bound<'_, PyAny>) -> PyResult<()> {
    if obj.is_instance_of::<OptionBase>() {
        Ok(())
    } else {
        Err(PyTypeError::new_err(format!(
            "expected an Option, got {}",
            obj.get_type().name()?
        )))
    }
}

#[pyclass(frozen, name = "Option", module = "monads", generic, subclass)]
pub struct OptionBase;

#[pymethods]
impl OptionBase {
    #[new]
    fn new(value: &Bound<'_, PyAny>) -> PyResult<Py<OptionBase>> {
        let py = value.py();
        Ok(from_value(value)?
            .into_bound(py)
            .cast_into::<OptionBase>()?
            .unbind())
    }
}

/// Option variant holding a value
#[pyclass(frozen, name = "Some", module = "monads", generic, extends = OptionBase)]
pub struct PySome {
    #[pyo3(get)]
    pub value: Py<PyAny>,
}

#[pymethods]
impl PySome {
    #[classattr]
    fn __match_args__() -> (&'static str,) {
        ("value",)
    }

    #[new]
    pub fn new(value: Py<PyAny>) -> PyClassInitializer<Self> {
        PyClassInitializer::from(OptionBase).add_subclass(PySome { value })
    }

    fn is_some(&self) -> bool {
        true
    }

    fn is_null(&self) -> bool {
        false
    }

    #[pyo3(signature = (f, /))]
    fn is_some_and(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.value,))?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn is_null_or(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.value,))?.unbind())
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (msg = None))]
    fn unwrap(&self, py: Python<'_>, msg: Option<String>) -> Py<PyAny> {
        self.value.clone_ref(py)
    }

    #[pyo3(signature = (_default, /))]
    fn unwrap_or(&self, py: Python<'_>, _default: &Bound<'_, PyAny>) -> Py<PyAny> {
        self.value.clone_ref(py)
    }

    #[pyo3(signature = (_f, /))]
    fn unwrap_or_else(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> Py<PyAny> {
        self.value.clone_ref(py)
    }

    #[pyo3(signature = (f, /))]
    fn map(&self, py: Python<'_>, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        some(py, f.call1((&self.value,))?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn map_into(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.value,))?.unbind())
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (f, /, default))]
    fn map_or(&self, f: &Bound<'_, PyAny>, default: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.value,))?.unbind())
    }

    #[allow(unused_variables)]
    #[pyo3(signature = (f, /, default))]
    fn map_or_else(
        &self,
        f: &Bound<'_, PyAny>,
        default: &Bound<'_, PyAny>,
    ) -> PyResult<Py<PyAny>> {
        Ok(f.call1((&self.value,))?.unbind())
    }

    #[pyo3(signature = (f, /))]
    fn inspect(slf: &Bound<'_, Self>, f: &Bound<'_, PyAny>) -> PyResult<Py<Self>> {
        f.call1((&slf.get().value,))?;
        Ok(slf.clone().unbind())
    }

    #[pyo3(signature = (_err, /))]
    fn ok_or(&self, py: Python<'_>, _err: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        result::ok(py, self.value.clone_ref(py))
    }

    #[pyo3(signature = (_f, /))]
    fn ok_or_else(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        result::ok(py, self.value.clone_ref(py))
    }

    #[pyo3(signature = (other, /))]
    fn xor(slf: &Bound<'_, Self>, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        expect_option(other)?;
        if other.is_instance_of::<PyNull>() {
            Ok(slf.clone().into_any().unbind())
        } else {
            null(slf.py())
        }
    }

    #[pyo3(signature = (f, /))]
    fn filter(slf: &Bound<'_, Self>, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        if f.call1((&slf.get().value,))?.is_truthy()? {
            Ok(slf.clone().into_any().unbind())
        } else {
            null(slf.py())
        }
    }

    #[pyo3(signature = (other, /))]
    fn zip(&self, py: Python<'_>, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        expect_option(other)?;
        match other.cast::<PySome>() {
            Ok(other_some) => {
                let pair = PyTuple::new(py, [&self.value, &other_some.get().value])?;
                some(py, pair.into_any().unbind())
            }
            Err(_) => null(py),
        }
    }

    fn flatten(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let inner = self.value.bind(py);
        expect_option(inner)?;
        Ok(inner.clone().unbind())
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        PyTuple::new(py, [&self.value])?.try_iter()
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
            (SOME_RANK, Some(self.value.bind(py))),
            ranked(other),
            op,
        )
    }

    fn __hash__(&self, py: Python<'_>) -> PyResult<isize> {
        hash_ranked(py, SOME_RANK, Some(&self.value))
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let value_repr = self.value.bind(py).repr()?;
        Ok(format!("Some({})", value_repr))
    }
}

/// Option variant of no value; a single shared instance exists
#[pyclass(frozen, name = "Null", module = "monads", generic, extends = OptionBase)]
pub struct PyNull;

#[pymethods]
impl PyNull {
    #[new]
    fn new(py: Python<'_>) -> PyResult<Py<PyNull>> {
        null_singleton(py)
    }

    fn is_some(&self) -> bool {
        false
    }

    fn is_null(&self) -> bool {
        true
    }

    #[pyo3(signature = (_f, /))]
    fn is_some_and(&self, _f: &Bound<'_, PyAny>) -> bool {
        false
    }

    #[pyo3(signature = (_f, /))]
    fn is_null_or(&self, _f: &Bound<'_, PyAny>) -> bool {
        true
    }

    #[pyo3(signature = (msg = None))]
    fn unwrap(&self, msg: Option<String>) -> PyResult<Py<PyAny>> {
        Err(UnwrapError::new_err(
            msg.unwrap_or_else(|| "unwrap on Null".to_owned()),
        ))
    }

    #[pyo3(signature = (default, /))]
    fn unwrap_or(&self, default: Py<PyAny>) -> Py<PyAny> {
        default
    }

    #[pyo3(signature = (f, /))]
    fn unwrap_or_else(&self, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        Ok(f.call0()?.unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn map(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        null(py)
    }

    #[pyo3(signature = (_f, /))]
    fn map_into(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        null(py)
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

    #[pyo3(signature = (_f, /))]
    fn inspect(slf: &Bound<'_, Self>, _f: &Bound<'_, PyAny>) -> Py<Self> {
        slf.clone().unbind()
    }

    #[pyo3(signature = (err, /))]
    fn ok_or(&self, py: Python<'_>, err: Py<PyAny>) -> PyResult<Py<PyAny>> {
        result::err(py, err)
    }

    #[pyo3(signature = (f, /))]
    fn ok_or_else(&self, py: Python<'_>, f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        result::err(py, f.call0()?.unbind())
    }

    #[pyo3(signature = (other, /))]
    fn xor(&self, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        expect_option(other)?;
        Ok(other.clone().unbind())
    }

    #[pyo3(signature = (_f, /))]
    fn filter(&self, py: Python<'_>, _f: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        null(py)
    }

    #[pyo3(signature = (other, /))]
    fn zip(&self, py: Python<'_>, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        expect_option(other)?;
        null(py)
    }

    fn flatten(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        null(py)
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
        richcmp_ranked(py, (NULL_RANK, None), ranked(other), op)
    }

    fn __hash__(&self, py: Python<'_>) -> PyResult<isize> {
        hash_ranked(py, NULL_RANK, None)
    }

    fn __repr__(&self) -> &'static str {
        "Null.null"
    }
}
