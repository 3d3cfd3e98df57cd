use pyo3::exceptions::{PyBaseException, PyException, PyTypeError};
use pyo3::{IntoPyObjectExt, PyClass, prelude::*};
use pyo3::pyclass::CompareOp;
use pyo3::types::{PyTuple, PyType};
use std::cmp::Ordering;

/// Exception raised when unwrapping the variant that lacks the requested payload
#[pyclass(extends = PyException, name = "UnwrapError", module = "monads")]
pub struct UnwrapError;

#[pymethods]
impl UnwrapError {
    #[new]
    #[pyo3(signature = (*_args))]
    fn new(_args: &Bound<'_, PyTuple>) -> Self {
        UnwrapError
    }
}

impl UnwrapError {
    #[inline]
    pub fn new_err(msg: impl Into<String>) -> PyErr {
        PyErr::new::<UnwrapError, _>(msg.into())
    }
}

/// Moves a class initializer onto the Python heap.
pub trait PyClassInit<T: PyClass> {
    fn init(self, py: Python<'_>) -> PyResult<Py<T>>;
}

impl<T: PyClass> PyClassInit<T> for PyClassInitializer<T> {
    #[inline]
    fn init(self, py: Python<'_>) -> PyResult<Py<T>> {
        Py::new(py, self)
    }
}

/// Closed set of exception classes watched by the adapters.
///
/// Built from either a single class or a tuple of classes (tuples may nest,
/// like the right-hand side of an `except` clause). The set is flattened and
/// validated once, so matching is a single `PyErr_GivenExceptionMatches` call.
pub struct ExceptionKinds {
    kinds: Py<PyTuple>,
}

impl ExceptionKinds {
    pub fn new(kinds: &Bound<'_, PyAny>) -> PyResult<Self> {
        let py = kinds.py();
        let mut flat = Vec::new();
        collect_kinds(kinds, &mut flat)?;
        Ok(ExceptionKinds {
            kinds: PyTuple::new(py, flat)?.unbind(),
        })
    }

    pub fn from_tuple(kinds: &Bound<'_, PyTuple>) -> PyResult<Self> {
        Self::new(kinds.as_any())
    }

    #[inline]
    pub fn as_tuple<'py>(&self, py: Python<'py>) -> &Bound<'py, PyTuple> {
        self.kinds.bind(py)
    }

    /// Whether a raised error belongs to one of the watched classes.
    #[inline]
    pub fn matches(&self, py: Python<'_>, err: &PyErr) -> bool {
        err.is_instance(py, self.kinds.bind(py).as_any())
    }

    /// Whether an exception instance belongs to one of the watched classes.
    #[inline]
    pub fn contains(&self, exc: &Bound<'_, PyAny>) -> PyResult<bool> {
        exc.is_instance(self.kinds.bind(exc.py()).as_any())
    }
}

fn collect_kinds<'py>(kinds: &Bound<'py, PyAny>, out: &mut Vec<Bound<'py, PyType>>) -> PyResult<()> {
    if let Ok(group) = kinds.cast::<PyTuple>() {
        for item in group.iter() {
            collect_kinds(&item, out)?;
        }
        return Ok(());
    }
    match kinds.cast::<PyType>() {
        Ok(kind) if kind.is_subclass_of::<PyBaseException>()? => {
            out.push(kind.clone());
            Ok(())
        }
        _ => Err(PyTypeError::new_err(format!(
            "exception kinds must be exception classes or tuples of them, got {}",
            kinds.repr()?
        ))),
    }
}

/// Compares two containers laid out as `(rank, payload)` pairs.
///
/// Ranks are compared first; on a tie the payloads are compared with the
/// requested operator. A missing payload on both sides compares equal.
pub fn compare_ranked(
    lhs: (u8, Option<&Bound<'_, PyAny>>),
    rhs: (u8, Option<&Bound<'_, PyAny>>),
    op: CompareOp,
) -> PyResult<bool> {
    if lhs.0 != rhs.0 {
        return Ok(op.matches(lhs.0.cmp(&rhs.0)));
    }
    match (lhs.1, rhs.1) {
        (Some(left), Some(right)) => left.rich_compare(right, op)?.is_truthy(),
        _ => Ok(op.matches(Ordering::Equal)),
    }
}

/// Hashes a container the same way as its `(rank, payload)` tuple.
pub fn hash_ranked(py: Python<'_>, rank: u8, payload: Option<&Py<PyAny>>) -> PyResult<isize> {
    match payload {
        Some(value) => (rank, value).into_pyobject(py)?.hash(),
        None => (rank,).into_pyobject(py)?.hash(),
    }
}

/// Rich comparison against an arbitrary right-hand side.
///
/// `rhs` is `None` when the other object is not a container of the same
/// family: equality is then `False`, ordering defers with `NotImplemented`.
pub fn richcmp_ranked(
    py: Python<'_>,
    lhs: (u8, Option<&Bound<'_, PyAny>>),
    rhs: Option<(u8, Option<Bound<'_, PyAny>>)>,
    op: CompareOp,
) -> PyResult<Py<PyAny>> {
    match rhs {
        Some((rank, payload)) => compare_ranked(lhs, (rank, payload.as_ref()), op)?.into_py_any(py),
        None => match op {
            CompareOp::Eq => false.into_py_any(py),
            CompareOp::Ne => true.into_py_any(py),
            _ => Ok(py.NotImplemented()),
        },
    }
}
