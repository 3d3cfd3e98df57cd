pub mod option;
pub mod result;
pub mod tools;
pub mod types;
use pyo3::prelude::*;

/// Registers every class and function of the `monads` module on `m`.
pub fn init_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<option::OptionBase>()?;
    m.add_class::<option::PySome>()?;
    m.add_class::<option::PyNull>()?;
    py.get_type::<option::PyNull>()
        .setattr("null", option::null(py)?)?;
    m.add_class::<result::ResultBase>()?;
    m.add_class::<result::PyOk>()?;
    m.add_class::<result::PyErr>()?;
    m.add_class::<types::UnwrapError>()?;
    m.add_class::<tools::CatchResult>()?;
    m.add_function(wrap_pyfunction!(tools::try_option, m)?)?;
    m.add_function(wrap_pyfunction!(tools::try_result, m)?)?;
    m.add_function(wrap_pyfunction!(tools::from_none, m)?)?;
    m.add_function(wrap_pyfunction!(tools::collect_options, m)?)?;
    m.add_function(wrap_pyfunction!(tools::collect_results, m)?)?;
    Ok(())
}

#[pymodule]
fn monads(m: &Bound<'_, PyModule>) -> PyResult<()> {
    init_module(m)
}
