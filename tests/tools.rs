mod common;

use common::{assert_raises, eval, run};
use monads::types::UnwrapError;
use pyo3::exceptions::{PyRuntimeError, PyTypeError};
use pyo3::prelude::*;

#[test]
fn catch_ok() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            with CatchResult(ValueError) as catch:
                catch.assign(int("123"))
            assert catch.result == Ok(123)
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn catch_err() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            with CatchResult(ValueError) as catch:
                catch.assign(int("abc"))
            result = catch.result
            assert type(result) is Err
            assert type(result.err_value) is ValueError
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn catch_without_assign_raises() -> PyResult<()> {
    Python::attach(|py| {
        let err = assert_raises::<UnwrapError>(
            py,
            r#"
            with CatchResult(ValueError) as catch:
                pass
            catch.result
            "#,
        );
        assert_eq!(
            err.value(py).to_string(),
            "No exception caught and assign not called"
        );
        Ok(())
    })
}

#[test]
fn catch_does_not_swallow_other_kinds() -> PyResult<()> {
    Python::attach(|py| {
        assert_raises::<PyTypeError>(
            py,
            r#"
            with CatchResult(ValueError):
                raise TypeError
            "#,
        );
        Ok(())
    })
}

#[test]
fn catch_watches_several_kinds_and_subclasses() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            with CatchResult(KeyError, ValueError) as catch:
                {}["missing"]
            assert isinstance(catch.result.err_value, KeyError)

            with CatchResult(LookupError) as catch:
                [][1]
            assert isinstance(catch.result.err_value, IndexError)

            assert catch.excs == (LookupError,)
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn caught_exception_wins_over_assignment() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            with CatchResult(ValueError) as catch:
                catch.assign(1)
                catch.assign(2)
            assert catch.result == Ok(2)

            with CatchResult(ValueError) as catch:
                catch.assign(1)
                raise ValueError("late")
            assert str(catch.result.unwrap_err()) == "late"
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn catch_rejects_non_exception_kinds() -> PyResult<()> {
    Python::attach(|py| {
        assert_raises::<PyTypeError>(py, "CatchResult(42)");
        assert_raises::<PyTypeError>(py, "CatchResult(int)");
        Ok(())
    })
}

#[test]
fn try_result_ok_and_err() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            assert try_result(int, ValueError, "123") == Ok(123)
            result = try_result(int, ValueError, "abc")
            assert type(result) is Err
            assert type(result.err_value) is ValueError
            assert try_result(int, (TypeError, ValueError), "ff", base=16) == Ok(255)
            assert try_result(int, ((TypeError,), ValueError), "zz").is_err()
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn try_result_does_not_swallow() -> PyResult<()> {
    Python::attach(|py| {
        assert_raises::<PyRuntimeError>(
            py,
            r#"
            def throw(exc):
                raise exc
            try_result(throw, TypeError, RuntimeError)
            "#,
        );
        Ok(())
    })
}

#[test]
fn try_option_some_and_null() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            assert try_option(int, ValueError, "123") == Some(123)
            assert try_option(int, ValueError, "abc") is Null.null
            assert try_option(dict.get, KeyError, {}, "k") == Some(None)
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn try_option_does_not_swallow() -> PyResult<()> {
    Python::attach(|py| {
        assert_raises::<PyRuntimeError>(
            py,
            r#"
            def throw(exc):
                raise exc
            try_option(throw, ValueError, RuntimeError)
            "#,
        );
        Ok(())
    })
}

#[test]
fn adapters_validate_kinds_before_calling() -> PyResult<()> {
    Python::attach(|py| {
        assert_raises::<PyTypeError>(py, "try_option(print, 'ValueError', 1)");
        assert_raises::<PyTypeError>(py, "try_result(print, (ValueError, 3), 1)");
        Ok(())
    })
}

#[test]
fn from_none_converts_absence() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            assert from_none(None) == Null.null
            assert from_none(123) == Some(123)
            assert from_none(0) == Some(0)
            assert from_none(Null.null) == Some(Null.null)
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn collect_options_in_order() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            assert collect_options([Some(1), Some(2), Some(3)]) == Some([1, 2, 3])
            assert collect_options([Some(1), Null.null, Some(3)]) == Null.null
            assert collect_options([]) == Some([])
            assert collect_options(Some(i) for i in range(4)) == Some([0, 1, 2, 3])
            "#,
        )?;
        Ok(())
    })
}

#[test]
fn collect_options_short_circuits() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            items = iter([Some(1), Null.null, Some(3), Some(4)])
            assert collect_options(items) is Null.null
            assert list(items) == [Some(3), Some(4)]
            "#,
        )?;
        assert_raises::<PyTypeError>(py, "collect_options([Some(1), 2])");
        Ok(())
    })
}

#[test]
fn collect_results_first_err_wins() -> PyResult<()> {
    Python::attach(|py| {
        run(
            py,
            r#"
            assert collect_results([Ok(1), Ok(2), Ok(3)]) == Ok([1, 2, 3])
            assert collect_results([Ok(1), Err("foo"), Ok(3)]) == Err("foo")
            first = Err("first")
            assert collect_results([Ok(1), first, Err("second")]) is first
            items = iter([Err(0), Ok(1)])
            collect_results(items)
            assert list(items) == [Ok(1)]
            "#,
        )?;
        assert_raises::<PyTypeError>(py, "collect_results([Ok(1), Some(2)])");
        let collected = eval(py, "collect_results(Ok(i) for i in range(3)).unwrap()")?;
        assert_eq!(collected.extract::<Vec<i64>>()?, vec![0, 1, 2]);
        Ok(())
    })
}
