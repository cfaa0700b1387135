// IndexError -> Python exception mapping

use crate::error::IndexError;
use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::PyErr;

impl From<IndexError> for PyErr {
    fn from(err: IndexError) -> PyErr {
        if err.is_not_found() {
            return PyFileNotFoundError::new_err(err.to_string());
        }
        match &err {
            IndexError::Io { .. } => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
