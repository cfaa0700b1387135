// PyDefinition - PyO3 wrapper for DefinitionRecord
//
// Read-only from Python. `to_dict()` returns the plain record shape used by
// callers that serialize catalogs.

use crate::extractors::base::DefinitionRecord;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-accessible definition record
#[pyclass(name = "Definition")]
pub struct PyDefinition {
    inner: DefinitionRecord,
}

impl PyDefinition {
    pub fn from_record(record: DefinitionRecord) -> Self {
        PyDefinition { inner: record }
    }
}

#[pymethods]
impl PyDefinition {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn kind(&self) -> String {
        self.inner.kind.to_string()
    }

    #[getter]
    fn start_line(&self) -> u32 {
        self.inner.start_line
    }

    #[getter]
    fn end_line(&self) -> u32 {
        self.inner.end_line
    }

    #[getter]
    fn docstring(&self) -> Option<String> {
        self.inner.docstring.clone()
    }

    /// Record as a dict: name, type, start_line, end_line, docstring
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("name", &self.inner.name)?;
        dict.set_item("type", self.inner.kind.to_string())?;
        dict.set_item("start_line", self.inner.start_line)?;
        dict.set_item("end_line", self.inner.end_line)?;
        dict.set_item("docstring", self.inner.docstring.as_deref())?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Definition(name='{}', kind='{}', lines={}-{})",
            self.inner.name, self.inner.kind, self.inner.start_line, self.inner.end_line
        )
    }
}
