//! Python bindings
//!
//! Batch calls release the GIL while validating.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{batch, masks, validators, Error, IdKind};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// taxid native extension module
#[pymodule]
fn taxid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Validation functions
    m.add_function(wrap_pyfunction!(validate_cpf, m)?)?;
    m.add_function(wrap_pyfunction!(validate_cnpj, m)?)?;
    m.add_function(wrap_pyfunction!(validate_cuit, m)?)?;
    m.add_function(wrap_pyfunction!(validate_dni, m)?)?;
    m.add_function(wrap_pyfunction!(validate_cpa, m)?)?;

    // Masks
    m.add_function(wrap_pyfunction!(mask_cpf, m)?)?;
    m.add_function(wrap_pyfunction!(mask_cnpj, m)?)?;
    m.add_function(wrap_pyfunction!(mask_cuit, m)?)?;

    // Dispatch by kind name
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(mask, m)?)?;
    m.add_function(wrap_pyfunction!(validate_batch, m)?)?;

    // Utility
    m.add_function(wrap_pyfunction!(is_native_available, m)?)?;
    Ok(())
}

/// Validate Brazilian CPF
#[pyfunction]
fn validate_cpf(value: &str) -> bool {
    validators::cpf(value)
}

/// Validate Brazilian CNPJ
#[pyfunction]
fn validate_cnpj(value: &str) -> bool {
    validators::cnpj(value)
}

/// Validate Argentine CUIT
#[pyfunction]
fn validate_cuit(value: &str) -> bool {
    validators::cuit(value)
}

/// Validate Argentine DNI (length only)
#[pyfunction]
fn validate_dni(value: &str) -> bool {
    validators::dni(value)
}

/// Validate Argentine postal code
#[pyfunction]
fn validate_cpa(value: &str) -> bool {
    validators::cpa(value)
}

#[pyfunction]
fn mask_cpf(value: &str) -> String {
    masks::cpf(value)
}

#[pyfunction]
fn mask_cnpj(value: &str) -> String {
    masks::cnpj(value)
}

#[pyfunction]
fn mask_cuit(value: &str) -> String {
    masks::cuit(value)
}

/// Validate `value` as the identifier kind named by `kind`
#[pyfunction]
fn validate(kind: &str, value: &str) -> PyResult<bool> {
    let kind: IdKind = kind.parse()?;
    Ok(kind.validate(value))
}

/// Mask `value` as the identifier kind named by `kind`
#[pyfunction]
fn mask(kind: &str, value: &str) -> PyResult<String> {
    let kind: IdKind = kind.parse()?;
    Ok(kind.mask(value)?)
}

/// Validate many values in parallel without holding the GIL
#[pyfunction]
fn validate_batch(py: Python<'_>, kind: &str, values: Vec<String>) -> PyResult<Vec<bool>> {
    let kind: IdKind = kind.parse()?;
    Ok(py.allow_threads(|| batch::validate_batch(kind, &values)))
}

/// Check if native extension is working
#[pyfunction]
fn is_native_available() -> bool {
    true
}
