//! taxid
//!
//! Check-digit validation and input masks for Brazilian (CPF, CNPJ) and
//! Argentine (CUIT, DNI, CPA) identifiers. All functions are pure and total:
//! validators return `bool`, masks return the formatted `String`.
//!
//! Built with the `python` feature, the crate is also a native Python
//! extension exposing the same functions.

pub mod batch;
mod error;
pub mod kind;
pub mod masks;
pub mod validators;

#[cfg(feature = "python")]
mod python;

pub use batch::{mask_batch, summarize, validate_batch, BatchSummary};
pub use error::{Error, Result};
pub use kind::IdKind;
pub use validators::{cnpj_check_digits, cpf_check_digits, cuit_check_digit, digits_only};
