//! Identifier kinds and dispatch to their validator and mask

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{masks, validators};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Cpf,
    Cnpj,
    Cuit,
    Dni,
    Cpa,
}

impl IdKind {
    pub const ALL: [IdKind; 5] = [IdKind::Cpf, IdKind::Cnpj, IdKind::Cuit, IdKind::Dni, IdKind::Cpa];

    pub fn name(&self) -> &'static str {
        match self {
            IdKind::Cpf => "CPF",
            IdKind::Cnpj => "CNPJ",
            IdKind::Cuit => "CUIT",
            IdKind::Dni => "DNI",
            IdKind::Cpa => "CPA",
        }
    }

    /// ISO 3166-1 alpha-2 code of the issuing country
    pub fn country(&self) -> &'static str {
        match self {
            IdKind::Cpf | IdKind::Cnpj => "BR",
            IdKind::Cuit | IdKind::Dni | IdKind::Cpa => "AR",
        }
    }

    pub fn validate(&self, value: &str) -> bool {
        match self {
            IdKind::Cpf => validators::cpf(value),
            IdKind::Cnpj => validators::cnpj(value),
            IdKind::Cuit => validators::cuit(value),
            IdKind::Dni => validators::dni(value),
            IdKind::Cpa => validators::cpa(value),
        }
    }

    pub fn has_mask(&self) -> bool {
        matches!(self, IdKind::Cpf | IdKind::Cnpj | IdKind::Cuit)
    }

    /// Apply the display mask. DNI and CPA have none.
    pub fn mask(&self, value: &str) -> Result<String> {
        match self {
            IdKind::Cpf => Ok(masks::cpf(value)),
            IdKind::Cnpj => Ok(masks::cnpj(value)),
            IdKind::Cuit => Ok(masks::cuit(value)),
            IdKind::Dni | IdKind::Cpa => Err(Error::NoMask(*self)),
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        IdKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownKind(name.to_string()))
    }
}
