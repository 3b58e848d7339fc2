//! Input masks for tax identifiers
//!
//! Each mask runs over the full raw input on every keystroke, so it only
//! looks at the digits: a separator is written in front of a digit once that
//! digit exists, and anything past the last slot is dropped.

/// Separator positions (as digit indexes) and the digit capacity of a mask.
struct Layout {
    separators: &'static [(usize, char)],
    max_digits: usize,
}

const CPF: Layout = Layout {
    separators: &[(3, '.'), (6, '.'), (9, '-')],
    max_digits: 11,
};

const CNPJ: Layout = Layout {
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
    max_digits: 14,
};

const CUIT: Layout = Layout {
    separators: &[(2, '-'), (10, '-')],
    max_digits: 11,
};

fn apply(layout: &Layout, value: &str) -> String {
    let mut out = String::with_capacity(layout.max_digits + layout.separators.len());
    let digits = value.chars().filter(|c| c.is_ascii_digit()).take(layout.max_digits);

    for (i, digit) in digits.enumerate() {
        if let Some(&(_, sep)) = layout.separators.iter().find(|(at, _)| *at == i) {
            out.push(sep);
        }
        out.push(digit);
    }
    out
}

/// Format as `###.###.###-##`
pub fn cpf(value: &str) -> String {
    apply(&CPF, value)
}

/// Format as `##.###.###/####-##`
pub fn cnpj(value: &str) -> String {
    apply(&CNPJ, value)
}

/// Format as `##-########-#`
pub fn cuit(value: &str) -> String {
    apply(&CUIT, value)
}
