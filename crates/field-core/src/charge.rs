// File: crates/field-core/src/charge.rs
// Summary: Point charges and the validated, non-empty charge set parsed from `x y q` text.

use crate::error::{LineFault, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCharge {
    pub x: f64,
    pub y: f64,
    pub q: f64,
}

impl PointCharge {
    pub const fn new(x: f64, y: f64, q: f64) -> Self {
        Self { x, y, q }
    }

    /// Only strictly positive charges count as positive; q = 0 is drawn as negative.
    pub fn is_positive(&self) -> bool {
        self.q > 0.0
    }
}

/// Ordered, non-empty list of point charges. Order is input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeSet {
    charges: Vec<PointCharge>,
}

impl ChargeSet {
    /// Build a set, enforcing the non-empty invariant.
    pub fn try_new(charges: Vec<PointCharge>) -> Result<Self, ValidationError> {
        if charges.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self { charges })
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointCharge> {
        self.charges.iter()
    }

    pub fn as_slice(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Parse one charge per line (`x y q`, whitespace separated). Blank lines are skipped.
    /// Line numbers in errors are 1-based over the text as given.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut charges = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != 3 {
                return Err(ValidationError::MalformedChargeLine {
                    line: line_no,
                    fault: LineFault::TokenCount(tokens.len()),
                });
            }
            let mut vals = [0.0f64; 3];
            for (slot, tok) in vals.iter_mut().zip(&tokens) {
                *slot = parse_finite(tok).ok_or(ValidationError::MalformedChargeLine {
                    line: line_no,
                    fault: LineFault::NotANumber,
                })?;
            }
            charges.push(PointCharge::new(vals[0], vals[1], vals[2]));
        }
        Self::try_new(charges)
    }
}

impl<'a> IntoIterator for &'a ChargeSet {
    type Item = &'a PointCharge;
    type IntoIter = std::slice::Iter<'a, PointCharge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}

pub(crate) fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
