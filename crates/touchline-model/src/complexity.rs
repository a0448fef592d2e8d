// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Represents the theoretical amount of work a counting strategy performs on a field.
///
/// Two strategies are modelled:
/// * **Tabulation**: one table update per cell, $r \times c$.
/// * **Enumeration**: $2^n$ candidate move sequences of $n = r + c - 2$ moves
///   each, $2^n \times n$.
///
/// The enumeration term leaves `f64` behind for large fields, so the value is
/// stored in **logarithmic space** ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the work estimate.
    /// If the work is $1.5 \times 10^{20}$, this stores $20.176$.
    log_val: f64,
}

impl Complexity {
    /// The work of the tabulation strategy on an `rows × cols` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::complexity::Complexity;
    /// let c = Complexity::tabulation(10, 10);
    /// assert!((c.raw() - 2.0).abs() < 1e-12);
    /// ```
    pub fn tabulation(rows: usize, cols: usize) -> Self {
        let cells = (rows as f64) * (cols as f64);
        if cells <= 1.0 {
            return Complexity { log_val: 0.0 };
        }
        Complexity {
            log_val: cells.log10(),
        }
    }

    /// The work of the enumeration strategy on an `rows × cols` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::complexity::Complexity;
    /// // 3x3: n = 4 moves, 2^4 * 4 = 64 move applications.
    /// let c = Complexity::enumeration(3, 3);
    /// assert!((c.raw() - 64f64.log10()).abs() < 1e-12);
    /// ```
    pub fn enumeration(rows: usize, cols: usize) -> Self {
        let moves = (rows + cols).saturating_sub(2);
        if moves == 0 {
            // A single candidate of zero moves.
            return Complexity { log_val: 0.0 };
        }

        let n = moves as f64;
        Complexity {
            log_val: n * std::f64::consts::LOG10_2 + n.log10(),
        }
    }

    /// Returns the exponent (order of magnitude).
    /// E.g., for $1.2 \times 10^{42}$, returns 42.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    /// E.g., for $1.2 \times 10^{42}$, returns 1.2.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}
