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

use touchline_model::generator::GeneratorError;
use touchline_search::result::CountError;

/// The error type for runtime measurements and analyses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HarnessError {
    /// A random field could not be generated.
    Generator(GeneratorError),
    /// A plain counting function failed.
    Count(CountError),
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generator(e) => write!(f, "Generator error: {}", e),
            Self::Count(e) => write!(f, "Count error: {}", e),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generator(e) => Some(e),
            Self::Count(e) => Some(e),
        }
    }
}

impl From<GeneratorError> for HarnessError {
    fn from(e: GeneratorError) -> Self {
        Self::Generator(e)
    }
}

impl From<CountError> for HarnessError {
    fn from(e: CountError) -> Self {
        Self::Count(e)
    }
}
