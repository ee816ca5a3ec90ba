//! This crate provides a trait [`Input`] for representing inputs generated
//! for testing purposes.
//!
//! An input value is the *expected* shape of a tokenization artifact; it
//! knows how to render itself into source text and, through [`Input`], how to
//! verify that the artifact produced from that text complies with it.

use std::fmt::Debug;

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
pub trait Input<Output: Debug>: Debug {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    ///
    /// [`TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<T: Debug, U: Debug + Input<T>> Input<Option<T>> for Option<U> {
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (input, output) => Err(TestCaseError::fail(format!(
                "expected {input:?}, got {output:?}"
            ))),
        }
    }
}

impl<T: Debug, U: Debug> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}
