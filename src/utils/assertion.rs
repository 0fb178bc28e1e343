use thiserror::Error;
use tracing::error;

use crate::utils::formatting::format_amount;

/// Raised when an expected value and the value actually produced differ.
///
/// The message carries the source line and both labelled values, e.g.
/// `LINE 42 ERROR: total(999) is not equal expect 1000.0(1000)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("LINE {position} ERROR: {actual_name}({actual}) is not equal expect {expect_name}({expect})")]
pub struct AssertionMismatch {
    pub position: u32,
    pub expect_name: String,
    pub actual_name: String,
    pub expect: String,
    pub actual: String,
}

/// How a value shows up inside an assertion diagnostic.
///
/// Floating point values use the same rendering as the price report, so a
/// mismatch prints `1445` rather than `1445.0`.
pub trait DiagnosticValue {
    fn render(&self) -> String;
}

impl DiagnosticValue for f64 {
    fn render(&self) -> String {
        format_amount(*self)
    }
}

impl DiagnosticValue for f32 {
    fn render(&self) -> String {
        format_amount(f64::from(*self))
    }
}

macro_rules! render_with_display {
    ($($ty:ty),*) => {
        $(
            impl DiagnosticValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_with_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, bool, char, str, String);

impl<T: DiagnosticValue + ?Sized> DiagnosticValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Compare `expect` with `actual`. Equal values pass silently.
pub fn check_equal<E, A>(
    position: u32,
    expect_name: &str,
    actual_name: &str,
    expect: &E,
    actual: &A,
) -> Result<(), AssertionMismatch>
where
    E: PartialEq<A> + DiagnosticValue + ?Sized,
    A: DiagnosticValue + ?Sized,
{
    if expect == actual {
        return Ok(());
    }

    Err(AssertionMismatch {
        position,
        expect_name: expect_name.to_string(),
        actual_name: actual_name.to_string(),
        expect: expect.render(),
        actual: actual.render(),
    })
}

/// Like [`check_equal`], but a mismatch panics with the diagnostic.
///
/// Inside a test this fails only that test case.
#[track_caller]
pub fn assert_equal<E, A>(
    position: u32,
    expect_name: &str,
    actual_name: &str,
    expect: &E,
    actual: &A,
) where
    E: PartialEq<A> + DiagnosticValue + ?Sized,
    A: DiagnosticValue + ?Sized,
{
    if let Err(mismatch) = check_equal(position, expect_name, actual_name, expect, actual) {
        error!("{}", mismatch);
        panic!("{}", mismatch);
    }
}

/// Compare two expressions, labelling them with their source text and the
/// current line. Evaluates to `Result<(), AssertionMismatch>`.
#[macro_export]
macro_rules! check_eq {
    ($expect:expr, $actual:expr $(,)?) => {
        $crate::utils::assertion::check_equal(
            line!(),
            stringify!($expect),
            stringify!($actual),
            &$expect,
            &$actual,
        )
    };
}

/// Panicking form of [`check_eq!`].
#[macro_export]
macro_rules! assert_price_eq {
    ($expect:expr, $actual:expr $(,)?) => {
        $crate::utils::assertion::assert_equal(
            line!(),
            stringify!($expect),
            stringify!($actual),
            &$expect,
            &$actual,
        )
    };
}
