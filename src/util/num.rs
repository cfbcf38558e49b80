/// Converts an `f64` into a repetition count.
///
/// The value is truncated towards zero. Negative values, `NaN` and any value
/// below one all yield `0`; values beyond the `usize` range saturate at
/// `usize::MAX`.
///
/// ## Parameters
/// - `value`: The numeric repetition count.
///
/// ## Returns
/// The truncated, clamped count.
///
/// ## Example
/// ```
/// use rill::util::num::f64_to_repeat_count;
///
/// assert_eq!(f64_to_repeat_count(3.0), 3);
/// assert_eq!(f64_to_repeat_count(2.9), 2);
/// assert_eq!(f64_to_repeat_count(-1.0), 0);
/// assert_eq!(f64_to_repeat_count(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_repeat_count(value: f64) -> usize {
    // `as` saturates on overflow and maps NaN to zero.
    value as usize
}
