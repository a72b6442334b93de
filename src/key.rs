use num_traits::{NumCast, ToPrimitive};
use std::fmt::Debug;

/// A trait facilitating interval tree key types.
///
/// Interval bounds and query points share one key type. Integer and float
/// keys are both supported; pivots are computed in `f64` and cast back, which
/// truncates toward zero for integer keys.
pub trait IntervalKey: NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Midpoint of two keys, rounded toward negative infinity for integer
    /// types.
    fn halfway(self, other: Self) -> Self;

    // `left + right` for pivot selection. Widening to f64 avoids integer
    // overflow at the cost of precision on very large i64/u64 bounds.
    #[inline(always)]
    fn bound_sum(left: Self, right: Self) -> f64 {
        left.to_f64().unwrap_or(f64::NAN) + right.to_f64().unwrap_or(f64::NAN)
    }

    /// Cast an `f64` into the key type, `None` if it is not representable.
    #[inline(always)]
    fn from_f64(x: f64) -> Option<Self> {
        <Self as NumCast>::from(x)
    }
}

macro_rules! impl_int_key {
    ($($t:ty),*) => {
        $(
            impl IntervalKey for $t {
                #[inline(always)]
                fn halfway(self, other: Self) -> Self {
                    // i128 holds the sum of any two 64 bit keys exactly.
                    // Flooring keeps odd-sum midpoints at or above the lower
                    // key, including for negative keys.
                    (self as i128 + other as i128).div_euclid(2) as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_key {
    ($($t:ty),*) => {
        $(
            impl IntervalKey for $t {
                #[inline(always)]
                fn halfway(self, other: Self) -> Self {
                    0.5 * (self + other)
                }
            }
        )*
    };
}

impl_int_key!(i32, i64, u32, u64);
impl_float_key!(f32, f64);

/// Median of a slice of sums, as `numpy.median` computes it: the middle
/// value for odd counts, the mean of the two middle values for even counts.
/// Returns `None` for an empty slice or when any value is NaN.
pub(crate) fn median(values: &mut [f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 || values.iter().any(|x| x.is_nan()) {
        return None;
    }

    let (lower, upper, _) = values.select_nth_unstable_by(n / 2, |a, b| a.total_cmp(b));
    if n % 2 == 1 {
        Some(*upper)
    } else {
        // the other middle value is the largest of the lower half
        let below = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(0.5 * (below + *upper))
    }
}

#[test]
fn test_halfway() {
    assert_eq!(3i64.halfway(6), 4);
    assert_eq!((-3i64).halfway(-2), -3);
    assert_eq!((-5i64).halfway(2), -2);
    assert_eq!((-4i64).halfway(-2), -3);
    assert_eq!(i64::MAX.halfway(i64::MAX), i64::MAX);
    assert_eq!(0u32.halfway(u32::MAX), u32::MAX / 2);
    assert_eq!(1.0f64.halfway(2.0), 1.5);
}

#[test]
fn test_median() {
    assert_eq!(median(&mut [0.0f64; 0]), None);
    assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(median(&mut [5.0, 5.0, -1.0, 7.0, 0.0, 5.0]), Some(5.0));
    assert_eq!(median(&mut [9.0, -3.0, 8.0, -3.0, 1.0, 2.0]), Some(1.5));
    assert_eq!(median(&mut [1.0, f64::NAN]), None);
}

#[test]
fn test_from_f64_truncates() {
    assert_eq!(<i64 as IntervalKey>::from_f64(2.75), Some(2));
    assert_eq!(<i64 as IntervalKey>::from_f64(-2.75), Some(-2));
    assert_eq!(<u32 as IntervalKey>::from_f64(-1.0), None);
    assert_eq!(<f64 as IntervalKey>::from_f64(-2.75), Some(-2.75));
}
