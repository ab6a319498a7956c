pub trait ApproxEqual: Copy {
    fn equals_approx_abs(self, other: Self, eps: Self) -> bool;
}

macro_rules! assert_eq_approx_abs {
    ($lhs:expr, $rhs:expr, $eps_abs:expr) => {
        assert!(
            $crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
            r#"assert_eq_abs failed:
    {}: {:?}
    {}: {:?}
    {} (maximum absolute error): {:?}"#,
            stringify!($lhs),
            $lhs,
            stringify!($rhs),
            $rhs,
            stringify!($eps_abs),
            $eps_abs,
        )
    };

    ($lhs:expr, $rhs:expr, $eps_abs:expr, $($arg:tt)+) => {
        assert!($crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
        $($arg)*);
    };
}

macro_rules! impl_approx_equal {
    ($($scalar:ty),*) => {
        $(
            impl ApproxEqual for $scalar {
                #[allow(clippy::float_cmp)]
                fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
                    if self == other {
                        true
                    } else {
                        (self - other).abs() <= eps
                    }
                }
            }
        )*
    };
}

impl_approx_equal!(f32, f64);

pub(crate) use assert_eq_approx_abs;
