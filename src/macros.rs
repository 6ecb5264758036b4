#![allow(unused_macros)]

/// Forward the owned and mixed-ownership forms of a binary operator to the
/// `&BigInt op &BigInt` implementation, which holds the algorithm.
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $imp::$method(&self, other)
            }
        }

        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(self, &other)
            }
        }
    };
}

/// `x op= y` is defined as `x = &x op &y` for owned and borrowed `y`.
macro_rules! forward_op_assign {
    (impl $imp:ident for $res:ty, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                *self = $binop::$binmethod(&*self, &other);
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            #[inline]
            fn $method(&mut self, other: &$res) {
                *self = $binop::$binmethod(&*self, other);
            }
        }
    };
}

/// Mixed operations with primitive integers promote the primitive to a
/// `BigInt` and reuse the big integer algorithm.
macro_rules! forward_scalar_binop {
    (impl $imp:ident<$scalar:ty> for $res:ty, $method:ident) => {
        impl $imp<$scalar> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $scalar) -> $res {
                $imp::$method(&self, &<$res>::from(other))
            }
        }

        impl<'a> $imp<$scalar> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $scalar) -> $res {
                $imp::$method(self, &<$res>::from(other))
            }
        }

        impl $imp<$res> for $scalar {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(&<$res>::from(self), &other)
            }
        }

        impl<'a> $imp<&'a $res> for $scalar {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $imp::$method(&<$res>::from(self), other)
            }
        }
    };
}

macro_rules! forward_scalar_op_assign {
    (impl $imp:ident<$scalar:ty> for $res:ty, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<$scalar> for $res {
            #[inline]
            fn $method(&mut self, other: $scalar) {
                *self = $binop::$binmethod(&*self, &<$res>::from(other));
            }
        }
    };
}

/// Implement one operator for every primitive integer type.
macro_rules! promote_all_scalars {
    (impl $imp:ident for $res:ty, $method:ident) => {
        promote_all_scalars!(@each $imp, $res, $method;
            u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
    };
    (@each $imp:ident, $res:ty, $method:ident; $($scalar:ident)*) => {
        $( forward_scalar_binop!(impl $imp<$scalar> for $res, $method); )*
    };
}

macro_rules! promote_all_scalars_assign {
    (impl $imp:ident for $res:ty, $method:ident, $binop:ident, $binmethod:ident) => {
        promote_all_scalars_assign!(@each $imp, $res, $method, $binop, $binmethod;
            u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
    };
    (@each $imp:ident, $res:ty, $method:ident, $binop:ident, $binmethod:ident; $($scalar:ident)*) => {
        $( forward_scalar_op_assign!(impl $imp<$scalar> for $res, $method, $binop, $binmethod); )*
    };
}

/// The complete operator surface for one arithmetic operation: owned and
/// borrowed operands, compound assignment, and primitive promotion.
macro_rules! impl_arith_family {
    (impl $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident for $res:ty) => {
        forward_all_binop_to_ref_ref!(impl $imp for $res, $method);
        forward_op_assign!(impl $imp_assign for $res, $method_assign, $imp, $method);
        promote_all_scalars!(impl $imp for $res, $method);
        promote_all_scalars_assign!(impl $imp_assign for $res, $method_assign, $imp, $method);
    };
}
