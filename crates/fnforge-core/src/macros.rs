//! Declarative macros for per-arity trait implementations.
//!
//! Arity is encoded as the argument tuple, so closures of each supported
//! arity need one blanket impl per trait. These macros generate them.

/// Generates `Function` impls for closures of the listed arities.
///
/// Each group lists the type parameters of one arity; the parameters double as
/// binding names when the tuple is destructured.
///
/// # Usage
/// ```ignore
/// impl_function_for_closures!((), (A), (A, B), (A, B, C));
/// ```
macro_rules! impl_function_for_closures {
    ($( ( $($arg:ident),* ) ),+ $(,)?) => {
        $(
            impl<Func, Ret, $($arg),*> $crate::function::Function<( $($arg,)* )> for Func
            where
                Func: Fn($($arg),*) -> Ret,
            {
                type Output = Ret;

                #[inline]
                #[allow(non_snake_case)]
                fn apply(&self, ( $($arg,)* ): ( $($arg,)* )) -> Ret {
                    (self)($($arg),*)
                }
            }
        )+
    };
}

/// Generates `TryFunction` impls on `Fallible` for the listed arities.
///
/// # Usage
/// ```ignore
/// impl_try_function_for_fallible!((), (A), (A, B), (A, B, C));
/// ```
macro_rules! impl_try_function_for_fallible {
    ($( ( $($arg:ident),* ) ),+ $(,)?) => {
        $(
            impl<Func, Ret, Fail, $($arg),*> $crate::fallible::TryFunction<( $($arg,)* )>
                for $crate::fallible::Fallible<Func>
            where
                Func: Fn($($arg),*) -> Result<Ret, Fail>,
            {
                type Output = Ret;
                type Error = Fail;

                #[inline]
                #[allow(non_snake_case)]
                fn try_apply(&self, ( $($arg,)* ): ( $($arg,)* )) -> Result<Ret, Fail> {
                    (self.function)($($arg),*)
                }
            }
        )+
    };
}
