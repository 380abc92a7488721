//! Tests for total functions and their combinators.

use super::*;
use fnforge_test::CallCounter;

// ============================================================================
// Arity
// ============================================================================

mod arity {
    use super::*;

    #[test]
    fn test_nullary() {
        let answer = || 42;
        assert_eq!(answer.apply(()), 42);
    }

    #[test]
    fn test_unary() {
        let negate = |x: i64| -x;
        assert_eq!(negate.apply((5,)), -5);
    }

    #[test]
    fn test_binary() {
        let concat = |a: String, b: &str| a + b;
        assert_eq!(concat.apply(("foo".to_string(), "bar")), "foobar");
    }

    #[test]
    fn test_ternary() {
        let clamp = |x: f64, lo: f64, hi: f64| x.max(lo).min(hi);
        assert_eq!(clamp.apply((7.5, 0.0, 5.0)), 5.0);
        assert_eq!(clamp.apply((-1.0, 0.0, 5.0)), 0.0);
    }

    fn shout(s: &str) -> String {
        s.to_uppercase()
    }

    #[test]
    fn test_fn_item() {
        assert_eq!(shout.apply(("hey",)), "HEY");
    }
}

// ============================================================================
// Combinators
// ============================================================================

mod combinators {
    use super::*;

    #[test]
    fn test_and_then() {
        let parse_len = |s: &str| s.len();
        let is_long = parse_len.and_then(|n: usize| n > 3);
        assert!(is_long.apply(("abcd",)));
        assert!(!is_long.apply(("abc",)));
    }

    #[test]
    fn test_and_then_nullary() {
        let seed = || 20_i32;
        let next = seed.and_then(|x: i32| x + 1);
        assert_eq!(next.apply(()), 21);
    }

    #[test]
    fn test_compose_unary() {
        let square = |x: i32| x * x;
        let square_of_len = square.compose(|s: &str| (s.len() as i32,));
        assert_eq!(square_of_len.apply(("four",)), 16);
    }

    #[test]
    fn test_compose_binary_from_single_argument() {
        let sub = |a: i32, b: i32| a - b;
        let around = sub.compose(|x: i32| (x + 10, x - 10));
        assert_eq!(around.apply((0,)), 20);
    }

    #[test]
    fn test_compose_ternary_from_nullary() {
        let mul_add = |a: i32, b: i32, c: i32| a * b + c;
        let fixed = mul_add.compose(|| (2, 3, 4));
        assert_eq!(fixed.apply(()), 10);
    }

    #[test]
    fn test_consume_runs_and_discards() {
        let counter = CallCounter::new();
        let handle = counter.clone();
        let logged = (move |x: u8| {
            handle.hit();
            x
        })
        .consume();

        logged.apply((3,));
        logged.apply((4,));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_boxed_table() {
        let offset = 100;
        let table: Vec<Boxed<'_, (i32, i32), i32>> = vec![
            (|a: i32, b: i32| a + b).boxed(),
            (|a: i32, b: i32| a * b).boxed(),
            (move |a: i32, b: i32| a - b + offset).boxed(),
        ];

        let results: Vec<i32> = table.iter().map(|f| f.apply((6, 3))).collect();
        assert_eq!(results, vec![9, 18, 103]);
    }

    #[test]
    fn test_boxed_combines() {
        let boxed = (|x: i32| x + 1).boxed();
        let chained = boxed.and_then(|x: i32| x * 3);
        assert_eq!(chained.apply((1,)), 6);
    }

    #[test]
    fn test_identity_and_constant() {
        assert!(identity::<bool>().apply((true,)));
        assert_eq!(identity::<i16>().apply((-7,)), -7);

        let greeting = constant("hi".to_string());
        assert_eq!(greeting.apply(()), "hi");
        assert_eq!(greeting.apply(()), "hi");
    }

    #[test]
    fn test_identity_is_composition_unit() {
        let f = |x: i32| x * 3 - 1;
        let left = identity::<i32>().and_then(f);
        let right = f.and_then(identity::<i32>());
        for x in -5..5 {
            assert_eq!(left.apply((x,)), f(x));
            assert_eq!(right.apply((x,)), f(x));
        }
    }
}

// ============================================================================
// Associativity across primitive and object types
// ============================================================================

/// Generates one test per type asserting
/// `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))` on every sample.
macro_rules! associativity_suite {
    ($($name:ident: [$($sample:expr),+ $(,)?], $f:expr, $g:expr, $h:expr;)+) => {
        $(
            #[test]
            fn $name() {
                for sample in [$($sample),+] {
                    let left = $f.and_then($g).and_then($h);
                    let right = $f.and_then($g.and_then($h));
                    assert_eq!(left.apply((sample.clone(),)), right.apply((sample,)));
                }
            }
        )+
    };
}

mod associativity {
    use super::*;

    associativity_suite! {
        test_bool: [true, false],
            |x: bool| !x, |x: bool| x && true, |x: bool| x ^ true;
        test_i8: [i8::MIN, -1, 0, 1, i8::MAX],
            |x: i8| x.wrapping_add(3), |x: i8| x.wrapping_mul(2), |x: i8| x.wrapping_sub(1);
        test_char: ['a', 'Z', '0', 'é'],
            |c: char| c.to_ascii_uppercase(),
            |c: char| char::from_u32(c as u32 + 1).unwrap_or(c),
            |c: char| if c.is_alphabetic() { c } else { '_' };
        test_i16: [i16::MIN, -300, 0, 300, i16::MAX],
            |x: i16| x.wrapping_neg(), |x: i16| x.wrapping_add(7), |x: i16| x / 3;
        test_i32: [i32::MIN, -1, 0, 42, i32::MAX],
            |x: i32| x.wrapping_mul(31), |x: i32| x.rotate_left(3), |x: i32| x ^ 0x5a5a;
        test_i64: [i64::MIN, -9, 0, 9, i64::MAX],
            |x: i64| x.saturating_add(1000), |x: i64| x >> 2, |x: i64| x.wrapping_mul(-3);
        test_f32: [-2.5_f32, 0.0, 1.25, 1e10],
            |x: f32| x * 2.0, |x: f32| x - 0.5, |x: f32| x.abs();
        test_f64: [-2.5_f64, 0.0, 3.75, 1e300],
            |x: f64| x.abs().sqrt(), |x: f64| x * x, |x: f64| x.floor();
        test_object: ["".to_string(), "abc".to_string(), "Hello".to_string()],
            |s: String| s + "!", |s: String| s.repeat(2), |s: String| s.to_lowercase();
    }

    #[test]
    fn test_mixed_types() {
        let f = |x: i32| x as i64 * 1_000_000;
        let g = |x: i64| x as f64 / 3.0;
        let h = |x: f64| format!("{x:.2}");

        for x in [-3, 0, 7] {
            let left = f.and_then(g).and_then(h);
            let right = f.and_then(g.and_then(h));
            assert_eq!(left.apply((x,)), right.apply((x,)));
        }
    }
}
