use proptest::prelude::*;

use polycalc::{parse, Polynomial, Term, Variable};

fn small_term() -> impl Strategy<Value = Term> {
    (
        -20i64..=20,
        proptest::collection::vec((prop::sample::select(vec!['x', 'y', 'z']), 1u32..4), 0..3),
    )
        .prop_map(|(c, vars)| {
            Term::new(c, vars.into_iter().map(|(s, d)| Variable::new(s, d))).unwrap()
        })
}

fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(small_term(), 0..5)
        .prop_map(|terms| Polynomial::from_terms(terms).unwrap())
}

proptest! {
    #[test]
    fn print_parse_roundtrip(a in small_poly()) {
        prop_assert_eq!(parse(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn add_identity(a in small_poly()) {
        prop_assert_eq!(a.add(&Polynomial::zero()).unwrap(), a.clone());
        prop_assert_eq!(Polynomial::zero().add(&a).unwrap(), a);
    }

    #[test]
    fn sub_self_is_zero(a in small_poly()) {
        prop_assert!(a.sub(&a).unwrap().is_zero());
        prop_assert_eq!(a.sub(&a).unwrap().to_string(), "0");
    }

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn sub_is_add_neg(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.sub(&b).unwrap(), a.add(&b.neg().unwrap()).unwrap());
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    }

    #[test]
    fn mul_identity(a in small_poly()) {
        prop_assert_eq!(a.mul(&Polynomial::constant(1)).unwrap(), a.clone());
        prop_assert!(a.mul(&Polynomial::zero()).unwrap().is_zero());
    }

    #[test]
    fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        // a * (b + c) = a * b + a * c
        let left = a.mul(&b.add(&c).unwrap()).unwrap();
        let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn results_are_sorted(a in small_poly(), b in small_poly()) {
        for r in [a.add(&b).unwrap(), a.sub(&b).unwrap(), a.mul(&b).unwrap()] {
            for w in r.terms().windows(2) {
                prop_assert_eq!(w[0].cmp_precedence(&w[1]), std::cmp::Ordering::Greater);
            }
            prop_assert!(r.terms().iter().all(|t| t.coefficient() != 0));
        }
    }

    #[test]
    fn operands_unchanged(a in small_poly(), b in small_poly()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = a.sub(&b).unwrap();
        let _ = a.mul(&b).unwrap();
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }
}
