use polycalc::{evaluate, parse, Operator, PolyError, Polynomial, Term, Variable};

fn eval(op: &str, a: &str, b: &str) -> String {
    let op: Operator = op.parse().unwrap();
    evaluate(op, &parse(a).unwrap(), &parse(b).unwrap())
        .unwrap()
        .to_string()
}

#[test]
fn parse_and_print() {
    let p = parse("2x2y+3x-5").unwrap();
    assert_eq!(
        p.terms(),
        &[
            Term::new(2, [Variable::new('x', 2), Variable::new('y', 1)]).unwrap(),
            Term::new(3, [Variable::new('x', 1)]).unwrap(),
            Term::constant(-5),
        ]
    );
    assert_eq!(p.to_string(), "2x2y+3x-5");
}

#[test]
fn built_terms_print_as_parsable_text() {
    let p = Polynomial::from_terms([
        Term::new(0, [Variable::new('x', 1)]).unwrap(),
        Term::new(
            -2,
            [Variable::new('y', 1), Variable::new('x', 0), Variable::new('y', 2)],
        )
        .unwrap(),
        Term::constant(5),
    ])
    .unwrap();
    assert_eq!(p.to_string(), "-2y3+5");
    assert_eq!(parse(&p.to_string()).unwrap(), p);
}

#[test]
fn scenarios() {
    assert_eq!(eval("+", "x+y", "x-y"), "2x");
    assert_eq!(eval("-", "3x2", "3x2"), "0");
    assert_eq!(eval("*", "x+1", "x-1"), "x2-1");
    assert_eq!(eval("*", "2x", "3y"), "6xy");
    assert_eq!(eval("+", "5", "-5"), "0");
}

#[test]
fn mixed_arithmetic() {
    assert_eq!(eval("+", "3x2y+2xz-7", "-x2y+4xz+y+7"), "2x2y+6xz+y");
    assert_eq!(eval("-", "x3+x", "x3-y2"), "x+y2");
    assert_eq!(eval("*", "x+y+z", "x-y"), "x2+xz-y2-yz");
    assert_eq!(eval("*", "-1", "x-1"), "-x+1");
    assert_eq!(eval("*", "x-1", "x2+x+1"), "x3-1");
    assert_eq!(eval("*", "xy", "x2z+yz"), "x3yz+xy2z");
}

#[test]
fn constant_one_is_printed() {
    assert_eq!(eval("-", "x+1", "x"), "1");
    assert_eq!(eval("+", "x", "-1"), "x-1");
    assert_eq!(eval("*", "1", "1"), "1");
    assert_eq!(eval("*", "-1", "1"), "-1");
}

#[test]
fn operands_are_not_modified() {
    let a = parse("4x2-3y+1").unwrap();
    let b = parse("x2+3y-z").unwrap();
    let (a0, b0) = (a.clone(), b.clone());

    for op in [Operator::Add, Operator::Sub, Operator::Mul] {
        evaluate(op, &a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    // re-using an operand gives the same answer as the first time
    let first = evaluate(Operator::Sub, &a, &b).unwrap();
    let second = evaluate(Operator::Sub, &a, &b).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "3x2-6y+z+1");
}

#[test]
fn errors() {
    assert_eq!(
        "^".parse::<Operator>(),
        Err(PolyError::UnknownOperator("^".into()))
    );
    assert!(matches!(parse(""), Err(PolyError::Parse { .. })));
    assert!(matches!(parse("3x^2"), Err(PolyError::Parse { .. })));
    assert!(matches!(
        parse("99999999999999999999"),
        Err(PolyError::Overflow(_))
    ));

    assert_eq!(
        Term::new(1, [Variable::new('A', 1)]),
        Err(PolyError::InvalidSymbol('A'))
    );

    let big = Polynomial::constant(i64::MAX);
    assert!(matches!(
        evaluate(Operator::Mul, &big, &big),
        Err(PolyError::Overflow(_))
    ));
}
