use exprs::{
    Context, ContextOptions, ErrorCode, EvalFlags, Term, error_code_to_string, evaluate,
};

const SAMPLES: &[&str] = &[
    "0xFF & 0x7F",
    "1.2 + '2.3'",
    "2+2**2*4/2",
    "'a' < 'b' || 0.0",
    "100 / 2.0",
];

#[test]
fn fresh_contexts_agree() {
    let mut first = Context::with_defaults().unwrap();
    let mut second = Context::with_defaults().unwrap();
    for sample in SAMPLES {
        assert_eq!(
            first.evaluate(sample, EvalFlags::empty()).unwrap(),
            second.evaluate(sample, EvalFlags::empty()).unwrap(),
            "input: {sample}"
        );
    }
}

#[test]
fn reuse_does_not_leak_state() {
    let mut ctx = Context::with_defaults().unwrap();
    let expected: Vec<Term> = SAMPLES.iter().map(|s| evaluate(s).unwrap()).collect();

    for _ in 0..3 {
        for (sample, expected) in SAMPLES.iter().zip(&expected) {
            assert_eq!(&ctx.evaluate(sample, EvalFlags::empty()).unwrap(), expected);
            // An error in between must not affect the next call.
            assert!(ctx.evaluate("1 +", EvalFlags::empty()).is_err());
        }
    }
}

#[test]
fn last_error_follows_calls() {
    let mut ctx = Context::with_defaults().unwrap();
    let calls = [
        ("1/0", ErrorCode::Domain),
        ("1 + 1", ErrorCode::Success),
        ("'a' * 2", ErrorCode::Type),
        ("(1", ErrorCode::Syntax),
        ("0b2", ErrorCode::Lexical),
        ("3.5", ErrorCode::Success),
    ];
    for (input, code) in calls {
        let _ = ctx.evaluate(input, EvalFlags::empty());
        assert_eq!(ctx.last_error(), code, "input: {input}");
    }
}

#[test]
fn flags_apply_per_call() {
    let mut ctx = Context::with_defaults().unwrap();
    assert_eq!(
        ctx.evaluate("1.5", EvalFlags::INTEGER_ONLY)
            .unwrap_err()
            .code(),
        ErrorCode::Type
    );
    assert_eq!(
        ctx.evaluate("1.5", EvalFlags::empty()).unwrap(),
        Term::Float(1.5)
    );
    assert!(
        ctx.evaluate("'s' + 1.5", EvalFlags::INTEGER_ONLY | EvalFlags::NO_STRINGS)
            .is_err()
    );
}

#[test]
fn verbose_does_not_change_results() {
    let mut quiet = Context::with_defaults().unwrap();
    let mut loud = Context::new(ContextOptions {
        verbose: 2,
        ..ContextOptions::default()
    })
    .unwrap();
    assert_eq!(loud.verbose(), 2);
    for sample in SAMPLES {
        assert_eq!(
            quiet.evaluate(sample, EvalFlags::empty()),
            loud.evaluate(sample, EvalFlags::empty())
        );
    }
    loud.set_verbose(0);
    assert_eq!(loud.verbose(), 0);
}

#[test]
fn contexts_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut ctx = Context::with_defaults().unwrap();
                ctx.evaluate(&format!("{i} * 10 + 1"), EvalFlags::empty())
                    .unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Term::Integer(i as i64 * 10 + 1));
    }
}

#[test]
fn error_code_descriptions() {
    assert_eq!(error_code_to_string(ErrorCode::Success), "Success");
    for code in [
        ErrorCode::Lexical,
        ErrorCode::Syntax,
        ErrorCode::Type,
        ErrorCode::Domain,
        ErrorCode::Resource,
    ] {
        let description = error_code_to_string(code);
        assert!(!description.is_empty());
        assert_eq!(description, code.to_string());
    }
}
