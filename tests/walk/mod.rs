use failchain::kind;
use failchain::prelude::*;

failure_kind!(PARSE = "parse");
failure_kind!(IO = "io");
failure_kind!(LAYER = "layer");
failure_kind!(ABORT = "abort", extends kind::UNCHECKED);

// a -> b -> a, built with the late cause bind.
fn cyclic_pair() -> (Failure, Failure) {
    let a = Failure::with_message(&PARSE, "a");
    let b = Failure::with_cause(&IO, "b", a.clone());
    a.init_cause(b.clone()).unwrap();
    (a, b)
}

#[test]
fn root_cause_of_failure_without_cause_is_itself() {
    let failure = Failure::new(&PARSE);
    let root = root_cause(Some(&failure)).unwrap();
    assert!(Failure::ptr_eq(&root, &failure));
}

#[test]
fn root_cause_follows_single_link() {
    let inner = Failure::new(&PARSE);
    let outer = Failure::with_cause(&IO, "read failed", inner.clone());
    let root = root_cause(Some(&outer)).unwrap();
    assert!(Failure::ptr_eq(&root, &inner));
}

#[test]
fn root_cause_follows_double_link() {
    let inner = Failure::new(&PARSE);
    let middle = Failure::with_cause(&IO, "read failed", inner.clone());
    let outer = Failure::with_cause(&IO, "load failed", middle);
    let root = root_cause(Some(&outer)).unwrap();
    assert!(Failure::ptr_eq(&root, &inner));
}

#[test]
fn root_cause_requires_a_failure() {
    let failure = root_cause(None).unwrap_err();
    assert!(failure.is_a(&kind::INVALID_ARGUMENT));
}

#[test]
fn root_cause_raises_on_cyclic_chain() {
    let (a, b) = cyclic_pair();
    assert!(root_cause(Some(&a)).unwrap_err().is_a(&kind::ILLEGAL_STATE));
    assert!(root_cause(Some(&b)).unwrap_err().is_a(&kind::ILLEGAL_STATE));
}

#[test]
fn causal_chain_orders_from_failure_to_root() {
    let c = Failure::new(&PARSE);
    let u = Failure::with_cause(&IO, "u", c.clone());
    let w = Failure::with_cause(&IO, "w", u.clone());

    let chain = causal_chain(Some(&w)).unwrap();
    assert_eq!(chain.len(), 3);
    assert!(Failure::ptr_eq(&chain[0], &w));
    assert!(Failure::ptr_eq(&chain[1], &u));
    assert!(Failure::ptr_eq(&chain[2], &c));
}

#[test]
fn causal_chain_of_root_is_single_link() {
    let failure = Failure::new(&PARSE);
    let chain = causal_chain(Some(&failure)).unwrap();
    assert_eq!(chain.len(), 1);
    assert!(Failure::ptr_eq(chain.head(), &failure));
    assert!(Failure::ptr_eq(chain.root(), &failure));
}

#[test]
fn causal_chain_requires_a_failure() {
    let failure = causal_chain(None).unwrap_err();
    assert!(failure.is_a(&kind::INVALID_ARGUMENT));
}

#[test]
fn causal_chain_truncates_cyclic_chain() {
    let (a, b) = cyclic_pair();

    let from_a = causal_chain(Some(&a)).unwrap();
    assert_eq!(from_a.len(), 2);
    assert!(Failure::ptr_eq(&from_a[0], &a));
    assert!(Failure::ptr_eq(&from_a[1], &b));

    let from_b = causal_chain(Some(&b)).unwrap();
    assert_eq!(from_b.len(), 2);
    assert!(Failure::ptr_eq(&from_b[0], &b));
    assert!(Failure::ptr_eq(&from_b[1], &a));
}

#[test]
fn causal_chain_is_a_snapshot() {
    let failure = Failure::new(&PARSE);
    let before = causal_chain(Some(&failure)).unwrap();

    failure.init_cause(Failure::new(&IO)).unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(causal_chain(Some(&failure)).unwrap().len(), 2);
}

#[test]
fn deep_chains_traverse_without_recursion() {
    let leaf = Failure::with_message(&PARSE, "leaf");
    let mut failure = leaf.clone();
    for level in 0..2048 {
        failure = Failure::with_cause(&LAYER, format!("layer {level}"), failure);
    }

    let root = root_cause(Some(&failure)).unwrap();
    assert!(Failure::ptr_eq(&root, &leaf));
    assert_eq!(causal_chain(Some(&failure)).unwrap().len(), 2049);
}

#[test]
fn inherent_forms_match_free_functions() {
    let inner = Failure::new(&PARSE);
    let outer = Failure::with_cause(&IO, "read failed", inner.clone());

    assert!(Failure::ptr_eq(&outer.root_cause().unwrap(), &inner));
    assert_eq!(outer.causal_chain().len(), 2);
}

#[test]
fn chain_display_cascades_causes() {
    let inner = Failure::with_message(&PARSE, "unexpected token");
    let outer = Failure::with_cause(&IO, "manifest unreadable", inner);

    let rendered = causal_chain(Some(&outer)).unwrap().to_string();
    assert_eq!(
        rendered,
        "io: manifest unreadable\n  caused by: parse: unexpected token"
    );
}

// Checked failure C under two unchecked wrappers: the classifier and the
// walker agree on what propagates and what the chain looks like.
#[test]
fn checked_root_under_unchecked_wrappers() {
    let c = Failure::new(&PARSE);
    let u = Failure::with_cause(&ABORT, "u", c.clone());
    let w = Failure::with_cause(&ABORT, "w", u.clone());

    assert!(Failure::ptr_eq(&root_cause(Some(&w)).unwrap(), &c));

    let chain = causal_chain(Some(&w)).unwrap();
    assert_eq!(chain.len(), 3);
    assert!(Failure::ptr_eq(&chain[0], &w));
    assert!(Failure::ptr_eq(&chain[1], &u));
    assert!(Failure::ptr_eq(&chain[2], &c));

    assert!(Failure::ptr_eq(&rethrow_if_unchecked(Some(&u)).unwrap_err(), &u));
    assert!(rethrow_if_unchecked(Some(&c)).is_ok());
}
