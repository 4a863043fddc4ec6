use permutohedron::heap_recursive;
use bnet::errors::ErrorKind;
use bnet::factors::*;
use bnet::inferences::*;
use bnet::settings::InferenceConf;
use utils::*;

#[test]
fn test_chain_network() {
    let factors = chain_factors();
    let p_c = infer(&factors, &["a", "b"], &[]).unwrap();

    assert_eq!(p_c.variables(), &["c".to_owned()]);
    assert_approx(p_c.value(&[true]).unwrap(), 0.625, 1e-6);
    assert_approx(p_c.value(&[false]).unwrap(), 0.375, 1e-6);

    let p_b = infer(&factors, &["a", "c"], &[]).unwrap();
    assert_eq!(p_b.variables(), &["b".to_owned()]);
    assert_approx(p_b.value(&[true]).unwrap(), 0.85, 1e-6);
    assert_approx(p_b.value(&[false]).unwrap(), 0.15, 1e-6);
}

#[test]
fn test_chain_network_with_evidence() {
    let factors = chain_factors();
    let p_c = infer(&factors, &["b"], &[("a", false)]).unwrap();

    assert_eq!(p_c.variables(), &["c".to_owned()]);
    assert_approx(p_c.value(&[true]).unwrap(), 0.4, 1e-9);
    assert_approx(p_c.value(&[false]).unwrap(), 0.6, 1e-9);

    // observing a child changes the belief about its parent
    let p_a = infer(&factors, &["b"], &[("c", true)]).unwrap();
    let p_c_given_a = 0.9 * 0.7 + 0.1 * 0.2;
    let expected = 0.9 * p_c_given_a / 0.625;
    assert_approx(p_a.value(&[true]).unwrap(), expected, 1e-9);
}

#[test]
fn test_elimination_order_invariance() {
    let network = fraud_network();
    let factors = network.factors().unwrap();
    let mut hidden = vec!["Trav", "OC", "CRP", "FP", "IP"];
    let expected = infer(&factors, &hidden, &[]).unwrap();

    assert_eq!(expected.variables(), &["Fraud".to_owned()]);
    let mut n_orders = 0;
    heap_recursive(&mut hidden, |order| {
        let result = infer(&factors, order, &[]).unwrap();
        assert!(result.approx_eq(&expected, 1e-9), "order {:?}: {:?} != {:?}", order, result, expected);
        n_orders += 1;
    });
    assert_eq!(n_orders, 120);
}

#[test]
fn test_elimination_order_invariance_with_evidence() {
    let factors = fraud_network().factors().unwrap();
    let evidence = [("FP", true), ("IP", false), ("CRP", true)];
    let mut hidden = vec!["Trav", "OC"];
    let expected = infer(&factors, &hidden, &evidence).unwrap();

    heap_recursive(&mut hidden, |order| {
        assert!(infer(&factors, order, &evidence).unwrap().approx_eq(&expected, 1e-9));
    });

    // evidence order does not matter either
    let reversed = [("CRP", true), ("IP", false), ("FP", true)];
    assert!(infer(&factors, &["OC", "Trav"], &reversed).unwrap().approx_eq(&expected, 1e-9));
}

#[test]
fn test_fraud_prior() {
    let factors = fraud_network().factors().unwrap();
    let engine = VariableElimination::default();

    let p_fraud = query(&engine, &factors, &["Fraud"], &[]).unwrap();
    assert_approx(p_fraud.value(&[true]).unwrap(), 0.05 * 0.01 + 0.95 * 0.004, 1e-9);

    // fraud only depends on travelling
    let p_fraud = query(&engine, &factors, &["Fraud"], &[("Trav", true)]).unwrap();
    assert_approx(p_fraud.value(&[true]).unwrap(), 0.01, 1e-9);
}

#[test]
fn test_query_multiple_variables() {
    let factors = chain_factors();
    let engine = VariableElimination::default();
    let joint = query(&engine, &factors, &["c", "a"], &[]).unwrap();

    assert_eq!(joint.variables(), &["c".to_owned(), "a".to_owned()]);
    assert_approx(joint.total(), 1.0, 1e-9);
    assert_approx(joint.value(&[true, true]).unwrap(), 0.9 * (0.9 * 0.7 + 0.1 * 0.2), 1e-9);
    assert_approx(joint.value(&[true, false]).unwrap(), 0.1 * (0.4 * 0.7 + 0.6 * 0.2), 1e-9);
}

#[test]
fn test_query_errors() {
    let factors = chain_factors();
    let engine = VariableElimination::default();

    assert!(query(&engine, &factors, &["z"], &[]).unwrap_err().is_unknown_variable());
    assert!(query(&engine, &factors, &["a"], &[("a", true)]).is_err());
}

#[test]
fn test_hidden_variables() {
    let factors = chain_factors();
    assert_eq!(hidden_variables(&factors, &["c"], &[]), vec!["a", "b"]);
    assert_eq!(hidden_variables(&factors, &["a"], &[("b", true)]), vec!["c"]);
    assert!(hidden_variables(&factors, &["a", "b", "c"], &[]).is_empty());
}

#[test]
fn test_evidence_not_in_factor() {
    let factors = chain_factors();
    let restricted = restrict_all(&factors, &[("z", true)]).unwrap();
    assert_eq!(restricted, factors);

    let restricted = restrict_all(&factors, &[("a", true)]).unwrap();
    assert_eq!(restricted[0].variables().len(), 0);
    assert_eq!(restricted[1].variables(), &["b".to_owned()]);
    assert_eq!(restricted[2], factors[2]);

    let p_c = infer(&factors, &["a", "b"], &[("z", false)]).unwrap();
    assert_approx(p_c.value(&[true]).unwrap(), 0.625, 1e-9);
}

#[test]
fn test_absent_hidden_variable_is_skipped() {
    let factors = chain_factors();
    let expected = infer(&factors, &["a", "b"], &[]).unwrap();
    let result = infer(&factors, &["a", "zz", "b", "a"], &[]).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_no_hidden_variable_gives_joint() {
    let factors = chain_factors();
    let joint = infer(&factors, &[], &[]).unwrap();

    assert_eq!(joint.variables(), &["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    assert_eq!(joint.len(), 8);
    assert_approx(joint.total(), 1.0, 1e-9);
}

#[test]
fn test_contradictory_evidence() {
    let certain = Factor::new(vec!["a"], vec![(vec![true], 1.0), (vec![false], 0.0)]);
    let child = Factor::new(vec!["b", "a"], vec![
        (vec![true, true], 0.5),
        (vec![false, true], 0.5),
        (vec![true, false], 0.5),
        (vec![false, false], 0.5)]);

    let err = infer(&[certain, child], &[], &[("a", false)]).unwrap_err();
    match *err.kind() {
        ErrorKind::DegenerateNormalization => {},
        ref kind => panic!("unexpected error: {}", kind)
    }
}

#[test]
fn test_scope_limit() {
    let factors = chain_factors();
    let engine = VariableElimination::new(InferenceConf::with_max_scope_size(2));

    // the joint over a, b, c is too large
    match *engine.infer(&factors, &[], &[]).unwrap_err().kind() {
        ErrorKind::ScopeTooLarge(3, 2) => {},
        ref kind => panic!("unexpected error: {}", kind)
    }

    // eliminating along the chain keeps every product small enough
    let p_c = engine.infer(&factors, &["a", "b"], &[]).unwrap();
    assert_approx(p_c.value(&[true]).unwrap(), 0.625, 1e-9);
}

#[test]
fn test_wide_partial_factors() {
    // two single-row factors over 13 variables each: the product has 26 variables but one row
    let a_vars: Vec<String> = (0..13).map(|i| format!("a{}", i)).collect();
    let b_vars: Vec<String> = (0..13).map(|i| format!("b{}", i)).collect();
    let factors = vec![
        Factor::new(a_vars.clone(), vec![(vec![true; 13], 2.0)]),
        Factor::new(b_vars.clone(), vec![(vec![false; 13], 3.0)]),
    ];

    let result = infer(&factors, &[], &[]).unwrap();
    assert_eq!(result.variables().len(), 26);
    assert_eq!(&result.variables()[..13], &a_vars[..]);
    assert_eq!(&result.variables()[13..], &b_vars[..]);
    assert_eq!(result.len(), 1);

    let mut expected = vec![true; 13];
    expected.extend(vec![false; 13]);
    assert_eq!(result.entries()[0], (expected, 1.0));

    // the same query is refused only when a limit is configured
    let limited = VariableElimination::new(InferenceConf::with_max_scope_size(24));
    match *limited.infer(&factors, &[], &[]).unwrap_err().kind() {
        ErrorKind::ScopeTooLarge(26, 24) => {},
        ref kind => panic!("unexpected error: {}", kind)
    }
}

#[test]
fn test_eliminate_step() {
    let factors = chain_factors();
    let engine = VariableElimination::default();

    let after_a = engine.eliminate(factors.clone(), "a").unwrap();
    assert_eq!(after_a.len(), 2);
    assert_eq!(after_a[0], factors[2]);
    assert_eq!(after_a[1].variables(), &["b".to_owned()]);

    let untouched = engine.eliminate(factors.clone(), "zz").unwrap();
    assert_eq!(untouched, factors);
}
