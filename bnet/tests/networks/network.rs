use std::path::Path;
use bnet::errors::ErrorKind;
use bnet::networks::*;
use utils::*;

fn assert_invalid(result: ::bnet::errors::Result<BayesNetwork>, reason_part: &str) {
    match result {
        Err(e) => match *e.kind() {
            ErrorKind::InvalidNetwork(ref reason) => assert!(reason.contains(reason_part), "{}", reason),
            ref kind => panic!("unexpected error: {}", kind)
        },
        Ok(network) => panic!("{:?} should be rejected", network)
    }
}

#[test]
fn test_builder() {
    let network = fraud_network();
    assert_eq!(network.name(), "fraud");
    assert_eq!(network.variables(), vec!["Trav", "Fraud", "OC", "CRP", "FP", "IP"]);
    assert_eq!(network.node("CRP").unwrap().parents(), &["OC".to_owned()]);
    assert!(network.node("XX").is_none());
}

#[test]
fn test_node_factor() {
    let network = fraud_network();
    let fp = network.node("FP").unwrap().factor().unwrap();

    assert_eq!(fp.variables(), &["FP".to_owned(), "Trav".to_owned(), "Fraud".to_owned()]);
    assert_eq!(fp.len(), 8);
    assert_eq!(fp.entries()[0], (vec![true, true, true], 0.9));
    assert_approx(fp.value(&[false, true, true]).unwrap(), 0.1, 1e-12);
    assert_eq!(fp.value(&[true, false, true]), Some(0.1));
    assert_eq!(fp.value(&[true, false, false]), Some(0.01));

    // each conditional distribution sums to one
    let factors = network.factors().unwrap();
    assert_eq!(factors.len(), 6);
    for factor in &factors {
        let child = factor.variables()[0].clone();
        let marginal = factor.sumout(&child).unwrap();
        for &(_, w) in marginal.entries() {
            assert_approx(w, 1.0, 1e-12);
        }
    }
}

#[test]
fn test_from_yaml_str() {
    let network = BayesNetwork::from_yaml_str(r#"
name: chain
nodes:
  - name: a
    probabilities: [0.9]
  - name: b
    parents: [a]
    probabilities: [0.9, 0.4]
  - name: c
    parents: [b]
    probabilities: [0.7, 0.2]
"#).unwrap();

    let expected = chain_factors();
    for (factor, expected) in network.factors().unwrap().iter().zip(expected.iter()) {
        assert!(factor.approx_eq(expected, 1e-12), "{:?} != {:?}", factor, expected);
    }
}

#[test]
fn test_json() {
    let network = BayesNetwork::from_json_str(
        r#"{"nodes": [{"name": "a", "probabilities": [0.25]}]}"#).unwrap();
    assert_eq!(network.name(), "");
    assert_eq!(network.variables(), vec!["a"]);

    // json is also yaml
    assert_eq!(BayesNetwork::from_yaml_str(&network.to_json().unwrap()).unwrap(), network);

    let fraud = fraud_network();
    assert_eq!(BayesNetwork::from_json_str(&fraud.to_json().unwrap()).unwrap(), fraud);
    assert!(BayesNetwork::from_json_str(r#"{"nodes": [{"name": "a", "probabilities": [2.0]}]}"#).is_err());
}

#[test]
fn test_from_file() {
    let fnetwork = Path::new(env!("CARGO_MANIFEST_DIR")).join("../exec/networks/fraud.yaml");
    let network = BayesNetwork::from_file(&fnetwork).unwrap();
    assert_eq!(network, fraud_network());

    assert!(BayesNetwork::from_file(Path::new("/not/exist/network.yaml")).is_err());
}

#[test]
fn test_validate() {
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &[], &[0.5])
                       .node("a", &[], &[0.5])
                       .build(), "more than once");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &["b"], &[0.5, 0.5])
                       .build(), "not defined");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &["a"], &[0.5, 0.5])
                       .build(), "its own parent");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &[], &[0.5])
                       .node("b", &["a", "a"], &[0.5, 0.5, 0.5, 0.5])
                       .build(), "listed twice");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &[], &[0.5])
                       .node("b", &["a"], &[0.5])
                       .build(), "needs 2 probabilities");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &[], &[1.5])
                       .build(), "not in [0, 1]");
    assert_invalid(NetworkBuilder::new("x")
                       .node("a", &["c"], &[0.5, 0.5])
                       .node("b", &["a"], &[0.5, 0.5])
                       .node("c", &["b"], &[0.5, 0.5])
                       .node("d", &[], &[0.5])
                       .build(), "cycle among [a, b, c]");
}

#[test]
fn test_topological_order() {
    let network = NetworkBuilder::new("x")
        .node("c", &["a", "b"], &[0.1, 0.2, 0.3, 0.4])
        .node("b", &["a"], &[0.5, 0.6])
        .node("a", &[], &[0.7])
        .build()
        .unwrap();

    assert_eq!(network.topological_order().unwrap(), vec!["a", "b", "c"]);
    assert_eq!(fraud_network().topological_order().unwrap(), vec!["Trav", "OC", "Fraud", "CRP", "FP", "IP"]);
}

#[test]
fn test_node_factor_short_table() {
    // a node read on its own skips network validation
    let node: Node = ::serde_yaml::from_str("name: x\nparents: [a]\nprobabilities: [0.3]\n").unwrap();
    match *node.factor().unwrap_err().kind() {
        ErrorKind::InvalidNetwork(ref reason) => assert!(reason.contains("needs 2 probabilities, got 1"), "{}", reason),
        ref kind => panic!("unexpected error: {}", kind)
    }

    let node: Node = ::serde_yaml::from_str("name: x\nparents: [a]\nprobabilities: [0.3, 0.6]\n").unwrap();
    assert_eq!(node.factor().unwrap().len(), 4);
}
