use errors::*;
use networks::network::{ BayesNetwork, Node };

/// Build a network from named probability tables:
///
/// ```
/// use bnet::networks::NetworkBuilder;
///
/// let network = NetworkBuilder::new("sprinkler")
///     .node("rain", &[], &[0.2])
///     .node("wet", &["rain"], &[0.9, 0.1])
///     .build()
///     .unwrap();
/// assert_eq!(network.variables(), vec!["rain", "wet"]);
/// ```
pub struct NetworkBuilder {
    name: String,
    nodes: Vec<Node>,
}

impl NetworkBuilder {
    pub fn new<S: Into<String>>(name: S) -> NetworkBuilder {
        NetworkBuilder { name: name.into(), nodes: Vec::new() }
    }

    /// Add a node; see `Node` for the layout of `probabilities`
    pub fn node(mut self, name: &str, parents: &[&str], probabilities: &[f64]) -> NetworkBuilder {
        self.nodes.push(Node::new(
            name,
            parents.iter().map(|&p| p.to_owned()).collect(),
            probabilities.to_vec()));
        self
    }

    pub fn build(self) -> Result<BayesNetwork> {
        BayesNetwork::new(self.name, self.nodes)
    }
}
