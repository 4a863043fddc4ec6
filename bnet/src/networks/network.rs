use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use fnv::{ FnvHashMap, FnvHashSet };
use itertools::Itertools;
use serde_json;
use serde_yaml;
use errors::*;
use factors::{ Factor, iter_assignments };

/// A boolean node and its conditional probability table.
///
/// `probabilities[i]` is P(node = true | parents = i-th parent assignment), where parent
/// assignments are enumerated as a truth table: (T, T), (T, F), (F, T), (F, F).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    #[serde(default)]
    parents: Vec<String>,
    probabilities: Vec<f64>,
}

impl Node {
    pub(crate) fn new<S: Into<String>>(name: S, parents: Vec<String>, probabilities: Vec<f64>) -> Node {
        Node { name: name.into(), parents, probabilities }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// The conditional probability table as a factor over `[name] + parents`
    pub fn factor(&self) -> Result<Factor> {
        let n_rows = 1usize << self.parents.len();
        if self.probabilities.len() != n_rows {
            bail!(ErrorKind::InvalidNetwork(format!("node '{}' needs {} probabilities, got {}",
                                                    self.name, n_rows, self.probabilities.len())));
        }

        let mut variables = Vec::with_capacity(self.parents.len() + 1);
        variables.push(self.name.clone());
        variables.extend(self.parents.iter().cloned());

        let mut entries = Vec::with_capacity(2 * self.probabilities.len());
        iter_assignments(self.parents.len(), |i, parent_vals| {
            let p = self.probabilities[i];
            for &(value, weight) in &[(true, p), (false, 1.0 - p)] {
                let mut assignment = Vec::with_capacity(parent_vals.len() + 1);
                assignment.push(value);
                assignment.extend_from_slice(parent_vals);
                entries.push((assignment, weight));
            }
        });

        Ok(Factor::new(variables, entries))
    }
}

/// A Bayesian network over boolean variables, given as explicit data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BayesNetwork {
    #[serde(default)]
    name: String,
    nodes: Vec<Node>,
}

impl BayesNetwork {
    /// Create and validate a network
    pub fn new<S: Into<String>>(name: S, nodes: Vec<Node>) -> Result<BayesNetwork> {
        let network = BayesNetwork { name: name.into(), nodes };
        network.validate()?;
        Ok(network)
    }

    /// Load a network from a yaml (or json, which is also yaml) file
    pub fn from_file(fnetwork: &Path) -> Result<BayesNetwork> {
        let reader = BufReader::new(File::open(fnetwork)?);
        let network: BayesNetwork = serde_yaml::from_reader(reader)?;
        network.validate()
            .chain_err(|| format!("Invalid network definition in {}", fnetwork.display()))?;
        Ok(network)
    }

    pub fn from_yaml_str(content: &str) -> Result<BayesNetwork> {
        let network: BayesNetwork = serde_yaml::from_str(content)?;
        network.validate()?;
        Ok(network)
    }

    pub fn from_json_str(content: &str) -> Result<BayesNetwork> {
        let network: BayesNetwork = serde_json::from_str(content)?;
        network.validate()?;
        Ok(network)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn variables(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    /// One factor per node, in declaration order
    pub fn factors(&self) -> Result<Vec<Factor>> {
        self.nodes.iter().map(|n| n.factor()).collect()
    }

    /// Check names, parents, table sizes and probabilities, and that the graph has no cycle
    pub fn validate(&self) -> Result<()> {
        let mut names: FnvHashSet<&str> = Default::default();
        for node in &self.nodes {
            if !names.insert(node.name.as_str()) {
                bail!(ErrorKind::InvalidNetwork(format!("node '{}' is defined more than once", node.name)));
            }
        }

        for node in &self.nodes {
            let mut parents: FnvHashSet<&str> = Default::default();
            for parent in &node.parents {
                if parent == &node.name {
                    bail!(ErrorKind::InvalidNetwork(format!("node '{}' is its own parent", node.name)));
                }
                if !names.contains(parent.as_str()) {
                    bail!(ErrorKind::InvalidNetwork(format!("parent '{}' of node '{}' is not defined", parent, node.name)));
                }
                if !parents.insert(parent.as_str()) {
                    bail!(ErrorKind::InvalidNetwork(format!("parent '{}' of node '{}' is listed twice", parent, node.name)));
                }
            }

            let expected = 1usize << node.parents.len();
            if node.probabilities.len() != expected {
                bail!(ErrorKind::InvalidNetwork(format!(
                    "node '{}' has parents [{}] so it needs {} probabilities, got {}",
                    node.name, node.parents.iter().join(", "), expected, node.probabilities.len())));
            }

            if let Some(p) = node.probabilities.iter().find(|&&p| !(p >= 0.0 && p <= 1.0)) {
                bail!(ErrorKind::InvalidNetwork(format!("probability {} of node '{}' is not in [0, 1]", p, node.name)));
            }
        }

        self.topological_order()?;
        Ok(())
    }

    /// Node names ordered so that every parent comes before its children (Kahn's algorithm)
    pub fn topological_order(&self) -> Result<Vec<&str>> {
        let mut n_missing_parents: FnvHashMap<&str, usize> = self.nodes.iter()
            .map(|n| (n.name.as_str(), n.parents.len()))
            .collect();
        let mut children: FnvHashMap<&str, Vec<&str>> = Default::default();
        for node in &self.nodes {
            for parent in &node.parents {
                children.entry(parent.as_str()).or_insert_with(Vec::new).push(node.name.as_str());
            }
        }

        let mut queue: VecDeque<&str> = self.nodes.iter()
            .filter(|n| n.parents.is_empty())
            .map(|n| n.name.as_str())
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(name) = queue.pop_front() {
            order.push(name);
            if let Some(node_children) = children.get(name) {
                for &child in node_children {
                    if let Some(count) = n_missing_parents.get_mut(child) {
                        *count -= 1;
                        if *count == 0 {
                            queue.push_back(child);
                        }
                    }
                }
            }
        }

        if order.len() != self.nodes.len() {
            let cyclic = self.nodes.iter()
                .map(|n| n.name.as_str())
                .filter(|name| !order.contains(name))
                .join(", ");
            bail!(ErrorKind::InvalidNetwork(format!("the graph has a cycle among [{}]", cyclic)));
        }

        Ok(order)
    }
}
