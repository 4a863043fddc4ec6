use fnv::FnvHashMap;
use errors::*;
use factors::{ Factor, Assignment, iter_assignments, project };
use inferences::{ Inference, restrict_all };
use settings::InferenceConf;

/// Reference engine: enumerates every joint assignment of the (restricted) network and adds its
/// weight to the matching assignment of the kept variables. Exponential in the number of
/// variables, so only usable on small networks or to cross-check other engines.
pub struct BruteForce {
    conf: InferenceConf
}

impl Default for BruteForce {
    fn default() -> BruteForce {
        BruteForce::new(InferenceConf::default())
    }
}

impl BruteForce {
    pub fn new(conf: InferenceConf) -> BruteForce {
        BruteForce { conf }
    }
}

impl Inference for BruteForce {
    fn infer(&self, factors: &[Factor], hidden: &[&str], evidence: &[(&str, bool)]) -> Result<Factor> {
        let restricted = restrict_all(factors, evidence)?;

        let mut variables: Vec<&str> = Vec::new();
        for factor in &restricted {
            for var in factor.variables() {
                if !variables.contains(&var.as_str()) {
                    variables.push(var.as_str());
                }
            }
        }
        self.conf.check_scope(variables.len())?;

        let kept: Vec<usize> = (0..variables.len())
            .filter(|&i| !hidden.contains(&variables[i]))
            .collect();

        // for each factor: position of its variables in the joint assignment, and its weights
        let tables: Vec<(Vec<usize>, FnvHashMap<Assignment, f64>)> = restricted.iter()
            .map(|f| {
                let positions = f.variables().iter()
                    .map(|v| variables.iter().position(|u| *u == v.as_str()).unwrap_or(0))
                    .collect();
                (positions, f.weights())
            })
            .collect();

        let mut group_index: FnvHashMap<Assignment, usize> = Default::default();
        let mut entries: Vec<(Assignment, f64)> = Vec::new();
        iter_assignments(variables.len(), |_, joint| {
            let weight: f64 = tables.iter()
                .map(|&(ref positions, ref weights)| {
                    // rows missing from a partial table have weight 0
                    weights.get(&project(joint, positions)).cloned().unwrap_or(0.0)
                })
                .product();

            let key = project(joint, &kept);
            match group_index.get(&key) {
                Some(&k) => entries[k].1 += weight,
                None => {
                    group_index.insert(key.clone(), entries.len());
                    entries.push((key, weight));
                }
            }
        });

        let kept_vars: Vec<&str> = kept.iter().map(|&i| variables[i]).collect();
        debug!("brute force over {} variables, kept {:?}", variables.len(), kept_vars);
        Factor::new(kept_vars, entries).normalize()
    }
}
