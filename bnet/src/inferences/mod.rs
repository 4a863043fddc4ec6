use fnv::FnvHashSet;
use errors::*;
use factors::Factor;

mod variable_elimination;
mod brute_force;

pub use self::variable_elimination::{ VariableElimination, infer };
pub use self::brute_force::BruteForce;

/// An exact inference engine answering P(remaining variables | evidence)
pub trait Inference: Sync + Send {
    /// Restrict `factors` by `evidence`, sum out `hidden` and normalize whatever is left
    fn infer(&self, factors: &[Factor], hidden: &[&str], evidence: &[(&str, bool)]) -> Result<Factor>;
}

/// Restrict every factor by every evidence binding, in order. A factor that does not mention
/// an evidence variable is kept as it is.
pub fn restrict_all(factors: &[Factor], evidence: &[(&str, bool)]) -> Result<Vec<Factor>> {
    let mut current = factors.to_vec();
    for &(var, value) in evidence {
        current = current.into_iter()
            .map(|factor| match factor.restrict(var, value) {
                Ok(restricted) => Ok(restricted),
                Err(ref e) if e.is_unknown_variable() => Ok(factor),
                Err(e) => Err(e)
            })
            .collect::<Result<Vec<Factor>>>()?;
    }

    Ok(current)
}

/// Variables that are neither queried nor observed, in the order they first appear in `factors`
pub fn hidden_variables<'a>(factors: &'a [Factor], query: &[&str], evidence: &[(&str, bool)]) -> Vec<&'a str> {
    let mut seen: FnvHashSet<&str> = query.iter().cloned().collect();
    seen.extend(evidence.iter().map(|&(v, _)| v));

    let mut hidden = Vec::new();
    for factor in factors {
        for var in factor.variables() {
            if seen.insert(var.as_str()) {
                hidden.push(var.as_str());
            }
        }
    }
    hidden
}

/// Compute P(query | evidence), eliminating every other variable in the order it first appears.
///
/// The result's variables follow the order of `query`.
pub fn query<I: Inference + ?Sized>(engine: &I, factors: &[Factor], query: &[&str], evidence: &[(&str, bool)]) -> Result<Factor> {
    for &var in query {
        if !factors.iter().any(|f| f.contains(var)) {
            bail!(ErrorKind::UnknownVariable(var.to_owned()));
        }
        if evidence.iter().any(|&(v, _)| v == var) {
            bail!("variable '{}' cannot be both queried and observed", var);
        }
    }

    let hidden = hidden_variables(factors, query, evidence);
    debug!("query {:?} given {:?}, hidden variables: {:?}", query, evidence, hidden);
    engine.infer(factors, &hidden, evidence)?.reorder(query)
}
