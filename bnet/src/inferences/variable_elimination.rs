use errors::*;
use factors::Factor;
use inferences::{ Inference, restrict_all };
use settings::InferenceConf;

/// Variable elimination with a caller-supplied elimination order.
///
/// The order only changes the size of the intermediate factors, never the answer.
pub struct VariableElimination {
    conf: InferenceConf
}

impl Default for VariableElimination {
    fn default() -> VariableElimination {
        VariableElimination::new(InferenceConf::default())
    }
}

impl VariableElimination {
    pub fn new(conf: InferenceConf) -> VariableElimination {
        VariableElimination { conf }
    }

    /// Replace the factors mentioning `var` by their product with `var` summed out
    pub fn eliminate(&self, factors: Vec<Factor>, var: &str) -> Result<Vec<Factor>> {
        let (involved, mut uninvolved): (Vec<Factor>, Vec<Factor>) = factors.into_iter()
            .partition(|f| f.contains(var));

        if involved.is_empty() {
            debug!("eliminate {}: no factor mentions it, skip", var);
            return Ok(uninvolved);
        }

        let n_involved = involved.len();
        let product = self.product(involved)?;
        let summed = product.sumout(var)?;
        debug!("eliminate {}: {} factors -> {:?} ({} entries)", var, n_involved, summed.variables(), summed.len());

        uninvolved.push(summed);
        Ok(uninvolved)
    }

    /// Multiply factors from left to right, checking every intermediate product against
    /// `max_scope_size` when one is configured
    pub fn product(&self, factors: Vec<Factor>) -> Result<Factor> {
        let mut iter = factors.into_iter();
        let mut product = match iter.next() {
            Some(f) => f,
            None => return Ok(Factor::unit())
        };

        for f in iter {
            product = product.multiply(&f);
            self.conf.check_scope(product.variables().len())?;
        }

        Ok(product)
    }
}

impl Inference for VariableElimination {
    fn infer(&self, factors: &[Factor], hidden: &[&str], evidence: &[(&str, bool)]) -> Result<Factor> {
        let mut current = restrict_all(factors, evidence)?;
        for &var in hidden {
            current = self.eliminate(current, var)?;
        }

        let result = self.product(current)?;
        debug!("final factor over {:?} ({} entries)", result.variables(), result.len());
        result.normalize()
    }
}

/// Variable elimination with default settings
pub fn infer(factors: &[Factor], hidden: &[&str], evidence: &[(&str, bool)]) -> Result<Factor> {
    VariableElimination::default().infer(factors, hidden, evidence)
}
