use fnv::{ FnvHashMap, FnvHashSet };
use errors::*;
use factors::assignment::{ Assignment, project };

/// One row of a factor table
pub type Entry = (Assignment, f64);

/// A table mapping assignments of an ordered set of boolean variables to non-negative weights.
///
/// Factors are immutable: `restrict`, `multiply`, `sumout` and `normalize` all return a new
/// factor, so one factor can be shared by many elimination runs (and threads) at once.
/// The order of `variables` only decides how assignments are laid out, not what distribution
/// the factor represents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    variables: Vec<String>,
    entries: Vec<Entry>,
}

impl Factor {
    /// Create a factor, keeping the given order of variables and entries.
    ///
    /// Nothing is validated; a partial table (e.g. the output of `restrict`) is a valid factor.
    /// Every assignment must still hold exactly one value per variable: the operators index
    /// assignments by variable position and panic on a shorter one. Use `Factor::checked` for
    /// tables coming from outside.
    pub fn new<S: Into<String>>(variables: Vec<S>, entries: Vec<Entry>) -> Factor {
        Factor {
            variables: variables.into_iter().map(|v| v.into()).collect(),
            entries
        }
    }

    /// Same as `Factor::new` but rejects duplicated variables, assignments of the wrong length,
    /// duplicated assignments and negative (or non-finite) weights
    pub fn checked<S: Into<String>>(variables: Vec<S>, entries: Vec<Entry>) -> Result<Factor> {
        let factor = Factor::new(variables, entries);

        let mut seen_vars: FnvHashSet<&str> = Default::default();
        for var in &factor.variables {
            if !seen_vars.insert(var.as_str()) {
                bail!(ErrorKind::InvalidFactor(format!("variable '{}' appears more than once", var)));
            }
        }

        let mut seen_assignments: FnvHashSet<&[bool]> = Default::default();
        for &(ref assignment, weight) in &factor.entries {
            if assignment.len() != factor.variables.len() {
                bail!(ErrorKind::InvalidFactor(format!(
                    "assignment {:?} has {} values but the factor has {} variables",
                    assignment, assignment.len(), factor.variables.len())));
            }
            if !seen_assignments.insert(assignment.as_slice()) {
                bail!(ErrorKind::InvalidFactor(format!("assignment {:?} appears more than once", assignment)));
            }
            if !weight.is_finite() || weight < 0.0 {
                bail!(ErrorKind::InvalidFactor(format!("weight of {:?} must be non-negative, got {}", assignment, weight)));
            }
        }

        Ok(factor)
    }

    /// The factor without variables and a single weight 1, identity of `multiply`
    pub fn unit() -> Factor {
        Factor {
            variables: Vec::new(),
            entries: vec![(Vec::new(), 1.0)]
        }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, var: &str) -> bool {
        self.position(var).is_some()
    }

    pub fn position(&self, var: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == var)
    }

    pub(crate) fn position_or_err(&self, var: &str) -> Result<usize> {
        match self.position(var) {
            Some(idx) => Ok(idx),
            None => Err(ErrorKind::UnknownVariable(var.to_owned()).into())
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w).sum()
    }

    /// Weight of an assignment (aligned with `variables`), `None` if the table has no such row
    pub fn value(&self, assignment: &[bool]) -> Option<f64> {
        self.entries.iter()
            .find(|&&(ref a, _)| a.as_slice() == assignment)
            .map(|&(_, w)| w)
    }

    /// Lookup table of the weights, keyed by assignment
    pub fn weights(&self) -> FnvHashMap<Assignment, f64> {
        self.entries.iter().cloned().collect()
    }

    /// Permute the variables into `order`, keeping the represented distribution.
    ///
    /// `order` must name every variable of the factor exactly once.
    pub fn reorder<S: AsRef<str>>(&self, order: &[S]) -> Result<Factor> {
        let positions = order.iter()
            .map(|v| self.position_or_err(v.as_ref()))
            .collect::<Result<Vec<usize>>>()?;

        let distinct: FnvHashSet<usize> = positions.iter().cloned().collect();
        if positions.len() != self.variables.len() || distinct.len() != positions.len() {
            bail!(ErrorKind::InvalidFactor(format!(
                "{:?} is not a permutation of {:?}",
                order.iter().map(|v| v.as_ref()).collect::<Vec<&str>>(), self.variables)));
        }

        Ok(Factor {
            variables: positions.iter().map(|&i| self.variables[i].clone()).collect(),
            entries: self.entries.iter()
                .map(|&(ref a, w)| (project(a, &positions), w))
                .collect()
        })
    }

    /// Compare two factors regardless of their variable order. Assignments missing from one
    /// table count as weight 0.
    pub fn approx_eq(&self, other: &Factor, tolerance: f64) -> bool {
        if self.variables.len() != other.variables.len() ||
            self.variables.iter().any(|v| !other.contains(v)) {
            return false;
        }

        let other = match other.reorder(&self.variables) {
            Ok(f) => f,
            Err(_) => return false
        };

        let lhs = self.weights();
        let rhs = other.weights();

        lhs.iter().all(|(a, &w)| (w - rhs.get(a).cloned().unwrap_or(0.0)).abs() <= tolerance) &&
            rhs.iter().all(|(a, &w)| (w - lhs.get(a).cloned().unwrap_or(0.0)).abs() <= tolerance)
    }
}
