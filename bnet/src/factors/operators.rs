use std::ops::Mul;
use fnv::FnvHashMap;
use errors::*;
use factors::assignment::{ Assignment, project };
use factors::factor::Factor;

impl Factor {
    /// Fix `var` to `value`: keep the rows that agree and drop `var` from the scope.
    ///
    /// Fails with `UnknownVariable` if `var` is not in the scope of this factor.
    pub fn restrict(&self, var: &str, value: bool) -> Result<Factor> {
        let idx = self.position_or_err(var)?;
        let variables: Vec<String> = self.variables().iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, v)| v.clone())
            .collect();

        let entries = self.entries().iter()
            .filter(|&&(ref a, _)| a[idx] == value)
            .map(|&(ref a, w)| {
                let mut assignment = a.clone();
                assignment.remove(idx);
                (assignment, w)
            })
            .collect::<Vec<_>>();

        trace!("restrict {}={} : {} -> {} entries", var, value, self.len(), entries.len());
        Ok(Factor::new(variables, entries))
    }

    /// Join two factors on their shared variables.
    ///
    /// The output variables are: variables only in `self`, shared variables (in `self`'s order),
    /// then variables only in `other`. Every pair of rows that agree on the shared variables
    /// produces one row weighted by the product of both weights.
    pub fn multiply(&self, other: &Factor) -> Factor {
        let mut self_only = Vec::new();
        let mut self_common = Vec::new();
        let mut other_common = Vec::new();
        for (i, var) in self.variables().iter().enumerate() {
            match other.position(var) {
                Some(j) => {
                    self_common.push(i);
                    other_common.push(j);
                },
                None => self_only.push(i)
            }
        }
        let other_only: Vec<usize> = (0..other.variables().len())
            .filter(|j| !other_common.contains(j))
            .collect();

        let variables: Vec<String> = self_only.iter().chain(self_common.iter())
            .map(|&i| self.variables()[i].clone())
            .chain(other_only.iter().map(|&j| other.variables()[j].clone()))
            .collect();

        // index rows of `other` by their values on the shared variables
        let mut other_index: FnvHashMap<Assignment, Vec<usize>> = Default::default();
        for (j, &(ref a, _)) in other.entries().iter().enumerate() {
            other_index.entry(project(a, &other_common)).or_insert_with(Vec::new).push(j);
        }

        let mut entries = Vec::new();
        for &(ref self_assignment, self_weight) in self.entries() {
            let shared = project(self_assignment, &self_common);
            let matches = match other_index.get(&shared) {
                Some(matches) => matches,
                None => continue
            };

            for &j in matches {
                let (ref other_assignment, other_weight) = other.entries()[j];
                let mut assignment = Vec::with_capacity(variables.len());
                assignment.extend(self_only.iter().map(|&i| self_assignment[i]));
                assignment.extend_from_slice(&shared);
                assignment.extend(other_only.iter().map(|&j| other_assignment[j]));
                entries.push((assignment, self_weight * other_weight));
            }
        }

        trace!("multiply {:?} x {:?} : {} x {} -> {} entries",
               self.variables(), other.variables(), self.len(), other.len(), entries.len());
        Factor::new(variables, entries)
    }

    /// Marginalize `var` away by summing the weights of rows that agree on every other variable.
    ///
    /// Rows of the result keep the order in which their group first appears.
    /// Fails with `UnknownVariable` if `var` is not in the scope of this factor.
    pub fn sumout(&self, var: &str) -> Result<Factor> {
        let idx = self.position_or_err(var)?;
        let kept: Vec<usize> = (0..self.variables().len()).filter(|&i| i != idx).collect();
        let variables: Vec<String> = kept.iter().map(|&i| self.variables()[i].clone()).collect();

        let mut group_index: FnvHashMap<Assignment, usize> = Default::default();
        let mut entries: Vec<(Assignment, f64)> = Vec::new();
        for &(ref a, w) in self.entries() {
            let key = project(a, &kept);
            if let Some(&k) = group_index.get(&key) {
                entries[k].1 += w;
                continue;
            }

            group_index.insert(key.clone(), entries.len());
            entries.push((key, w));
        }

        trace!("sumout {} : {} -> {} entries", var, self.len(), entries.len());
        Ok(Factor::new(variables, entries))
    }

    /// Rescale the weights so they sum to 1.
    ///
    /// Fails with `DegenerateNormalization` when all weights are zero, which happens when the
    /// evidence contradicts the network.
    pub fn normalize(&self) -> Result<Factor> {
        let total = self.total();
        if total == 0.0 {
            bail!(ErrorKind::DegenerateNormalization);
        }

        let entries = self.entries().iter()
            .map(|&(ref a, w)| (a.clone(), w / total))
            .collect::<Vec<_>>();
        Ok(Factor::new(self.variables().to_vec(), entries))
    }
}

impl<'a, 'b> Mul<&'b Factor> for &'a Factor {
    type Output = Factor;

    fn mul(self, other: &'b Factor) -> Factor {
        self.multiply(other)
    }
}

/// Multiply factors from left to right; the product of nothing is `Factor::unit()`
pub fn fold_product<'a, I>(factors: I) -> Factor
    where I: IntoIterator<Item=&'a Factor>
{
    let mut iter = factors.into_iter();
    let first = match iter.next() {
        Some(f) => f.clone(),
        None => return Factor::unit()
    };

    iter.fold(first, |product, f| product.multiply(f))
}
