use std::cmp;
use std::fmt;
use factors::factor::Factor;
use settings::DisplayConf;

/// Format `value` with `digits` significant digits, dropping trailing zeros (like `%g` without
/// the exponent form)
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let digits = cmp::max(digits, 1) as i32;
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = cmp::max(digits - 1 - magnitude, 0) as usize;

    let mut repr = format!("{:.*}", decimals, value);
    if repr.contains('.') {
        let trimmed_len = repr.trim_end_matches('0').trim_end_matches('.').len();
        repr.truncate(trimmed_len);
    }
    repr
}

/// Renders a factor as one line per entry, e.g:
///
/// ```text
/// a  ~b 0.1
/// ```
pub struct FactorDisplay<'a> {
    factor: &'a Factor,
    conf: &'a DisplayConf,
}

impl Factor {
    pub fn display<'a>(&'a self, conf: &'a DisplayConf) -> FactorDisplay<'a> {
        FactorDisplay { factor: self, conf }
    }
}

impl<'a> fmt::Display for FactorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = &self.conf.negation_marker;
        // a column fits the widest possible cell, which is a negated variable
        let width = self.factor.variables().iter()
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0) + marker.chars().count();

        for &(ref assignment, weight) in self.factor.entries() {
            for (var, &val) in self.factor.variables().iter().zip(assignment.iter()) {
                let cell = if val { var.clone() } else { format!("{}{}", marker, var) };
                write!(f, "{:<width$} ", cell, width = width)?;
            }
            writeln!(f, "{}", format_significant(weight, self.conf.significant_digits))?;
        }

        Ok(())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(&DisplayConf::default()))
    }
}
