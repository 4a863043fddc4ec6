use std::fmt;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConf {
    // number of significant digits of a printed weight
    pub significant_digits: usize,
    // prefix of a variable that is assigned false, e.g: ~a
    pub negation_marker: String,
}

impl Default for DisplayConf {
    fn default() -> DisplayConf {
        DisplayConf {
            significant_digits: 4,
            negation_marker: "~".to_owned(),
        }
    }
}

impl fmt::Debug for DisplayConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
    significant_digits : {}
    negation_marker    : {:?}"#,
               self.significant_digits,
               self.negation_marker)
    }
}
