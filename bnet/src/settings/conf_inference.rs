use std::fmt;
use errors::*;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConf {
    // max number of variables of a product factor, no limit when absent
    pub max_scope_size: Option<usize>,
}

impl Default for InferenceConf {
    fn default() -> InferenceConf {
        InferenceConf {
            max_scope_size: None,
        }
    }
}

impl InferenceConf {
    pub fn with_max_scope_size(max_scope_size: usize) -> InferenceConf {
        InferenceConf { max_scope_size: Some(max_scope_size) }
    }

    /// Raise `ScopeTooLarge` if a factor over `n_vars` variables exceeds the limit
    pub fn check_scope(&self, n_vars: usize) -> Result<()> {
        match self.max_scope_size {
            Some(limit) if n_vars > limit => bail!(ErrorKind::ScopeTooLarge(n_vars, limit)),
            _ => Ok(())
        }
    }
}

impl fmt::Debug for InferenceConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.max_scope_size {
            Some(limit) => write!(f, "\n    max_scope_size : {}", limit),
            None => write!(f, "\n    max_scope_size : unlimited")
        }
    }
}
