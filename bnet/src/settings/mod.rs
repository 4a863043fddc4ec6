use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;
use errors::*;

pub mod conf_display;
pub mod conf_inference;

pub use self::conf_display::*;
pub use self::conf_inference::*;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplayConf,
    pub inference: InferenceConf,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            display: DisplayConf::default(),
            inference: InferenceConf::default(),
        }
    }
}

impl Settings {
    /// Load settings from a yaml file, missing sections keep their default values
    pub fn from_file(fsettings: &Path) -> Result<Settings> {
        let reader = BufReader::new(File::open(fsettings)?);
        let settings = serde_yaml::from_reader(reader)?;
        Ok(settings)
    }

    pub fn from_yaml_str(content: &str) -> Result<Settings> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
display: {:?}
inference: {:?}
**********************************************************************
"#,
    self.display,
    self.inference)
    }
}
