use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;
use errors::*;
use helper::{ QueryArgs, parse_evidence, parse_variables };

/// One query of a batch file, written the same way as the command line arguments
#[derive(Deserialize, Debug)]
pub struct QueryInput {
    pub query: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub brute_force: bool,
}

#[derive(Deserialize, Debug)]
pub struct BatchInput {
    pub queries: Vec<QueryInput>
}

impl QueryInput {
    pub fn to_args(&self) -> Result<QueryArgs> {
        Ok(QueryArgs {
            query: parse_variables(&self.query),
            evidence: parse_evidence(&self.evidence)
                .chain_err(|| format!("Invalid evidence of query '{}'", self.query))?,
            order: self.order.as_ref().map(|o| parse_variables(o)),
            brute_force: self.brute_force,
        })
    }
}

impl BatchInput {
    pub fn from_file(fqueries: &Path) -> Result<BatchInput> {
        let reader = BufReader::new(File::open(fqueries)
            .chain_err(|| format!("Cannot open query file {}", fqueries.display()))?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
