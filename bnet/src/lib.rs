// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_yaml;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate fnv;
extern crate itertools;

pub mod errors;
pub mod settings;
pub mod factors;
pub mod inferences;
pub mod networks;
pub mod prelude;
