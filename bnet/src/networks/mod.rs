mod network;
mod builder;

pub use self::network::{ BayesNetwork, Node };
pub use self::builder::NetworkBuilder;
