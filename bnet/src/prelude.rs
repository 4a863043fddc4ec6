pub use settings::*;
pub use factors::*;
pub use inferences::*;
pub use networks::*;
