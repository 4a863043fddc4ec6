mod assignment;
mod factor;
mod operators;
mod display;

pub use self::assignment::{ Assignment, iter_assignments, project };
pub use self::factor::{ Factor, Entry };
pub use self::operators::fold_product;
pub use self::display::{ FactorDisplay, format_significant };
