//! Western astrology helpers: signs, houses and lots.

pub mod houses;
pub mod lots;
pub mod signs;

pub use houses::{house_midpoint, house_of};
pub use lots::{is_day_chart, part_of_fortune};
pub use signs::{Element, Sign, SignPosition};
