//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod humidity;
mod theme;
mod utc_offset;

pub use city_name::CityName;
pub use humidity::{Humidity, InvalidHumidity};
pub use theme::{ColorMode, ThemePalette, background_gradient};
pub use utc_offset::UtcOffset;
