pub mod city_picker;
pub mod header;

pub use city_picker::CityPicker;
pub use header::Header;
