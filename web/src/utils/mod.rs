pub mod currency;
pub mod dates;
pub mod scroll;
