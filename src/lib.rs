#[macro_use] extern crate failure;

extern crate geo_types;
extern crate gpx;
extern crate log;
extern crate time;

mod point;

pub mod duration;
pub mod gpx_file;
pub mod haversine;
pub mod length;
pub mod retime;

pub use crate::point::Point;
