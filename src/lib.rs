//! Filming-location lookup and ranking.
//!
//! Parses the flat-text filming-locations dataset into per-year location
//! sets, resolves location strings to coordinates through Nominatim behind
//! a minimum-interval request gate, spreads coincident points apart, and
//! selects the sites nearest to an origin for map rendering.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod geo;
pub mod geocode;
pub mod map;
pub mod pipeline;
