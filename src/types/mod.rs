pub mod coordinate;
pub mod feature_collection;
pub mod wind;
