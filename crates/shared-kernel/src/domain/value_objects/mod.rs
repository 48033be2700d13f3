mod account_id;
mod geo_point;
mod username;
mod value_object;

pub use account_id::AccountId;
pub use geo_point::{EARTH_RADIUS_KM, GeoPoint, Latitude, Longitude};
pub use username::Username;
pub use value_object::ValueObject;
