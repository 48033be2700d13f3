// crates/shared_kernel/src/domain/value_objects/geo_point.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Rayon moyen de la Terre utilisé pour la formule de haversine
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latitude(f64);

impl Latitude {
    pub fn try_new(val: f64) -> Result<Self> {
        let lat = Self(val);
        lat.validate()?;
        Ok(lat)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(-90.0..=90.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "latitude",
                reason: format!("{} is outside [-90, 90]", self.0),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitude(f64);

impl Longitude {
    pub fn try_new(val: f64) -> Result<Self> {
        let lon = Self(val);
        lon.validate()?;
        Ok(lon)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Longitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(-180.0..=180.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "longitude",
                reason: format!("{} is outside [-180, 180]", self.0),
            });
        }
        Ok(())
    }
}

/// Position géographique (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: Latitude,
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lon)?,
        })
    }

    /// Reconstruction depuis la DB (déjà validé à l'écriture)
    pub fn from_raw(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Latitude(lat),
            longitude: Longitude(lon),
        }
    }

    pub fn lat(&self) -> f64 { self.latitude.value() }
    pub fn lon(&self) -> f64 { self.longitude.value() }

    /// Distance orthodromique (haversine) en kilomètres
    pub fn distance_km_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = other.lat().to_radians();

        let delta_phi = (other.lat() - self.lat()).to_radians();
        let delta_lambda = (other.lon() - self.lon()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        Ok(())
    }
}
