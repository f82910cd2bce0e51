// Utility functions shared by the signal calculators.

/// Great-circle distance between two coordinates, in meters.
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Exponential half-life decay: 1.0 at age zero, 0.5 after one half-life.
pub fn half_life_decay(age_hours: f32, half_life_hours: f32) -> f32 {
    if half_life_hours <= 0.0 {
        return 0.0;
    }
    let age = age_hours.max(0.0);
    0.5_f32.powf(age / half_life_hours)
}

/// Clamp a value to [0, 1], mapping non-finite inputs to 0.
pub fn clamp01(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
