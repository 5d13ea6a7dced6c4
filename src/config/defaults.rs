//! Default value functions for serde deserialization.

pub fn beam_count() -> usize {
    181
}

pub fn min_theta() -> f64 {
    -std::f64::consts::FRAC_PI_2
}

pub fn max_theta() -> f64 {
    std::f64::consts::FRAC_PI_2
}

pub fn max_range() -> f64 {
    500.0
}

pub fn distance_error_limit() -> f64 {
    5.0
}

pub fn angle_error_limit() -> f64 {
    0.05
}

pub fn discontinuity_threshold() -> f64 {
    60.0
}

pub fn lower_landmark_margin() -> f64 {
    1.0
}

pub fn ransac_iterations() -> usize {
    1000
}

pub fn inlier_threshold() -> f64 {
    4.0
}

pub fn min_inliers() -> usize {
    15
}

pub fn intersection_margin() -> f64 {
    30.0
}

pub fn parallel_tolerance() -> f64 {
    1e-6
}
