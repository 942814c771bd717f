//! Input and time adapter for the flyer
//!
//! Press/release edges map onto flap transitions; elapsed time drives
//! integration. Nothing here is buffered: each call applies immediately.

use super::flyer::Flyer;

pub fn apply_flap(flyer: &mut Flyer) {
    flyer.flap();
}

pub fn release_flap(flyer: &mut Flyer) {
    flyer.stop_flap();
}

pub fn update(flyer: &mut Flyer, delta_ms: f32) {
    flyer.update(delta_ms);
}
