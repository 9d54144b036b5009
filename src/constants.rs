/// Shared tuning constants for the galaxy render pipeline.

/// Multiplier converting normalised unit-cube catalog coordinates into
/// scene-space world units.
pub const WORLD_SCALE: f32 = 1000.0;

/// Relative asset path of the star catalog document.
pub const CATALOG_PATH: &str = "catalogs/exo.json";

/// Base visual size of a star sphere before distance compensation.
pub const STAR_BASE_SIZE: f32 = 1.0;

/// Lower clamp on the distance-compensated star scale. Keeps nearby stars
/// from shrinking below a visible footprint.
pub const STAR_MIN_SCALE: f32 = 0.25;

/// Upper clamp on the distance-compensated star scale. Keeps distant stars
/// from ballooning across the frame.
pub const STAR_MAX_SCALE: f32 = 5.0;

/// Camera distance over which a star grows by one scale unit.
pub const STAR_SCALE_DISTANCE: f32 = 250.0;

/// Luminance threshold for the bright-pass extraction.
pub const BLOOM_THRESHOLD: f32 = 0.6;

/// Soft knee for the threshold curve, avoids a hard extraction cutoff.
pub const BLOOM_SOFT_KNEE: f32 = 0.5;

/// Bloom contribution multiplier in the final composite.
pub const BLOOM_STRENGTH: f32 = 1.5;

/// Blur tap offset multiplier for the Gaussian passes.
pub const BLOOM_RADIUS: f32 = 1.0;

// Camera submission order. Scene passes render before their post-process
// chains, and everything renders before the compositor.
pub const BLOOM_SCENE_PASS_ORDER: isize = 0;
pub const BRIGHT_PASS_ORDER: isize = 1;
pub const BLUR_H_PASS_ORDER: isize = 2;
pub const BLUR_V_PASS_ORDER: isize = 3;
pub const OVERLAY_SCENE_PASS_ORDER: isize = 4;
pub const BASE_SCENE_PASS_ORDER: isize = 5;
pub const COMPOSITE_PASS_ORDER: isize = 6;

/// Vertical field of view of the scene cameras, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Near clip plane of the scene cameras.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane of the scene cameras. Generous so the whole world cube
/// stays visible at maximum dolly distance.
pub const CAMERA_FAR: f32 = 5_000_000.0;

/// Closest the orbit rig may dolly toward its focus point.
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;

/// Furthest the orbit rig may dolly away from its focus point.
pub const CAMERA_MAX_DISTANCE: f32 = 16_384.0;

/// Exponential fog density applied to the base scene pass.
pub const FOG_DENSITY: f32 = 0.000_03;

/// Warm off-white fog colour, linear RGB.
pub const FOG_COLOR: [f32; 3] = [0.922, 0.886, 0.859];
