use bevy::math::{DVec3, Vec3};

/// Source to engine axis remap (row-major: [x_new, y_new, z_new]).
/// Surface-roughness data is Z-up; the engine is Y-up, so Y and Z swap.
pub const SOURCE_TO_TARGET: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0], // X = X
    [0.0, 0.0, 1.0], // Y = Z
    [0.0, 1.0, 0.0], // Z = Y
];

/// Apply the source to engine remap to a single coordinate triple.
pub fn transform_coordinates(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let input = [x, y, z];
    let mut output = [0.0; 3];

    for i in 0..3 {
        for j in 0..3 {
            output[i] += SOURCE_TO_TARGET[i][j] * input[j];
        }
    }

    (output[0], output[1], output[2])
}

/// Re-express a source point or vector in engine axes.
/// Every plane position and direction passes through here exactly once.
pub fn source_to_target(v: Vec3) -> Vec3 {
    let (x, y, z) = transform_coordinates(v.x, v.y, v.z);
    Vec3::new(x, y, z)
}

/// Double precision remap for georeferenced input that is re-centred later.
pub fn source_to_target_f64(v: DVec3) -> DVec3 {
    let input = v.to_array();
    let mut output = [0.0f64; 3];

    for (i, row) in SOURCE_TO_TARGET.iter().enumerate() {
        for (j, weight) in row.iter().enumerate() {
            output[i] += f64::from(*weight) * input[j];
        }
    }

    DVec3::from_array(output)
}
