use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};
use constants::path::POINT_CLOUD_SHADER_PATH;

/// Camera-facing point sprite material with vertex colours.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointCloudMaterial {
    /// x: world-space sprite size. Remaining lanes are padding.
    #[uniform(0)]
    pub params: Vec4,
}

impl PointCloudMaterial {
    pub fn with_size(size: f32) -> Self {
        Self {
            params: Vec4::new(size, 0.0, 0.0, 0.0),
        }
    }

    pub fn size(&self) -> f32 {
        self.params.x
    }

    pub fn set_size(&mut self, size: f32) {
        self.params.x = size;
    }
}

impl Material for PointCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_buffer_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_buffer_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
