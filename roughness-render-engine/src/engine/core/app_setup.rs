use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

use crate::engine::assets::model_catalog::ModelCatalog;
use crate::engine::assets::point_cloud_file::{PointCloudData, PointCloudLoader};
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::colour::config::ColourConfig;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::catalog_loader::{CatalogLoader, load_catalog_system, start_loading};
use crate::engine::loading::loaded_model::LoadedModel;
use crate::engine::loading::model_loader::{ModelLoader, poll_model_load, start_requested_load};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::render::point_material::PointCloudMaterial;
use crate::engine::scene::axes::draw_axes_helper;
use crate::engine::scene::planes::apply_plane_visibility;
use crate::engine::scene::point_cloud::{
    apply_point_style, notify_colour_mode, recolour_point_cloud,
};
use crate::engine::scene::rebuild::rebuild_scene;
use crate::engine::surface::roughness_tree::SurfaceRoughnessFile;
use crate::engine::systems::display_settings::{PlaneDisplay, PointStyle};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::keyboard_shortcuts::handle_keyboard_shortcuts;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // The prepass shaders know nothing about the sprite vertex layout.
        .add_plugins(MaterialPlugin::<PointCloudMaterial> {
            prepass_enabled: false,
            shadows_enabled: false,
            ..default()
        })
        .add_plugins(MeshPickingPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Catalog and plane trees are plain JSON; clouds go through the custom loader.
        .add_plugins(JsonAssetPlugin::<ModelCatalog>::new(&["models.json"]))
        .add_plugins(JsonAssetPlugin::<SurfaceRoughnessFile>::new(&["planes.json"]))
        .init_asset::<PointCloudData>()
        .init_asset_loader::<PointCloudLoader>()
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<CatalogLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<ColourConfig>()
        .init_resource::<PointStyle>()
        .init_resource::<PlaneDisplay>()
        .init_resource::<ViewportCamera>();

    app.add_systems(Startup, (setup, start_loading).chain());

    // Loading and scene upkeep run in every state so models can be swapped at runtime.
    app.add_systems(
        Update,
        (
            load_catalog_system,
            start_requested_load,
            poll_model_load,
            rebuild_scene.run_if(resource_exists_and_changed::<LoadedModel>),
            (
                recolour_point_cloud.run_if(resource_changed::<ColourConfig>),
                notify_colour_mode,
            )
                .chain()
                .run_if(resource_exists::<LoadedModel>),
            apply_point_style.run_if(resource_changed::<PointStyle>),
            apply_plane_visibility.run_if(resource_changed::<PlaneDisplay>),
        )
            .chain(),
    )
    .add_systems(
        Update,
        transition_to_running.run_if(in_state(AppState::Loading)),
    );

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        fps_notification_system,
        camera_controller,
        draw_axes_helper,
        handle_keyboard_shortcuts, // Native shortcuts or no-op for WASM
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        ViewportCamera::default().target_transform(),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
