use bevy::diagnostic::DiagnosticsStore;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::assets::model_catalog::ModelCatalog;
use crate::engine::colour::config::{Axis, ColourConfig};
use crate::engine::loading::loaded_model::LoadedModel;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::systems::display_settings::{PlaneDisplay, PointStyle};
use crate::engine::systems::fps_tracking::current_fps;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads can carry JSON-RPC.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
            }
        }
        None => error!("Window object not available"),
    }

    // Ownership moves to JS; the listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

/// Viewer state reachable from RPC methods.
#[derive(SystemParam)]
pub struct ViewerControls<'w> {
    colour_config: ResMut<'w, ColourConfig>,
    point_style: ResMut<'w, PointStyle>,
    plane_display: ResMut<'w, PlaneDisplay>,
    model_loader: ResMut<'w, ModelLoader>,
    catalog: Option<Res<'w, ModelCatalog>>,
    loaded_model: Option<Res<'w, LoadedModel>>,
    diagnostics: Res<'w, DiagnosticsStore>,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut controls: ViewerControls,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) = handle_rpc_request(&request, &mut controls) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Unparseable RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(request: &RpcRequest, controls: &mut ViewerControls) -> Option<RpcResponse> {
    // Notifications carry no ID and get no response; their effects still apply.
    let id = request.id.clone();

    let result = match request.method.as_str() {
        "get_colour_config" => colour_config_json(&controls.colour_config),
        "set_colour_config" => {
            patched_colour_config(&request.params, &controls.colour_config).and_then(|patched| {
                controls.colour_config.set_if_neq(patched);
                colour_config_json(&controls.colour_config)
            })
        }
        "set_point_size" => handle_set_point_size(&request.params, &mut controls.point_style),
        "set_planes_visible" => {
            handle_set_planes_visible(&request.params, &mut controls.plane_display)
        }
        "get_models" => handle_get_models(
            controls.catalog.as_deref(),
            controls.loaded_model.as_deref(),
            &controls.model_loader,
        ),
        "load_model" => handle_load_model(
            &request.params,
            controls.catalog.as_deref(),
            &mut controls.model_loader,
        ),
        "get_fps" => handle_get_fps(&controls.diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id?,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    let id = id?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn colour_config_json(config: &ColourConfig) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(config).map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// Fields a client may change; anything omitted keeps its current value.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ColourConfigPatch {
    axis: Option<Axis>,
    min_depth: Option<f32>,
    max_depth: Option<f32>,
    min_colour: Option<[u8; 3]>,
    mid_colour: Option<[u8; 3]>,
    max_colour: Option<[u8; 3]>,
    use_mid_colour: Option<bool>,
    use_hsv_lerp: Option<bool>,
}

/// Apply a partial colour config update, rejecting it whole on any bad field.
fn patched_colour_config(
    params: &serde_json::Value,
    current: &ColourConfig,
) -> Result<ColourConfig, RpcError> {
    let patch = serde_json::from_value::<ColourConfigPatch>(params.clone())
        .map_err(|e| RpcError::invalid_params(&format!("Invalid colour config: {}", e)))?;

    for depth in [patch.min_depth, patch.max_depth].into_iter().flatten() {
        ColourConfig::validated_depth(depth)
            .map_err(|e| RpcError::invalid_params(&e.to_string()))?;
    }

    Ok(ColourConfig {
        axis: patch.axis.unwrap_or(current.axis),
        min_depth: patch.min_depth.unwrap_or(current.min_depth),
        max_depth: patch.max_depth.unwrap_or(current.max_depth),
        min_colour: patch.min_colour.unwrap_or(current.min_colour),
        mid_colour: patch.mid_colour.unwrap_or(current.mid_colour),
        max_colour: patch.max_colour.unwrap_or(current.max_colour),
        use_mid_colour: patch.use_mid_colour.unwrap_or(current.use_mid_colour),
        use_hsv_lerp: patch.use_hsv_lerp.unwrap_or(current.use_hsv_lerp),
    })
}

fn handle_set_point_size(
    params: &serde_json::Value,
    point_style: &mut ResMut<PointStyle>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct PointSizeParams {
        size: f32,
    }

    let parsed = serde_json::from_value::<PointSizeParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'size' parameter"))?;
    let size = PointStyle::validated_size(parsed.size)
        .map_err(|e| RpcError::invalid_params(&e.to_string()))?;

    point_style.set_if_neq(PointStyle { size });

    Ok(serde_json::json!({
        "success": true,
        "size": size
    }))
}

fn handle_set_planes_visible(
    params: &serde_json::Value,
    plane_display: &mut ResMut<PlaneDisplay>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct PlanesVisibleParams {
        visible: bool,
    }

    let parsed = serde_json::from_value::<PlanesVisibleParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'visible' parameter"))?;

    plane_display.set_if_neq(PlaneDisplay {
        visible: parsed.visible,
    });

    Ok(serde_json::json!({
        "success": true,
        "visible": parsed.visible
    }))
}

fn handle_get_models(
    catalog: Option<&ModelCatalog>,
    loaded_model: Option<&LoadedModel>,
    model_loader: &ModelLoader,
) -> Result<serde_json::Value, RpcError> {
    let models = catalog.map(ModelCatalog::ids).unwrap_or_default();

    Ok(serde_json::json!({
        "models": models,
        "current": loaded_model.map(|model| model.model_id.as_str()),
        "pending": model_loader.pending_model(),
    }))
}

fn handle_load_model(
    params: &serde_json::Value,
    catalog: Option<&ModelCatalog>,
    model_loader: &mut ModelLoader,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct LoadModelParams {
        model_id: String,
    }

    let parsed = serde_json::from_value::<LoadModelParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'model_id' parameter"))?;
    let catalog =
        catalog.ok_or_else(|| RpcError::internal_error("Model catalog is not loaded yet"))?;
    let entry = catalog
        .find(&parsed.model_id)
        .map_err(|e| RpcError::invalid_params(&e.to_string()))?;

    info!("Model load requested over RPC: {}", entry.id);
    model_loader.request(entry.id.clone());

    Ok(serde_json::json!({
        "success": true,
        "model_id": entry.id
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = current_fps(diagnostics).unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
