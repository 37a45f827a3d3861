//! JSON-RPC 2.0 communication layer for host page integration.
//!
//! Implements bidirectional messaging between the Bevy viewer and its host page via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Calling From the Host Page
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "set_colour_config",
//!   params: { axis: 1, use_hsv_lerp: false },
//!   id: 7
//! }), "*");
//! ```
//!
//! Messages must be JSON strings. A request without an `id` is applied but
//! never answered.
//!
//! ## Sending Notifications from Bevy
//!
//! Use `WebRpcInterface::send_notification()` to push updates to the host page:
//!
//! ```rust,ignore
//! rpc.send_notification("model_loaded", json!({ "model_id": id, "points": n }));
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params (including depths outside `0..=1`)
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Colouring
//! - `get_colour_config`: Current axis, depth range, colours and interpolation flags
//! - `set_colour_config`: Partial update; omitted fields keep their value and
//!   any invalid field rejects the whole update
//!
//! ### Display
//! - `set_point_size`: World-space sprite size, bounded by the render settings
//! - `set_planes_visible`: Show or hide every roughness plane slab
//!
//! ### Models
//! - `get_models`: Catalog ids plus the loaded and pending model
//! - `load_model`: Replace the current model; supersedes any load in progress
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `model_loaded` / `model_load_failed`: Outcome of each model load
//! - `colour_mode_changed`: Switch between gradient and plane threshold colouring
//! - `fps_update`: Smoothed frame rate, twice a second
//! - `debug_message`: Sent when an incoming message is not valid JSON-RPC;
//!   `params.message` carries the parse error, since no id is available to reply to

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
