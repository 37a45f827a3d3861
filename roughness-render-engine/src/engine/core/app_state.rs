use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leave the loading state once the catalog is in and the first model has
/// either loaded or failed.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        println!("→ Initial load finished, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
