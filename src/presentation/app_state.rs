// Application state for HTTP handlers
use crate::application::render_dispatcher::RenderDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: RenderDispatcher,
}
