use ferrous_probe_application::use_cases::CheckPropagationUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_propagation: Arc<CheckPropagationUseCase>,
}
