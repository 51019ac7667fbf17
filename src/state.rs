use crate::api::HttpTaskApi;
use crate::controller::Controller;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller<HttpTaskApi>>,
}

impl AppState {
    pub fn new(api: HttpTaskApi) -> Self {
        Self {
            controller: Arc::new(Controller::new(api)),
        }
    }
}
