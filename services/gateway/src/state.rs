use crate::graphql::{BranchSchema, build_schema};
use crate::service::BranchQueryService;
use persistence::BranchStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: BranchQueryService,
    pub schema: BranchSchema, // Shares the same service as the REST handlers
}

impl AppState {
    pub fn new(store: Arc<dyn BranchStore>) -> Self {
        let service = BranchQueryService::new(store);
        Self {
            schema: build_schema(service.clone()),
            service,
        }
    }
}
