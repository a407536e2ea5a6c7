//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{LlmPort, LocationRepo, SessionRepo};
use crate::use_cases::{
    AssembleLocation, BuildNarrationRequest, DescribeSession, NarrateScene, NarrationUseCases,
    ResolveSession,
};

/// Main application state.
///
/// Every stage gets its storage or LLM handle injected here; nothing reaches
/// for a process-wide client.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub resolve_session: Arc<ResolveSession>,
    pub assemble_location: Arc<AssembleLocation>,
    pub narration: NarrationUseCases,
}

impl App {
    pub fn new(
        session_repo: Arc<dyn SessionRepo>,
        location_repo: Arc<dyn LocationRepo>,
        llm: Arc<dyn LlmPort>,
    ) -> Self {
        let resolve_session = Arc::new(ResolveSession::new(session_repo));
        let assemble_location = Arc::new(AssembleLocation::new(location_repo));

        let build_request = Arc::new(BuildNarrationRequest::new(
            resolve_session.clone(),
            assemble_location.clone(),
        ));
        let narrate = Arc::new(NarrateScene::new(llm));
        let describe_session = Arc::new(DescribeSession::new(
            build_request.clone(),
            narrate.clone(),
        ));

        Self {
            use_cases: UseCases {
                resolve_session,
                assemble_location,
                narration: NarrationUseCases::new(build_request, narrate, describe_session),
            },
        }
    }
}
