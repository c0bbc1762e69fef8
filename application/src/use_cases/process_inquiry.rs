//! Process Inquiry use case
//!
//! The supervisor of the pipeline:
//!
//! ```text
//! Received → Classified → SearchedKb → AnsweredFromKb
//!                                    ↘ RoutedToTeam → GeneratedTicketDetails
//! ```
//!
//! Every collaborator failure degrades inside its stage, so a run always
//! produces a completed [`PipelineResult`].

use crate::config::PipelineParams;
use crate::ports::cache::CachePort;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::semantic_search::SemanticSearch;
use crate::use_cases::classify_inquiry::InquiryClassifier;
use crate::use_cases::retrieve_knowledge::KnowledgeRetriever;
use crate::use_cases::route_inquiry::TeamRouter;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use triage_domain::{
    InquiryRequest, PipelineResult, PipelineStage, Resolution, TeamKeywords, TicketDraft,
};

/// Use case for running one inquiry through the pipeline.
pub struct ProcessInquiryUseCase {
    classifier: InquiryClassifier,
    retriever: KnowledgeRetriever,
    router: TeamRouter,
}

impl ProcessInquiryUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        search: Arc<dyn SemanticSearch>,
        cache: Arc<dyn CachePort>,
        keywords: TeamKeywords,
        params: PipelineParams,
    ) -> Self {
        Self {
            classifier: InquiryClassifier::new(gateway.clone(), params.llm_timeout),
            router: TeamRouter::new(gateway.clone(), keywords, params.llm_timeout),
            retriever: KnowledgeRetriever::new(search, cache, gateway, params),
        }
    }

    pub async fn execute(&self, request: InquiryRequest) -> PipelineResult {
        self.execute_with_progress(request, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        request: InquiryRequest,
        progress: &dyn ProgressNotifier,
    ) -> PipelineResult {
        let received_at = Utc::now();
        let mut steps = Vec::with_capacity(4);
        info!("Processing inquiry from {}", request.requester_id());

        // Classification
        progress.on_stage_start(PipelineStage::Classified);
        let classification = self.classifier.classify(request.question()).await;
        steps.push(PipelineStage::Classified);
        progress.on_stage_complete(PipelineStage::Classified);

        // Knowledge base, always searched with the raw question
        progress.on_stage_start(PipelineStage::SearchedKb);
        let knowledge = self.retriever.answer(request.question()).await;
        steps.push(PipelineStage::SearchedKb);
        progress.on_stage_complete(PipelineStage::SearchedKb);

        let resolution = match (knowledge.is_answerable(), &knowledge.answer, &knowledge.source) {
            (true, Some(answer), Some(source)) => {
                progress.on_stage_start(PipelineStage::AnsweredFromKb);
                steps.push(PipelineStage::AnsweredFromKb);
                progress.on_stage_complete(PipelineStage::AnsweredFromKb);
                info!("Answered from knowledge base ({})", knowledge.confidence);
                Resolution::AnswerFromKb {
                    answer: answer.clone(),
                    source: source.clone(),
                }
            }
            _ => {
                progress.on_stage_start(PipelineStage::RoutedToTeam);
                let routing = self
                    .router
                    .route(request.question(), &classification.category)
                    .await;
                steps.push(PipelineStage::RoutedToTeam);
                progress.on_stage_complete(PipelineStage::RoutedToTeam);

                progress.on_stage_start(PipelineStage::GeneratedTicketDetails);
                let ticket = TicketDraft::compose(&request, &classification, routing.team);
                steps.push(PipelineStage::GeneratedTicketDetails);
                progress.on_stage_complete(PipelineStage::GeneratedTicketDetails);

                info!("Ticket drafted for {} ({})", routing.team, ticket.priority);
                Resolution::CreateTicket { routing, ticket }
            }
        };

        PipelineResult {
            received_at,
            request,
            classification,
            knowledge,
            resolution,
            steps,
            completed: true,
        }
    }
}
