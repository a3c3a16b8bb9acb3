//! Default doubles for route tests. Every use case answers with its
//! repository error so a test only stubs the collaborators it cares
//! about.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::analytics::application::ports::incoming::use_cases::{
    DashboardStats, GetDashboardStatsError, GetDashboardStatsUseCase, RecordClickCommand,
    RecordClickError, RecordClickUseCase, RecordVisitCommand, RecordVisitError,
    RecordVisitUseCase,
};
use crate::analytics::application::ports::outgoing::{ClickRecord, VisitRecord};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::carousel::application::ports::incoming::use_cases::{
    AddCarouselImageCommand, AddCarouselImageError, AddCarouselImageUseCase,
    DeleteCarouselImageError, DeleteCarouselImageUseCase, GetCarouselImagesError,
    GetCarouselImagesUseCase, ReorderCarouselImagesCommand, ReorderCarouselImagesError,
    ReorderCarouselImagesUseCase, UpdateCarouselImageCommand, UpdateCarouselImageError,
    UpdateCarouselImageUseCase,
};
use crate::carousel::application::ports::outgoing::CarouselImageRecord;
use crate::content::application::domain::entities::{ContentKind, ExpertiseArea};
use crate::content::application::ports::incoming::use_cases::{
    AddExpertiseAreaCommand, AddExpertiseAreaError, AddExpertiseAreaUseCase, GetContentError,
    GetContentUseCase, RemoveExpertiseAreaError, RemoveExpertiseAreaUseCase,
    ReorderExpertiseAreasCommand, ReorderExpertiseAreasError, ReorderExpertiseAreasUseCase,
    UpdateContentCommand, UpdateContentError, UpdateContentUseCase,
};
use crate::content::application::ports::outgoing::ContentRecord;
use crate::auth::application::domain::entities::UserId;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, SubmitMessageCommand, SubmitMessageError,
    SubmitMessageUseCase,
};
use crate::message::application::ports::outgoing::MessageRecord;
use crate::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
    DeletePortfolioItemError, DeletePortfolioItemUseCase, GetPortfolioItemsError,
    GetPortfolioItemsUseCase, ReorderPortfolioItemsCommand, ReorderPortfolioItemsError,
    ReorderPortfolioItemsUseCase, UpdatePortfolioItemCommand, UpdatePortfolioItemError,
    UpdatePortfolioItemUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioItemRecord;

const NOT_STUBBED: &str = "not stubbed";

/// Token provider that accepts any bearer token and attributes it to a
/// fixed user.
pub struct StubTokenProvider {
    user_id: Uuid,
}

impl StubTokenProvider {
    pub fn valid(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub: self.user_id,
            exp: now + 3600,
            iat: now,
            nbf: now - 30,
            token_type: "access".to_string(),
        })
    }
}

pub struct StubGetPortfolioItems;

#[async_trait]
impl GetPortfolioItemsUseCase for StubGetPortfolioItems {
    async fn execute(&self) -> Result<Vec<PortfolioItemRecord>, GetPortfolioItemsError> {
        Err(GetPortfolioItemsError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubCreatePortfolioItem;

#[async_trait]
impl CreatePortfolioItemUseCase for StubCreatePortfolioItem {
    async fn execute(
        &self,
        _command: CreatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, CreatePortfolioItemError> {
        Err(CreatePortfolioItemError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubUpdatePortfolioItem;

#[async_trait]
impl UpdatePortfolioItemUseCase for StubUpdatePortfolioItem {
    async fn execute(
        &self,
        _command: UpdatePortfolioItemCommand,
    ) -> Result<PortfolioItemRecord, UpdatePortfolioItemError> {
        Err(UpdatePortfolioItemError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubDeletePortfolioItem;

#[async_trait]
impl DeletePortfolioItemUseCase for StubDeletePortfolioItem {
    async fn execute(&self, _item_id: Uuid) -> Result<(), DeletePortfolioItemError> {
        Err(DeletePortfolioItemError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubReorderPortfolioItems;

#[async_trait]
impl ReorderPortfolioItemsUseCase for StubReorderPortfolioItems {
    async fn execute(
        &self,
        _command: ReorderPortfolioItemsCommand,
    ) -> Result<Vec<PortfolioItemRecord>, ReorderPortfolioItemsError> {
        Err(ReorderPortfolioItemsError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubGetCarouselImages;

#[async_trait]
impl GetCarouselImagesUseCase for StubGetCarouselImages {
    async fn execute(&self) -> Result<Vec<CarouselImageRecord>, GetCarouselImagesError> {
        Err(GetCarouselImagesError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubAddCarouselImage;

#[async_trait]
impl AddCarouselImageUseCase for StubAddCarouselImage {
    async fn execute(
        &self,
        _command: AddCarouselImageCommand,
    ) -> Result<CarouselImageRecord, AddCarouselImageError> {
        Err(AddCarouselImageError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubUpdateCarouselImage;

#[async_trait]
impl UpdateCarouselImageUseCase for StubUpdateCarouselImage {
    async fn execute(
        &self,
        _command: UpdateCarouselImageCommand,
    ) -> Result<CarouselImageRecord, UpdateCarouselImageError> {
        Err(UpdateCarouselImageError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubDeleteCarouselImage;

#[async_trait]
impl DeleteCarouselImageUseCase for StubDeleteCarouselImage {
    async fn execute(&self, _image_id: Uuid) -> Result<(), DeleteCarouselImageError> {
        Err(DeleteCarouselImageError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubReorderCarouselImages;

#[async_trait]
impl ReorderCarouselImagesUseCase for StubReorderCarouselImages {
    async fn execute(
        &self,
        _command: ReorderCarouselImagesCommand,
    ) -> Result<Vec<CarouselImageRecord>, ReorderCarouselImagesError> {
        Err(ReorderCarouselImagesError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubGetContent;

#[async_trait]
impl GetContentUseCase for StubGetContent {
    async fn execute(&self, _kind: ContentKind) -> Result<ContentRecord, GetContentError> {
        Err(GetContentError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubUpdateContent;

#[async_trait]
impl UpdateContentUseCase for StubUpdateContent {
    async fn execute(
        &self,
        _command: UpdateContentCommand,
    ) -> Result<ContentRecord, UpdateContentError> {
        Err(UpdateContentError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubAddExpertiseArea;

#[async_trait]
impl AddExpertiseAreaUseCase for StubAddExpertiseArea {
    async fn execute(
        &self,
        _command: AddExpertiseAreaCommand,
    ) -> Result<Vec<ExpertiseArea>, AddExpertiseAreaError> {
        Err(AddExpertiseAreaError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubRemoveExpertiseArea;

#[async_trait]
impl RemoveExpertiseAreaUseCase for StubRemoveExpertiseArea {
    async fn execute(
        &self,
        _editor: UserId,
        _index: usize,
    ) -> Result<Vec<ExpertiseArea>, RemoveExpertiseAreaError> {
        Err(RemoveExpertiseAreaError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubReorderExpertiseAreas;

#[async_trait]
impl ReorderExpertiseAreasUseCase for StubReorderExpertiseAreas {
    async fn execute(
        &self,
        _command: ReorderExpertiseAreasCommand,
    ) -> Result<Vec<ExpertiseArea>, ReorderExpertiseAreasError> {
        Err(ReorderExpertiseAreasError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubSubmitMessage;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessage {
    async fn execute(
        &self,
        _command: SubmitMessageCommand,
    ) -> Result<MessageRecord, SubmitMessageError> {
        Err(SubmitMessageError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubDeleteMessage;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessage {
    async fn execute(&self, _message_id: Uuid) -> Result<(), DeleteMessageError> {
        Err(DeleteMessageError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubRecordClick;

#[async_trait]
impl RecordClickUseCase for StubRecordClick {
    async fn execute(
        &self,
        _command: RecordClickCommand,
    ) -> Result<ClickRecord, RecordClickError> {
        Err(RecordClickError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubRecordVisit;

#[async_trait]
impl RecordVisitUseCase for StubRecordVisit {
    async fn execute(
        &self,
        _command: RecordVisitCommand,
    ) -> Result<VisitRecord, RecordVisitError> {
        Err(RecordVisitError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubGetDashboardStats;

#[async_trait]
impl GetDashboardStatsUseCase for StubGetDashboardStats {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        Err(GetDashboardStatsError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}
