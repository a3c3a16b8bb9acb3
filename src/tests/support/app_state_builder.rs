use actix_web::web;
use std::sync::Arc;

use crate::analytics::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, RecordClickUseCase, RecordVisitUseCase,
};
use crate::carousel::application::ports::incoming::use_cases::{
    AddCarouselImageUseCase, DeleteCarouselImageUseCase, GetCarouselImagesUseCase,
    ReorderCarouselImagesUseCase, UpdateCarouselImageUseCase,
};
use crate::content::application::ports::incoming::use_cases::{
    AddExpertiseAreaUseCase, GetContentUseCase, RemoveExpertiseAreaUseCase,
    ReorderExpertiseAreasUseCase, UpdateContentUseCase,
};
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, SubmitMessageUseCase,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemUseCase, DeletePortfolioItemUseCase, GetPortfolioItemsUseCase,
    ReorderPortfolioItemsUseCase, UpdatePortfolioItemUseCase,
};
use crate::{
    AnalyticsUseCases, AppState, CarouselUseCases, ContentUseCases, MessageUseCases,
    PortfolioUseCases,
};

use super::stubs::*;

/// Builds an `AppState` where every use case is a stub, letting a route
/// test swap in just the collaborator under test.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                portfolio: PortfolioUseCases {
                    get_list: Arc::new(StubGetPortfolioItems),
                    create: Arc::new(StubCreatePortfolioItem),
                    update: Arc::new(StubUpdatePortfolioItem),
                    delete: Arc::new(StubDeletePortfolioItem),
                    reorder: Arc::new(StubReorderPortfolioItems),
                },
                carousel: CarouselUseCases {
                    get_list: Arc::new(StubGetCarouselImages),
                    add: Arc::new(StubAddCarouselImage),
                    update: Arc::new(StubUpdateCarouselImage),
                    delete: Arc::new(StubDeleteCarouselImage),
                    reorder: Arc::new(StubReorderCarouselImages),
                },
                content: ContentUseCases {
                    get: Arc::new(StubGetContent),
                    update: Arc::new(StubUpdateContent),
                    add_expertise: Arc::new(StubAddExpertiseArea),
                    remove_expertise: Arc::new(StubRemoveExpertiseArea),
                    reorder_expertise: Arc::new(StubReorderExpertiseAreas),
                },
                message: MessageUseCases {
                    submit: Arc::new(StubSubmitMessage),
                    delete: Arc::new(StubDeleteMessage),
                },
                analytics: AnalyticsUseCases {
                    record_click: Arc::new(StubRecordClick),
                    record_visit: Arc::new(StubRecordVisit),
                    dashboard_stats: Arc::new(StubGetDashboardStats),
                },
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio_items(
        mut self,
        use_case: impl GetPortfolioItemsUseCase + 'static,
    ) -> Self {
        self.state.portfolio.get_list = Arc::new(use_case);
        self
    }

    pub fn with_create_portfolio_item(
        mut self,
        use_case: impl CreatePortfolioItemUseCase + 'static,
    ) -> Self {
        self.state.portfolio.create = Arc::new(use_case);
        self
    }

    pub fn with_update_portfolio_item(
        mut self,
        use_case: impl UpdatePortfolioItemUseCase + 'static,
    ) -> Self {
        self.state.portfolio.update = Arc::new(use_case);
        self
    }

    pub fn with_delete_portfolio_item(
        mut self,
        use_case: impl DeletePortfolioItemUseCase + 'static,
    ) -> Self {
        self.state.portfolio.delete = Arc::new(use_case);
        self
    }

    pub fn with_reorder_portfolio_items(
        mut self,
        use_case: impl ReorderPortfolioItemsUseCase + 'static,
    ) -> Self {
        self.state.portfolio.reorder = Arc::new(use_case);
        self
    }

    pub fn with_get_carousel_images(
        mut self,
        use_case: impl GetCarouselImagesUseCase + 'static,
    ) -> Self {
        self.state.carousel.get_list = Arc::new(use_case);
        self
    }

    pub fn with_add_carousel_image(
        mut self,
        use_case: impl AddCarouselImageUseCase + 'static,
    ) -> Self {
        self.state.carousel.add = Arc::new(use_case);
        self
    }

    pub fn with_update_carousel_image(
        mut self,
        use_case: impl UpdateCarouselImageUseCase + 'static,
    ) -> Self {
        self.state.carousel.update = Arc::new(use_case);
        self
    }

    pub fn with_delete_carousel_image(
        mut self,
        use_case: impl DeleteCarouselImageUseCase + 'static,
    ) -> Self {
        self.state.carousel.delete = Arc::new(use_case);
        self
    }

    pub fn with_reorder_carousel_images(
        mut self,
        use_case: impl ReorderCarouselImagesUseCase + 'static,
    ) -> Self {
        self.state.carousel.reorder = Arc::new(use_case);
        self
    }

    pub fn with_get_content(mut self, use_case: impl GetContentUseCase + 'static) -> Self {
        self.state.content.get = Arc::new(use_case);
        self
    }

    pub fn with_update_content(mut self, use_case: impl UpdateContentUseCase + 'static) -> Self {
        self.state.content.update = Arc::new(use_case);
        self
    }

    pub fn with_add_expertise_area(
        mut self,
        use_case: impl AddExpertiseAreaUseCase + 'static,
    ) -> Self {
        self.state.content.add_expertise = Arc::new(use_case);
        self
    }

    pub fn with_remove_expertise_area(
        mut self,
        use_case: impl RemoveExpertiseAreaUseCase + 'static,
    ) -> Self {
        self.state.content.remove_expertise = Arc::new(use_case);
        self
    }

    pub fn with_reorder_expertise_areas(
        mut self,
        use_case: impl ReorderExpertiseAreasUseCase + 'static,
    ) -> Self {
        self.state.content.reorder_expertise = Arc::new(use_case);
        self
    }

    pub fn with_submit_message(mut self, use_case: impl SubmitMessageUseCase + 'static) -> Self {
        self.state.message.submit = Arc::new(use_case);
        self
    }

    pub fn with_delete_message(mut self, use_case: impl DeleteMessageUseCase + 'static) -> Self {
        self.state.message.delete = Arc::new(use_case);
        self
    }

    pub fn with_record_click(mut self, use_case: impl RecordClickUseCase + 'static) -> Self {
        self.state.analytics.record_click = Arc::new(use_case);
        self
    }

    pub fn with_record_visit(mut self, use_case: impl RecordVisitUseCase + 'static) -> Self {
        self.state.analytics.record_visit = Arc::new(use_case);
        self
    }

    pub fn with_dashboard_stats(
        mut self,
        use_case: impl GetDashboardStatsUseCase + 'static,
    ) -> Self {
        self.state.analytics.dashboard_stats = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
