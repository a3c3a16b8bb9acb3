pub mod create_portfolio_item;
pub mod delete_portfolio_item;
pub mod get_portfolio_items;
pub mod reorder_portfolio_items;
pub mod update_portfolio_item;

pub use create_portfolio_item::{
    CreatePortfolioItemCommand, CreatePortfolioItemError, CreatePortfolioItemUseCase,
};
pub use delete_portfolio_item::{DeletePortfolioItemError, DeletePortfolioItemUseCase};
pub use get_portfolio_items::{GetPortfolioItemsError, GetPortfolioItemsUseCase};
pub use reorder_portfolio_items::{
    ReorderPortfolioItemsCommand, ReorderPortfolioItemsError, ReorderPortfolioItemsUseCase,
};
pub use update_portfolio_item::{
    UpdatePortfolioItemCommand, UpdatePortfolioItemCommandError, UpdatePortfolioItemError,
    UpdatePortfolioItemUseCase,
};
