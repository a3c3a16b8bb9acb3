pub mod create_portfolio_item;
pub mod delete_portfolio_item;
pub mod get_portfolio_items;
pub mod reorder_portfolio_items;
pub mod update_portfolio_item;

pub use create_portfolio_item::create_portfolio_item_handler;
pub use delete_portfolio_item::delete_portfolio_item_handler;
pub use get_portfolio_items::get_portfolio_items_handler;
pub use reorder_portfolio_items::reorder_portfolio_items_handler;
pub use update_portfolio_item::update_portfolio_item_handler;
