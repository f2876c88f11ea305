//! Category management: the domain types, repositories, service and HTTP endpoints.

mod create;
mod delete;
mod domain;
mod edit;
mod extract;
mod list;
mod memory;
mod repository;
mod service;
mod sqlite;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryId, CategoryName, CategoryPayload, NewCategory};
pub use edit::update_category_endpoint;
pub use list::{get_categories_endpoint, get_category_endpoint};
pub use memory::InMemoryCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
pub use sqlite::{SQLiteCategoryRepository, create_category_table};
