//! Category Management Use Cases
//!
//! Same shape as team management; categories tag what a kudos is for.

use std::sync::Arc;

use crate::domain::entity::category::Category;
use crate::domain::repository::CategoryRepository;
use crate::domain::value_object::entity_name::EntityName;
use crate::error::{KudosError, KudosResult};

/// List categories use case
pub struct ListCategoriesUseCase<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> KudosResult<Vec<Category>> {
        self.category_repo.find_all_categories().await
    }
}

/// Get category use case
pub struct GetCategoryUseCase<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> GetCategoryUseCase<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: i64) -> KudosResult<Category> {
        self.category_repo
            .find_category_by_id(id)
            .await?
            .ok_or(KudosError::CategoryNotFound)
    }
}

/// Create category use case
pub struct CreateCategoryUseCase<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> CreateCategoryUseCase<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, name: &str) -> KudosResult<Category> {
        let name = EntityName::new(name).map_err(|e| KudosError::Validation(e.to_string()))?;
        let category = self
            .category_repo
            .create_category(&Category::new(name))
            .await?;

        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(category)
    }
}

/// Update category use case
pub struct UpdateCategoryUseCase<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> UpdateCategoryUseCase<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: i64, name: &str) -> KudosResult<Category> {
        let name = EntityName::new(name).map_err(|e| KudosError::Validation(e.to_string()))?;

        self.category_repo
            .update_category(id, &name)
            .await?
            .ok_or(KudosError::CategoryNotFound)
    }
}

/// Delete category use case
pub struct DeleteCategoryUseCase<C: CategoryRepository> {
    category_repo: Arc<C>,
}

impl<C: CategoryRepository> DeleteCategoryUseCase<C> {
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: i64) -> KudosResult<Category> {
        let category = self
            .category_repo
            .soft_delete_category(id)
            .await?
            .ok_or(KudosError::CategoryNotFound)?;

        tracing::info!(category_id = category.id, "Category soft-deleted");

        Ok(category)
    }
}
