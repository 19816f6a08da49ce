//! Category entity <-> model mapper

use blog_core::entities::Category;
use blog_core::value_objects::CategoryId;

use crate::models::CategoryModel;

/// Convert CategoryModel to Category entity
impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::from_uuid(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
