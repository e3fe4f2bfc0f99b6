use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::modules::course::application::domain::Course;
use crate::modules::course::application::ports::outgoing::{CourseQuery, CourseQueryError};

use super::sea_orm_entity::Entity as CourseEntity;

#[derive(Debug, Clone)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn find_by_id(&self, course_id: i64) -> Result<Option<Course>, CourseQueryError> {
        let model = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(|e| CourseQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}
