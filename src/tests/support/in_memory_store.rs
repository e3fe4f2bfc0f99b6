use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::course::application::domain::Course;
use crate::modules::course::application::ports::outgoing::{CourseQuery, CourseQueryError};
use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::outgoing::{
    NewTopic, PageRequest, PageResult, SortDirection, TopicDetailView, TopicListFilter,
    TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError, TopicSort,
    TopicSortField, TopicSummary, UpdateTopicData,
};

#[derive(Debug, Clone)]
struct StoredTopic {
    id: i64,
    title: String,
    message: String,
    status: TopicStatus,
    course_id: i64,
    created_at: DateTime<Utc>,
}

impl StoredTopic {
    fn to_summary(&self) -> TopicSummary {
        TopicSummary {
            id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
            created_at: self.created_at,
            status: self.status,
        }
    }
}

#[derive(Debug, Default)]
struct ForumState {
    last_id: i64,
    courses: Vec<Course>,
    topics: Vec<StoredTopic>,
}

/// Store fake implementing every persistence port over one shared state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForum {
    state: Arc<Mutex<ForumState>>,
    list_calls: Arc<AtomicUsize>,
}

impl InMemoryForum {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        let forum = Self::default();
        forum.state.lock().unwrap().courses = courses;
        forum
    }

    pub fn topic_count(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }

    /// Number of times a listing was computed from the store.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

fn compare(a: &StoredTopic, b: &StoredTopic, field: TopicSortField) -> CmpOrdering {
    match field {
        TopicSortField::Id => a.id.cmp(&b.id),
        TopicSortField::Title => a.title.cmp(&b.title),
        TopicSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        TopicSortField::Status => a.status.as_db_str().cmp(b.status.as_db_str()),
    }
}

#[async_trait]
impl CourseQuery for InMemoryForum {
    async fn find_by_id(&self, course_id: i64) -> Result<Option<Course>, CourseQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.courses.iter().find(|c| c.id == course_id).cloned())
    }
}

#[async_trait]
impl TopicQuery for InMemoryForum {
    async fn list(
        &self,
        filter: &TopicListFilter,
        sort: TopicSort,
        page: PageRequest,
    ) -> Result<PageResult<TopicSummary>, TopicQueryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();

        let mut matching: Vec<&StoredTopic> = state
            .topics
            .iter()
            .filter(|t| match &filter.course_name {
                None => true,
                Some(name) => state
                    .courses
                    .iter()
                    .any(|c| c.id == t.course_id && &c.name == name),
            })
            .collect();

        matching.sort_by(|a, b| {
            let primary = match sort.direction {
                SortDirection::Asc => compare(a, b, sort.field),
                SortDirection::Desc => compare(b, a, sort.field),
            };
            primary.then(a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .map(StoredTopic::to_summary)
            .collect();

        Ok(PageResult::new(content, page, total))
    }

    async fn get_detail(&self, topic_id: i64) -> Result<Option<TopicDetailView>, TopicQueryError> {
        let state = self.state.lock().unwrap();

        let Some(topic) = state.topics.iter().find(|t| t.id == topic_id) else {
            return Ok(None);
        };

        let course = state
            .courses
            .iter()
            .find(|c| c.id == topic.course_id)
            .ok_or_else(|| TopicQueryError::InvalidData("dangling course".into()))?;

        Ok(Some(TopicDetailView {
            id: topic.id,
            title: topic.title.clone(),
            message: topic.message.clone(),
            created_at: topic.created_at,
            status: topic.status,
            course_name: course.name.clone(),
            replies: vec![],
        }))
    }
}

#[async_trait]
impl TopicRepository for InMemoryForum {
    async fn create_topic(&self, data: NewTopic) -> Result<TopicSummary, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.courses.iter().any(|c| c.id == data.course_id) {
            return Err(TopicRepositoryError::CourseNotFound);
        }
        state.last_id += 1;

        let topic = StoredTopic {
            id: state.last_id,
            title: data.title,
            message: data.message,
            status: data.status,
            course_id: data.course_id,
            created_at: data.created_at,
        };
        let summary = topic.to_summary();
        state.topics.push(topic);

        Ok(summary)
    }

    async fn update_topic(
        &self,
        topic_id: i64,
        data: UpdateTopicData,
    ) -> Result<TopicSummary, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        topic.title = data.title;
        topic.message = data.message;

        Ok(topic.to_summary())
    }

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let before = state.topics.len();
        state.topics.retain(|t| t.id != topic_id);

        if state.topics.len() == before {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}
