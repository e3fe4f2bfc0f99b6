use chrono::{DateTime, TimeZone, Utc};

use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, ReplyView, TopicDetailView, TopicSummary,
};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub fn summary(id: i64, title: &str) -> TopicSummary {
    TopicSummary {
        id,
        title: title.to_string(),
        message: format!("Mensagem do topico {}", id),
        created_at: fixed_time(),
        status: TopicStatus::NaoRespondido,
    }
}

pub fn detail(id: i64, title: &str, course_name: &str) -> TopicDetailView {
    TopicDetailView {
        id,
        title: title.to_string(),
        message: format!("Mensagem do topico {}", id),
        created_at: fixed_time(),
        status: TopicStatus::NaoSolucionado,
        course_name: course_name.to_string(),
        replies: vec![ReplyView {
            id: 1,
            message: "Tente limpar o cache".to_string(),
            created_at: fixed_time(),
            author_name: "Maria".to_string(),
            is_solution: false,
        }],
    }
}

pub fn empty_page() -> PageResult<TopicSummary> {
    PageResult::new(vec![], PageRequest::default(), 0)
}
