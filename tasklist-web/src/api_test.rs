//! Tests for the API client helpers
//!
//! Covers URL joining, status mapping and response decoding without
//! touching the network.

#[cfg(test)]
mod tests {
    use crate::api::{TodoClient, decode, decode_or, response_body, transport_error};
    use reqwest::StatusCode;
    use shared::api::Endpoint;
    use shared::errors::{ClientError, NETWORK_ERROR_MESSAGE};
    use shared::models::{ListId, Task, TaskStatus, TodoList};

    #[test]
    fn test_api_url_joins_without_double_slashes() {
        let client = TodoClient::new("http://localhost:5555/api/");
        assert_eq!(
            client.api_url(&Endpoint::TasksForList(ListId(3)).path()),
            "http://localhost:5555/api/tasks/list/3"
        );
        assert_eq!(
            client.api_url(&Endpoint::CreateTask(ListId(3)).path()),
            "http://localhost:5555/api/tasks?listId=3"
        );
    }

    #[test]
    fn test_decode_list_collection() {
        let body = r#"[{"id":1,"title":"Groceries","owner":"ada"}]"#;
        let lists: Vec<TodoList> = decode(&Endpoint::Lists, Some(body.to_string())).unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, ListId(1));
        assert_eq!(lists[0].title, "Groceries");
        assert!(lists[0].extra.contains_key("owner"));
    }

    #[test]
    fn test_decode_task_with_due_date() {
        let body = r#"{"id":9,"title":"Milk","status":"IN_PROGRESS","dueDate":"2025-03-01T00:00:00","listId":1}"#;
        let task: Task = decode(&Endpoint::CreateTask(ListId(1)), Some(body.to_string())).unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.list_id, Some(ListId(1)));
        assert!(task.due_date.is_some());
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let result: Result<TodoList, _> = decode(&Endpoint::CreateList, Some("<html>".to_string()));
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }

    #[test]
    fn test_decode_requires_content() {
        let result: Result<TodoList, _> = decode(&Endpoint::CreateList, None);
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }

    #[test]
    fn test_update_without_body_keeps_sent_record() {
        let sent: TodoList = serde_json::from_str(r#"{"id":4,"title":"Renamed"}"#).unwrap();
        let kept = decode_or(&Endpoint::UpdateList(sent.id), None, &sent).unwrap();
        assert_eq!(kept, sent);
    }

    #[test]
    fn test_no_content_and_blank_bodies_are_empty() {
        let endpoint = Endpoint::DeleteList(ListId(2));
        assert_eq!(response_body(&endpoint, StatusCode::NO_CONTENT, String::new()).unwrap(), None);
        assert_eq!(response_body(&endpoint, StatusCode::OK, "  \n".to_string()).unwrap(), None);
    }

    #[test]
    fn test_success_body_is_passed_through() {
        let body = r#"[{"id":1,"title":"Groceries"}]"#.to_string();
        assert_eq!(
            response_body(&Endpoint::Lists, StatusCode::OK, body.clone()).unwrap(),
            Some(body)
        );
    }

    #[test]
    fn test_error_status_uses_server_message() {
        let error = response_body(
            &Endpoint::CreateList,
            StatusCode::CONFLICT,
            r#"{"message":"List already exists"}"#.to_string(),
        )
        .unwrap_err();

        assert_eq!(error.status(), Some(409));
        assert_eq!(error.to_string(), "List already exists");
    }

    #[test]
    fn test_error_status_without_message_uses_fallback() {
        let error = response_body(&Endpoint::Login, StatusCode::UNAUTHORIZED, String::new()).unwrap_err();

        assert_eq!(error.status(), Some(401));
        assert_eq!(error.to_string(), "Login failed");
    }

    #[test]
    fn test_transport_failure_is_a_network_error() {
        let error = transport_error("TypeError: Failed to fetch");

        assert!(matches!(error, ClientError::Network { .. }));
        assert_eq!(error.to_string(), NETWORK_ERROR_MESSAGE);
    }
}
