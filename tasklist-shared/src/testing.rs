//! In-memory backend used by the controller tests.

use crate::api::{Endpoint, TodoApi};
use crate::errors::{ClientError, ClientResult};
use crate::models::{
    ListId, LoginRequest, LoginResponse, NewList, NewTask, RegisterRequest, Task, TaskId,
    TaskStatus, TodoList,
};
use async_trait::async_trait;
use serde_json::Map;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use tokio::sync::Notify;

pub fn list(id: i64, title: &str) -> TodoList {
    TodoList {
        id: ListId(id),
        title: title.to_string(),
        description: None,
        extra: Map::new(),
    }
}

pub fn task(id: i64, title: &str, list_id: i64) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        description: None,
        status: TaskStatus::Pending,
        due_date: None,
        list_id: Some(ListId(list_id)),
        extra: Map::new(),
    }
}

/// Backend double recording every request it receives.
///
/// `fail` makes an operation fail until further notice; `gate_tasks` holds
/// back the task response of one list until the returned `Notify` fires.
#[derive(Debug)]
pub struct FakeApi {
    users: RefCell<HashMap<String, String>>,
    lists: RefCell<Vec<TodoList>>,
    tasks: RefCell<Vec<Task>>,
    calls: RefCell<Vec<Endpoint>>,
    sent_lists: RefCell<Vec<TodoList>>,
    sent_tasks: RefCell<Vec<Task>>,
    failures: RefCell<HashMap<&'static str, ClientError>>,
    gates: RefCell<HashMap<ListId, Rc<Notify>>>,
    next_id: Cell<i64>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            users: RefCell::default(),
            lists: RefCell::default(),
            tasks: RefCell::default(),
            calls: RefCell::default(),
            sent_lists: RefCell::default(),
            sent_tasks: RefCell::default(),
            failures: RefCell::default(),
            gates: RefCell::default(),
            next_id: Cell::new(100),
        }
    }
}

impl FakeApi {
    pub fn with_user(username: &str, password: &str) -> Self {
        let api = Self::default();
        api.users
            .borrow_mut()
            .insert(username.to_string(), password.to_string());
        api
    }

    pub fn seed_list(&self, list: TodoList) {
        self.lists.borrow_mut().push(list);
    }

    pub fn seed_task(&self, task: Task) {
        self.tasks.borrow_mut().push(task);
    }

    pub fn fail(&self, operation: &'static str, error: ClientError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn gate_tasks(&self, list_id: ListId) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        self.gates.borrow_mut().insert(list_id, Rc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Endpoint) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn sent_lists(&self) -> Vec<TodoList> {
        self.sent_lists.borrow().clone()
    }

    pub fn sent_tasks(&self) -> Vec<Task> {
        self.sent_tasks.borrow().clone()
    }

    fn record(&self, endpoint: Endpoint, operation: &'static str) -> ClientResult<()> {
        self.calls.borrow_mut().push(endpoint);
        match self.failures.borrow().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.record(Endpoint::Register, "register")?;
        let mut users = self.users.borrow_mut();
        if users.contains_key(&request.username) {
            return Err(Endpoint::Register.error_for(409, r#"{"message":"Username already exists"}"#));
        }
        users.insert(request.username.clone(), request.password.clone());
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.record(Endpoint::Login, "login")?;
        match self.users.borrow().get(&request.username) {
            Some(password) if *password == request.password => Ok(LoginResponse {
                token: format!("token-{}", request.username),
            }),
            _ => Err(Endpoint::Login.error_for(401, "")),
        }
    }

    async fn lists(&self) -> ClientResult<Vec<TodoList>> {
        self.record(Endpoint::Lists, "lists")?;
        Ok(self.lists.borrow().clone())
    }

    async fn create_list(&self, list: &NewList) -> ClientResult<TodoList> {
        self.record(Endpoint::CreateList, "create_list")?;
        let created = TodoList {
            id: ListId(self.allocate_id()),
            title: list.title.clone(),
            description: list.description.clone(),
            extra: Map::new(),
        };
        self.lists.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_list(&self, list: &TodoList) -> ClientResult<TodoList> {
        self.record(Endpoint::UpdateList(list.id), "update_list")?;
        self.sent_lists.borrow_mut().push(list.clone());
        let mut lists = self.lists.borrow_mut();
        let slot = lists
            .iter_mut()
            .find(|item| item.id == list.id)
            .ok_or_else(|| ClientError::request(404, "List not found"))?;
        *slot = list.clone();
        Ok(list.clone())
    }

    async fn delete_list(&self, id: ListId) -> ClientResult<()> {
        self.record(Endpoint::DeleteList(id), "delete_list")?;
        self.lists.borrow_mut().retain(|list| list.id != id);
        self.tasks
            .borrow_mut()
            .retain(|task| task.list_id != Some(id));
        Ok(())
    }

    async fn tasks(&self, list_id: ListId) -> ClientResult<Vec<Task>> {
        self.calls.borrow_mut().push(Endpoint::TasksForList(list_id));
        let gate = self.gates.borrow().get(&list_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = self.failures.borrow().get("tasks") {
            return Err(error.clone());
        }
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|task| task.list_id == Some(list_id))
            .cloned()
            .collect())
    }

    async fn create_task(&self, list_id: ListId, task: &NewTask) -> ClientResult<Task> {
        self.record(Endpoint::CreateTask(list_id), "create_task")?;
        let created = Task {
            id: TaskId(self.allocate_id()),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            due_date: task.due_date,
            list_id: Some(list_id),
            extra: Map::new(),
        };
        self.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, task: &Task) -> ClientResult<Task> {
        self.record(Endpoint::UpdateTask(task.id), "update_task")?;
        self.sent_tasks.borrow_mut().push(task.clone());
        let mut tasks = self.tasks.borrow_mut();
        let slot = tasks
            .iter_mut()
            .find(|item| item.id == task.id)
            .ok_or_else(|| ClientError::request(404, "Task not found"))?;
        *slot = task.clone();
        Ok(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        self.record(Endpoint::DeleteTask(id), "delete_task")?;
        self.tasks.borrow_mut().retain(|task| task.id != id);
        Ok(())
    }
}
