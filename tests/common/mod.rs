// tests/common/mod.rs
//! In-memory stand-in for the Notion API shared by the integration tests.
#![allow(dead_code)]

use notion_tools::api::types::{PropertyWrite, QueryFilter};
use notion_tools::{
    AppError, CreatePageRequest, DataSourceId, Page, PageId, PaginatedResponse, PropertyTypeValue,
    PropertyValue, QueryRequest, QueryResponse, RichText, UpdatePageRequest,
};
use reqwest::{Method, StatusCode};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One request the fake received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query {
        data_source: String,
        start_cursor: Option<String>,
        filter_properties: Vec<String>,
        filter: Option<QueryFilter>,
    },
    Create {
        title: String,
    },
    Update {
        page: String,
        relation: Vec<String>,
    },
}

/// The kind of request a failure is injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    Create,
    Update,
}

#[derive(Default)]
struct State {
    /// Batches served by cursor position, replayable across runs.
    batches: HashMap<String, Vec<Vec<Page>>>,
    /// Raw responses served once each, in order.
    scripted: HashMap<String, VecDeque<QueryResponse>>,
    /// Pages of the People data source.
    people: Vec<Page>,
    people_title: String,
    people_data_source: String,
    /// Relations written to source pages, by page id.
    relations: HashMap<String, Vec<String>>,
    calls: Vec<Call>,
    next_id: usize,
    /// Fails the nth (1-based) request of an operation.
    failure: Option<(Operation, usize)>,
    seen: HashMap<Operation, usize>,
}

pub struct FakeNotion {
    state: Mutex<State>,
}

impl FakeNotion {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Serves `batches` for `data_source`, one batch per query, chained by cursors.
    pub fn with_batches(self, data_source: &DataSourceId, batches: Vec<Vec<Page>>) -> Self {
        self.state
            .lock()
            .unwrap()
            .batches
            .insert(data_source.as_str().to_string(), batches);
        self
    }

    /// Serves `responses` verbatim, one per query.
    pub fn with_responses(self, data_source: &DataSourceId, responses: Vec<QueryResponse>) -> Self {
        self.state
            .lock()
            .unwrap()
            .scripted
            .insert(data_source.as_str().to_string(), responses.into());
        self
    }

    /// Backs `data_source` with a searchable People database.
    pub fn with_people(self, data_source: &DataSourceId, title_property: &str, names: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.people_data_source = data_source.as_str().to_string();
            state.people_title = title_property.to_string();
            for name in names {
                let id = state.allocate_id();
                let page = Page::new(PageId::from_normalized(id))
                    .with_property(title_property, title(name));
                state.people.push(page);
            }
        }
        self
    }

    /// Makes the `nth` request of `operation` answer with a Notion API error.
    pub fn failing(self, operation: Operation, nth: usize) -> Self {
        self.state.lock().unwrap().failure = Some((operation, nth));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn query_count(&self, data_source: &DataSourceId) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Query { data_source: ds, .. } if ds == data_source.as_str()))
            .count()
    }

    pub fn created_titles(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Create { title } => Some(title),
                _ => None,
            })
            .collect()
    }

    pub fn people_titles(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let title_property = state.people_title.clone();
        state
            .people
            .iter()
            .map(|page| page_title(page, &title_property))
            .collect()
    }

    /// Id of the People page titled `name`.
    pub fn person_id(&self, name: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .people
            .iter()
            .find(|page| page_title(page, &state.people_title) == name)
            .map(|page| page.id.as_str().to_string())
    }

    pub fn relation_of(&self, page: &str) -> Option<Vec<String>> {
        self.state.lock().unwrap().relations.get(page).cloned()
    }
}

impl State {
    /// Counts a request of `operation` and fails it if it is the injected one.
    fn check(&mut self, operation: Operation, method: Method, path: &str) -> Result<(), AppError> {
        let seen = self.seen.entry(operation).or_insert(0);
        *seen += 1;
        if self.failure != Some((operation, *seen)) {
            return Ok(());
        }
        let body = r#"{"object":"error","status":502,"code":"service_unavailable","message":"upstream"}"#;
        Err(AppError::NotionApi {
            method,
            path: path.to_string(),
            status: StatusCode::BAD_GATEWAY,
            code: notion_tools::NotionErrorCode::from_error_body(body),
            body: body.to_string(),
        })
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("person-{}", self.next_id)
    }

    fn search_people(&self, request: &QueryRequest) -> QueryResponse {
        let results = self
            .people
            .iter()
            .filter(|page| match &request.filter {
                Some(filter) => page_title(page, &filter.property) == filter.title.equals,
                None => true,
            })
            .cloned()
            .collect();
        list(results, false, None)
    }

    fn serve_batch(&self, data_source: &str, cursor: Option<&str>) -> Option<QueryResponse> {
        let batches = self.batches.get(data_source)?;
        let index = match cursor {
            None => 0,
            Some(cursor) => cursor
                .strip_prefix("cursor-")
                .and_then(|n| n.parse::<usize>().ok())
                .expect("cursor handed out by the fake"),
        };
        let has_more = index + 1 < batches.len();
        let next_cursor = has_more.then(|| format!("cursor-{}", index + 1));
        Some(list(batches[index].clone(), has_more, next_cursor))
    }
}

#[async_trait::async_trait]
impl notion_tools::NotionRepository for FakeNotion {
    async fn query_data_source(
        &self,
        data_source: &DataSourceId,
        request: &QueryRequest,
    ) -> Result<QueryResponse, AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Query {
            data_source: data_source.as_str().to_string(),
            start_cursor: request.start_cursor.clone(),
            filter_properties: request.filter_properties.clone(),
            filter: request.filter.clone(),
        });

        if data_source.as_str() == state.people_data_source {
            state.check(Operation::Search, Method::POST, "/data_sources/people/query")?;
            return Ok(state.search_people(request));
        }
        if let Some(queue) = state.scripted.get_mut(data_source.as_str()) {
            return Ok(queue.pop_front().expect("a scripted response for every query"));
        }
        Ok(state
            .serve_batch(data_source.as_str(), request.start_cursor.as_deref())
            .unwrap_or_else(|| list(Vec::new(), false, None)))
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        let mut state = self.state.lock().unwrap();
        let (property, title_text) = request
            .properties
            .iter()
            .find_map(|(name, write)| match write {
                PropertyWrite::Title { title } => Some((
                    name.clone(),
                    title.iter().map(|t| t.text.content.as_str()).collect::<String>(),
                )),
                _ => None,
            })
            .expect("created pages carry a title");

        state.calls.push(Call::Create {
            title: title_text.clone(),
        });
        state.check(Operation::Create, Method::POST, "/pages")?;
        let id = state.allocate_id();
        let page = Page::new(PageId::from_normalized(id)).with_property(&property, title(&title_text));
        state.people.push(page.clone());
        Ok(page)
    }

    async fn update_page(
        &self,
        page: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        let mut state = self.state.lock().unwrap();
        for write in request.properties.values() {
            if let PropertyWrite::Relation { relation } = write {
                let ids: Vec<String> = relation.iter().map(|r| r.id.as_str().to_string()).collect();
                state.calls.push(Call::Update {
                    page: page.as_str().to_string(),
                    relation: ids.clone(),
                });
                state.check(Operation::Update, Method::PATCH, "/pages/{id}")?;
                state.relations.insert(page.as_str().to_string(), ids);
            }
        }
        Ok(Page::new(page.clone()))
    }
}

// --- Builders ---

pub fn list(results: Vec<Page>, has_more: bool, next_cursor: Option<String>) -> QueryResponse {
    PaginatedResponse {
        object: "list".to_string(),
        results,
        next_cursor,
        has_more,
    }
}

pub fn title(text: &str) -> PropertyValue {
    PropertyValue::new(PropertyTypeValue::Title {
        title: vec![RichText::plain_text(text)],
    })
}

pub fn rich_text(text: &str) -> PropertyValue {
    PropertyValue::new(PropertyTypeValue::RichText {
        rich_text: vec![RichText::plain_text(text)],
    })
}

pub fn page(id: &str, property: &str, value: PropertyValue) -> Page {
    Page::new(PageId::from_normalized(id)).with_property(property, value)
}

pub fn data_source(hex: &str) -> DataSourceId {
    DataSourceId::parse(hex).expect("valid data source id")
}

fn page_title(page: &Page, property: &str) -> String {
    page.property(property)
        .map(notion_tools::extract_text)
        .unwrap_or_default()
}
