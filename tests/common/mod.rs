//! Scripted movie source shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use release_radar::models::{MovieDetail, MovieSummary, UpcomingPage};
use release_radar::services::MovieSource;
use release_radar::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned response for one request.
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Ok(T),
    Status(u16),
    Transport(String),
}

impl<T: Clone> Scripted<T> {
    fn to_result(&self) -> Result<T> {
        match self {
            Scripted::Ok(value) => Ok(value.clone()),
            Scripted::Status(status) => Err(Error::RequestFailed { status: *status }),
            Scripted::Transport(message) => Err(Error::Transport(message.clone())),
        }
    }
}

/// A [`MovieSource`] answering from fixed tables and recording every call.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pages: HashMap<u32, Scripted<Vec<MovieSummary>>>,
    details: HashMap<u64, Scripted<MovieDetail>>,
    page_calls: Mutex<Vec<u32>>,
    detail_calls: Mutex<Vec<u64>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, movies: Vec<MovieSummary>) -> Self {
        self.pages.insert(page, Scripted::Ok(movies));
        self
    }

    pub fn with_page_status(mut self, page: u32, status: u16) -> Self {
        self.pages.insert(page, Scripted::Status(status));
        self
    }

    pub fn with_page_transport_error(mut self, page: u32, message: &str) -> Self {
        self.pages.insert(page, Scripted::Transport(message.to_string()));
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        let id = detail.id.unwrap_or_default();
        self.details.insert(id, Scripted::Ok(detail));
        self
    }

    pub fn with_detail_status(mut self, movie_id: u64, status: u16) -> Self {
        self.details.insert(movie_id, Scripted::Status(status));
        self
    }

    pub fn page_calls(&self) -> Vec<u32> {
        self.page_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<u64> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for ScriptedSource {
    async fn upcoming_page(&self, page: u32) -> Result<UpcomingPage> {
        self.page_calls.lock().unwrap().push(page);
        let results = self
            .pages
            .get(&page)
            .map(Scripted::to_result)
            .unwrap_or(Err(Error::RequestFailed { status: 404 }))?;
        Ok(UpcomingPage {
            page,
            results,
            total_pages: Some(self.pages.len() as u32),
            total_results: None,
        })
    }

    async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail> {
        self.detail_calls.lock().unwrap().push(movie_id);
        self.details
            .get(&movie_id)
            .map(Scripted::to_result)
            .unwrap_or(Err(Error::RequestFailed { status: 404 }))
    }
}

/// `count` movies with ids starting at `first_id`.
pub fn page_of(first_id: u64, count: u64) -> Vec<MovieSummary> {
    (first_id..first_id + count)
        .map(|id| MovieSummary::new(id, &format!("Movie {}", id), "2024-06-01"))
        .collect()
}

/// A detail record with only id and title set.
pub fn detail(movie_id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id: Some(movie_id),
        title: Some(title.to_string()),
        ..Default::default()
    }
}
