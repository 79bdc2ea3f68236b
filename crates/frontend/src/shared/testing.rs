//! In-memory backend used by the unit tests of the service functions.
//!
//! Implements every API trait, records each call in order and can be told to fail
//! the next call.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use contracts::domain::a001_client::aggregate::{
    AutoGenerateRequest, Client, ClientDto, ClientProfileDraft, ClientSummary,
};
use contracts::domain::a002_keyword::aggregate::{BulkKeywordsResponse, Keyword, KeywordStatus};
use contracts::domain::a003_brief::aggregate::BriefSummary;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_seo_analysis::{AnalyseRequest, AnalyseResponse};
use contracts::usecases::u502_article_writer::{GenerateArticleRequest, GenerateArticleResponse};

use crate::domain::a001_client::api::ClientApi;
use crate::domain::a002_keyword::api::KeywordApi;
use crate::domain::a003_brief::api::BriefApi;
use crate::usecases::u501_seo_analysis::api::SeoAnalysisApi;
use crate::usecases::u502_article_writer::api::ArticleWriterApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListClients,
    GetClient(String),
    CreateClient(String),
    UpdateClient(String),
    DeleteClient(String),
    AutoGenerate { url: String, openai_api_key: String },
    AddKeyword { client_id: String, keyword: String },
    DeleteKeyword { client_id: String, keyword_id: String },
    UpdateKeywordStatus { client_id: String, keyword_id: String, status: KeywordStatus },
    ClearKeywords(String),
    BulkAddKeywords { client_id: String, keywords: Vec<String> },
    ListBriefs,
    Analyse(AnalyseRequest),
    GenerateArticle(GenerateArticleRequest),
}

#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<ApiError>>,
    clients: RefCell<Vec<Client>>,
    briefs: RefCell<Vec<BriefSummary>>,
    next_id: Cell<u32>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Make the next call fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Insert a client without recording a call; returns its id.
    pub fn seed_client(&self, name: &str) -> String {
        let dto = ClientDto {
            name: name.to_string(),
            ..Default::default()
        };
        self.insert_client(&dto)
    }

    pub fn seed_brief(&self, id: &str, keyword: &str) {
        self.briefs.borrow_mut().push(BriefSummary {
            id: id.to_string(),
            keyword: keyword.to_string(),
            market: "🇮🇹 Italia".to_string(),
            intent: "Informativo".to_string(),
            client_id: None,
            content: Some(format!("# Brief {keyword}")),
            created_at: Some("2024-03-15T10:00:00".to_string()),
        });
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn new_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}{id}")
    }

    fn insert_client(&self, dto: &ClientDto) -> String {
        let id = self.new_id("c");
        let mut client = Client {
            id: id.clone(),
            name: String::new(),
            url: None,
            sector: None,
            brand_name: None,
            tone_of_voice: None,
            usp: None,
            products_services: None,
            target_audience: None,
            geo: None,
            notes: None,
            created_at: Some("2024-03-15T10:00:00".to_string()),
            updated_at: None,
            keyword_history: Vec::new(),
            briefs: Vec::new(),
        };
        client.apply_dto(dto);
        self.clients.borrow_mut().push(client);
        id
    }

    fn with_client<R>(&self, id: &str, f: impl FnOnce(&mut Client) -> R) -> Option<R> {
        self.clients
            .borrow_mut()
            .iter_mut()
            .find(|c| c.id == id)
            .map(f)
    }
}

#[async_trait(?Send)]
impl ClientApi for FakeBackend {
    async fn list_clients(&self) -> Result<Vec<ClientSummary>, ApiError> {
        self.record(Call::ListClients)?;
        Ok(self
            .clients
            .borrow()
            .iter()
            .map(|c| ClientSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                url: c.url.clone(),
                sector: c.sector.clone(),
                created_at: c.created_at.clone(),
            })
            .collect())
    }

    async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        self.record(Call::GetClient(id.to_string()))?;
        self.with_client(id, |c| c.clone()).ok_or(ApiError::NotFound)
    }

    async fn create_client(&self, dto: &ClientDto) -> Result<(), ApiError> {
        self.record(Call::CreateClient(dto.name.clone()))?;
        if self.clients.borrow().iter().any(|c| c.name == dto.name) {
            return Err(ApiError::Http {
                status: 400,
                message: "Cliente già esistente".to_string(),
            });
        }
        self.insert_client(dto);
        Ok(())
    }

    async fn update_client(&self, id: &str, dto: &ClientDto) -> Result<(), ApiError> {
        self.record(Call::UpdateClient(id.to_string()))?;
        self.with_client(id, |c| c.apply_dto(dto))
            .ok_or(ApiError::NotFound)
    }

    async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteClient(id.to_string()))?;
        self.clients.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }

    async fn auto_generate(
        &self,
        req: &AutoGenerateRequest,
    ) -> Result<ClientProfileDraft, ApiError> {
        self.record(Call::AutoGenerate {
            url: req.url.clone(),
            openai_api_key: req.openai_api_key.clone(),
        })?;
        Ok(ClientProfileDraft {
            name: Some("Acme Srl".to_string()),
            url: Some(req.url.clone()),
            sector: Some("Ferramenta".to_string()),
            ..Default::default()
        })
    }
}

#[async_trait(?Send)]
impl KeywordApi for FakeBackend {
    async fn add_keyword(&self, client_id: &str, keyword: &str) -> Result<(), ApiError> {
        self.record(Call::AddKeyword {
            client_id: client_id.to_string(),
            keyword: keyword.to_string(),
        })?;
        let id = self.new_id("k");
        self.with_client(client_id, |c| {
            c.keyword_history.push(Keyword {
                id,
                keyword: keyword.to_string(),
                status: KeywordStatus::Backlog,
                created_at: None,
            })
        });
        Ok(())
    }

    async fn delete_keyword(&self, client_id: &str, keyword_id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteKeyword {
            client_id: client_id.to_string(),
            keyword_id: keyword_id.to_string(),
        })?;
        self.with_client(client_id, |c| {
            c.keyword_history.retain(|k| k.id != keyword_id)
        });
        Ok(())
    }

    async fn update_keyword_status(
        &self,
        client_id: &str,
        keyword_id: &str,
        status: KeywordStatus,
    ) -> Result<(), ApiError> {
        self.record(Call::UpdateKeywordStatus {
            client_id: client_id.to_string(),
            keyword_id: keyword_id.to_string(),
            status,
        })
    }

    async fn clear_keywords(&self, client_id: &str) -> Result<(), ApiError> {
        self.record(Call::ClearKeywords(client_id.to_string()))?;
        self.with_client(client_id, |c| c.keyword_history.clear());
        Ok(())
    }

    async fn bulk_add_keywords(
        &self,
        client_id: &str,
        keywords: &[String],
    ) -> Result<BulkKeywordsResponse, ApiError> {
        self.record(Call::BulkAddKeywords {
            client_id: client_id.to_string(),
            keywords: keywords.to_vec(),
        })?;
        let mut result = BulkKeywordsResponse::default();
        for keyword in keywords {
            let id = self.new_id("k");
            let added = self
                .with_client(client_id, |c| {
                    let lowered = keyword.to_lowercase();
                    if c.keyword_history
                        .iter()
                        .any(|k| k.keyword.to_lowercase() == lowered)
                    {
                        return false;
                    }
                    c.keyword_history.push(Keyword {
                        id,
                        keyword: keyword.clone(),
                        status: KeywordStatus::Backlog,
                        created_at: None,
                    });
                    true
                })
                .ok_or(ApiError::NotFound)?;
            if added {
                result.added += 1;
            } else {
                result.skipped += 1;
            }
        }
        Ok(result)
    }
}

#[async_trait(?Send)]
impl BriefApi for FakeBackend {
    async fn list_briefs(&self) -> Result<Vec<BriefSummary>, ApiError> {
        self.record(Call::ListBriefs)?;
        Ok(self.briefs.borrow().clone())
    }
}

#[async_trait(?Send)]
impl SeoAnalysisApi for FakeBackend {
    async fn analyse(&self, req: &AnalyseRequest) -> Result<AnalyseResponse, ApiError> {
        self.record(Call::Analyse(req.clone()))?;
        Ok(AnalyseResponse {
            brief_output: format!("# Brief: {}", req.keyword),
            competitors_analysed: u32::from(req.max_competitors),
        })
    }
}

#[async_trait(?Send)]
impl ArticleWriterApi for FakeBackend {
    async fn generate_article(
        &self,
        req: &GenerateArticleRequest,
    ) -> Result<GenerateArticleResponse, ApiError> {
        self.record(Call::GenerateArticle(req.clone()))?;
        Ok(GenerateArticleResponse {
            article: format!("# Articolo\n\nLunghezza: {}", req.length.label()),
        })
    }
}
