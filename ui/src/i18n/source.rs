//! Where translation resources come from.

use async_trait::async_trait;
use rust_embed::Embed;
use tracing::debug;

use super::error::LoadError;
use super::language::LanguageCode;
use super::resource::TranslationResource;

/// Deterministic location of a language's resource, relative to the site root.
pub fn resource_path(language: LanguageCode) -> String {
    format!("lang/{}.json", language.code())
}

/// Fetches one translation resource per language.
///
/// Futures are `?Send`: in the browser they wrap `fetch` promises.
#[async_trait(?Send)]
pub trait ResourceSource {
    async fn fetch(&self, language: LanguageCode) -> Result<TranslationResource, LoadError>;
}

/// Resources served next to the page and retrieved over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// `base_url` must be absolute (e.g. `https://example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, language: LanguageCode) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource_path(language)
        )
    }
}

#[async_trait(?Send)]
impl ResourceSource for HttpSource {
    async fn fetch(&self, language: LanguageCode) -> Result<TranslationResource, LoadError> {
        let url = self.url_for(language);
        debug!(%url, "fetching translation resource");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|err| LoadError::Transport {
                    language,
                    reason: err.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                language,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| LoadError::Transport {
            language,
            reason: err.to_string(),
        })?;
        TranslationResource::from_json(language, &body)
    }
}

/// Resource files compiled into the binary.
#[derive(Embed)]
#[folder = "lang"]
struct BundledResources;

/// Serves the bundled `lang/*.json` files without touching the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Languages that have a bundled file.
    pub fn available_languages() -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|lang| BundledResources::get(&format!("{}.json", lang.code())).is_some())
            .collect()
    }
}

#[async_trait(?Send)]
impl ResourceSource for EmbeddedSource {
    async fn fetch(&self, language: LanguageCode) -> Result<TranslationResource, LoadError> {
        let file = BundledResources::get(&format!("{}.json", language.code()))
            .ok_or(LoadError::NotFound { language })?;
        let body = std::str::from_utf8(&file.data).map_err(|err| LoadError::Parse {
            language,
            reason: err.to_string(),
        })?;
        TranslationResource::from_json(language, body)
    }
}

/// Source picked at startup from the page configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Embedded(EmbeddedSource),
    Http(HttpSource),
}

#[async_trait(?Send)]
impl ResourceSource for ConfiguredSource {
    async fn fetch(&self, language: LanguageCode) -> Result<TranslationResource, LoadError> {
        match self {
            Self::Embedded(source) => source.fetch(language).await,
            Self::Http(source) => source.fetch(language).await,
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn serve(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lang/fr.json"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn success_response_is_parsed() {
        let server = serve(200, r#"{"hero_title":"Bienvenue"}"#).await;
        let resource = HttpSource::new(server.uri())
            .fetch(LanguageCode::Fr)
            .await
            .expect("200 with a flat map should load");
        assert_eq!(resource.lookup("hero_title"), Some("Bienvenue"));
    }

    #[tokio::test]
    async fn not_found_maps_to_status_error() {
        let server = serve(404, "").await;
        let err = HttpSource::new(server.uri())
            .fetch(LanguageCode::Fr)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Status {
                language: LanguageCode::Fr,
                status: 404
            }
        ));
    }

    #[tokio::test]
    async fn server_error_maps_to_status_error() {
        // Body is valid JSON; the status alone must fail the load.
        let server = serve(500, r#"{"hero_title":"Bienvenue"}"#).await;
        let err = HttpSource::new(server.uri())
            .fetch(LanguageCode::Fr)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn nested_body_maps_to_parse_error() {
        let server = serve(200, r#"{"hero":{"title":"Bienvenue"}}"#).await;
        let err = HttpSource::new(server.uri())
            .fetch(LanguageCode::Fr)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                language: LanguageCode::Fr,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn connection_error_maps_to_transport_error() {
        // Nothing listens on port 1.
        let err = HttpSource::new("http://localhost:1")
            .fetch(LanguageCode::Fr)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Transport { .. }));
    }

    #[tokio::test]
    async fn missing_language_file_is_a_status_error() {
        let server = serve(200, "{}").await;
        let err = HttpSource::new(server.uri())
            .fetch(LanguageCode::Ar)
            .await
            .unwrap_err();
        // wiremock answers unmatched requests with 404.
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }
}
