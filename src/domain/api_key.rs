use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Server,
    Client,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
    source: CredentialSource,
}

impl ApiKey {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn resolve(server: Option<&str>, client: Option<&str>) -> Option<Self> {
        fn usable(key: Option<&str>) -> Option<&str> {
            key.map(str::trim).filter(|k| !k.is_empty())
        }
        usable(server)
            .map(|k| Self::new(k, CredentialSource::Server))
            .or_else(|| usable(client).map(|k| Self::new(k, CredentialSource::Client)))
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}
