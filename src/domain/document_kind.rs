#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Contract,
    Nda,
    Employment,
    Rental,
    Service,
    Partnership,
    Terms,
    Privacy,
    Invoice,
    Notice,
    Other,
}

impl DocumentKind {
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "contract" => Self::Contract,
            "nda" => Self::Nda,
            "employment" => Self::Employment,
            "rental" => Self::Rental,
            "service" => Self::Service,
            "partnership" => Self::Partnership,
            "terms" => Self::Terms,
            "privacy" => Self::Privacy,
            "invoice" => Self::Invoice,
            "notice" => Self::Notice,
            _ => Self::Other,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Contract => "a comprehensive contract agreement",
            Self::Nda => "a non-disclosure agreement (NDA)",
            Self::Employment => "an employment agreement contract",
            Self::Rental => "a rental/lease agreement",
            Self::Service => "a service agreement contract",
            Self::Partnership => "a partnership agreement",
            Self::Terms => "terms of service document",
            Self::Privacy => "a privacy policy document",
            Self::Invoice => "a legal invoice template",
            Self::Notice => "a legal notice document",
            Self::Other => "a legal document",
        }
    }
}
