//! Image CDN URLs for posters, backdrops and profile pictures.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    W200,
    W300,
    W400,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W200 => "w200",
            PosterSize::W300 => "w300",
            PosterSize::W400 => "w400",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSize::W45 => "w45",
            ProfileSize::W185 => "w185",
            ProfileSize::H632 => "h632",
            ProfileSize::Original => "original",
        }
    }
}

pub const PLACEHOLDER_POSTER: &str = "/placeholder-movie.jpg";
pub const PLACEHOLDER_BACKDROP: &str = "/placeholder-backdrop.jpg";
pub const PLACEHOLDER_PROFILE: &str = "/placeholder-profile.jpg";

pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn poster(&self, path: Option<&str>, size: PosterSize) -> String {
        self.build(path, size.as_str(), PLACEHOLDER_POSTER)
    }

    pub fn backdrop(&self, path: Option<&str>, size: BackdropSize) -> String {
        self.build(path, size.as_str(), PLACEHOLDER_BACKDROP)
    }

    pub fn profile(&self, path: Option<&str>, size: ProfileSize) -> String {
        self.build(path, size.as_str(), PLACEHOLDER_PROFILE)
    }

    fn build(&self, path: Option<&str>, size: &str, placeholder: &str) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(p) if p.starts_with('/') => format!("{}/{}{}", self.base_url, size, p),
            Some(p) => format!("{}/{}/{}", self.base_url, size, p),
            None => placeholder.to_string(),
        }
    }
}
