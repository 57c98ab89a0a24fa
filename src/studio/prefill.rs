//! Studio links: parsing query parameters into form state, and building
//! links that profile pages hand to the Studio.
use reqwest::Url;

use crate::studio::state::StudioSettings;
use crate::studio::Mode;

const LINK_BASE: &str = "http://local/studio";

/// Values a studio link may carry. Absent or unusable values stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prefill {
    pub mode: Option<Mode>,
    pub prompt: Option<String>,
    pub character: Option<String>,
    pub aspect: Option<String>,
    pub seed: Option<i64>,
}

impl Prefill {
    /// Parse a query string. Accepts `a=b&c=d`, `?a=b`, or a whole
    /// `/studio?a=b` link. The first occurrence of a key wins.
    pub fn from_query(query: &str) -> Self {
        let query = match query.split_once('?') {
            Some((_, q)) => q,
            None => query,
        };
        let url = match Url::parse(&format!("{LINK_BASE}?{query}")) {
            Ok(url) => url,
            Err(_) => return Prefill::default(),
        };

        let mut prefill = Prefill::default();
        let mut seen: Vec<String> = Vec::new();
        for (key, value) in url.query_pairs() {
            if seen.iter().any(|k| *k == key) {
                continue;
            }
            seen.push(key.to_string());
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "mode" => prefill.mode = Mode::parse(value),
                "prompt" => prefill.prompt = Some(value.to_string()),
                "character" => prefill.character = Some(value.to_string()),
                "aspect" => prefill.aspect = Some(value.to_string()),
                "seed" => prefill.seed = value.parse().ok(),
                _ => {}
            }
        }
        prefill
    }

    /// Overwrite only the settings this prefill carries.
    pub fn apply(&self, settings: &mut StudioSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(prompt) = &self.prompt {
            settings.prompt = prompt.clone();
        }
        if let Some(character) = &self.character {
            settings.character = Some(character.clone());
        }
        if let Some(aspect) = &self.aspect {
            settings.aspect = aspect.clone();
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudioLink<'a> {
    pub mode: Mode,
    pub character: &'a str,
    pub seed: Option<i64>,
    pub aspect: Option<&'a str>,
    pub prompt: Option<&'a str>,
}

/// `/studio?mode=..&character=..[&seed=..][&aspect=..][&prompt=..]`
pub fn build_studio_url(link: &StudioLink<'_>) -> String {
    let mut url = match Url::parse(LINK_BASE) {
        Ok(url) => url,
        Err(_) => return "/studio".to_string(),
    };
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("mode", link.mode.as_str());
        pairs.append_pair("character", link.character);
        if let Some(seed) = link.seed {
            pairs.append_pair("seed", &seed.to_string());
        }
        if let Some(aspect) = link.aspect.filter(|a| !a.is_empty()) {
            pairs.append_pair("aspect", aspect);
        }
        if let Some(prompt) = link.prompt.filter(|p| !p.is_empty()) {
            pairs.append_pair("prompt", prompt);
        }
    }
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}
