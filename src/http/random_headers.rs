use rand::Rng;
use rand::seq::IndexedRandom;

/// Desktop platforms only; the listing page serves a different layout to mobile agents.
const PLATFORMS: [&str; 3] = [
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

pub fn random_platform() -> &'static str {
    let mut rng = rand::rng();
    PLATFORMS.choose(&mut rng).copied().unwrap_or(PLATFORMS[0])
}

/// Chrome-style user agent for the given platform string.
pub fn random_user_agent(platform: &str) -> String {
    let mut rng = rand::rng();
    let chrome_major = 120 + rng.random_range(0..16);

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36",
        platform, chrome_major
    )
}

/// The configured agent if there is one, otherwise a generated one.
pub fn resolve_user_agent(configured: Option<&str>) -> String {
    match configured {
        Some(agent) if !agent.trim().is_empty() => agent.trim().to_string(),
        _ => random_user_agent(random_platform()),
    }
}
